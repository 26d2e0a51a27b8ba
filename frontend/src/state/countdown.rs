use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownParts {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    pub fn hours_text(&self) -> String {
        format!("{:02}", self.hours)
    }

    pub fn minutes_text(&self) -> String {
        format!("{:02}", self.minutes)
    }

    pub fn seconds_text(&self) -> String {
        format!("{:02}", self.seconds)
    }
}

/// Offer countdown. Once the deadline passes a new window starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    deadline: DateTime<Utc>,
    window: Duration,
}

impl Countdown {
    pub fn starting_at(now: DateTime<Utc>, hours: i64) -> Self {
        let window = Duration::hours(hours.max(1));
        Self {
            deadline: now + window,
            window,
        }
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> CountdownParts {
        while self.deadline <= now {
            self.deadline = self.deadline + self.window;
        }

        let remaining = self.deadline - now;
        CountdownParts {
            hours: remaining.num_hours(),
            minutes: remaining.num_minutes() % 60,
            seconds: remaining.num_seconds() % 60,
        }
    }

    #[cfg(test)]
    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_counts_down_from_window() {
        let mut countdown = Countdown::starting_at(start(), 24);
        let parts = countdown.tick(start() + Duration::seconds(1));
        assert_eq!(
            parts,
            CountdownParts {
                hours: 23,
                minutes: 59,
                seconds: 59
            }
        );
    }

    #[test]
    fn test_parts_are_zero_padded() {
        let mut countdown = Countdown::starting_at(start(), 24);
        let parts = countdown.tick(start() + Duration::hours(20) + Duration::minutes(55) + Duration::seconds(51));
        assert_eq!(parts.hours_text(), "03");
        assert_eq!(parts.minutes_text(), "04");
        assert_eq!(parts.seconds_text(), "09");
    }

    #[test]
    fn test_rolls_over_after_expiry() {
        let mut countdown = Countdown::starting_at(start(), 24);
        let later = start() + Duration::hours(49);
        let parts = countdown.tick(later);

        assert_eq!(countdown.deadline(), start() + Duration::hours(72));
        assert_eq!(parts.hours, 23);
        assert_eq!(parts.minutes, 0);
    }
}
