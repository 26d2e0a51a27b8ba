use gloo_timers::callback::{Interval, Timeout};
use rand::Rng;
use yew::Callback;

use crate::config::LandingConfig;
use crate::state::app::AppEvent;

/// Timers that run for the lifetime of the page. Dropping this cancels all of them.
pub struct BackgroundTasks {
    _countdown: Interval,
    _spots_decay: Interval,
    _auto_popup: Timeout,
}

impl BackgroundTasks {
    pub fn start(config: &LandingConfig, dispatch: Callback<AppEvent>) -> Self {
        let countdown = {
            let dispatch = dispatch.clone();
            Interval::new(1_000, move || {
                dispatch.emit(AppEvent::ClockTick(chrono::Utc::now()));
            })
        };

        let period = decay_period(&mut rand::thread_rng(), config);
        log::debug!("spots decay every {} ms", period);
        let spots_decay = {
            let dispatch = dispatch.clone();
            Interval::new(period, move || {
                let roll = rand::thread_rng().gen::<f64>();
                dispatch.emit(AppEvent::SpotsDecayTick { roll });
            })
        };

        let auto_popup = Timeout::new(config.auto_popup_delay_ms, move || {
            dispatch.emit(AppEvent::AutoPopupElapsed);
        });

        Self {
            _countdown: countdown,
            _spots_decay: spots_decay,
            _auto_popup: auto_popup,
        }
    }
}

/// Picked once per page load.
pub fn decay_period<R: Rng>(rng: &mut R, config: &LandingConfig) -> u32 {
    let range = &config.decay_interval_ms;
    if range.is_empty() {
        return range.start.max(1);
    }
    rng.gen_range(range.clone())
}
