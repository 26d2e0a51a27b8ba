//! Owned state of the landing page.
//!
//! Every UI action and timer ends up as an `AppEvent` handled here, in one
//! `&mut self` call. Work that has to happen later comes back as `Followup`s
//! for the caller to schedule.

use chrono::{DateTime, Utc};

use super::countdown::{Countdown, CountdownParts};
use super::modal::{ModalController, ModalName};
use super::scarcity::{DecrementSource, ScarcityCounter};
use super::theme::Theme;
use crate::config::LandingConfig;
use crate::registration::field_errors::FieldErrors;
use crate::registration::flow::{self, Effect, FlowEvent, Submission, SubmissionState};
use crate::registration::form::{RegistrationForm, SubmitControl};
use crate::registration::validator::validate;
use crate::utils::storage::{KeyValueStore, POPUP_SHOWN_KEY};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    OpenModal(ModalName),
    CloseModal(ModalName),
    BackdropClicked(ModalName),
    FieldInput { field: String, value: String },
    FieldBlur { field: String },
    Submit,
    SubmissionSettled(Result<(), String>),
    /// `roll` is uniform in [0, 1)
    SpotsDecayTick { roll: f64 },
    AutoPopupElapsed,
    ClockTick(DateTime<Utc>),
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Followup {
    After { delay_ms: u32, event: AppEvent },
    Registered(Submission),
}

pub struct LandingApp {
    config: LandingConfig,
    store: Box<dyn KeyValueStore>,
    modals: ModalController,
    form: RegistrationForm,
    errors: FieldErrors,
    submission: SubmissionState,
    submit: SubmitControl,
    failure: Option<String>,
    spots: ScarcityCounter,
    popup_shown: bool,
    countdown: Countdown,
    clock: CountdownParts,
    theme: Theme,
}

impl LandingApp {
    pub fn load(store: Box<dyn KeyValueStore>, config: LandingConfig, now: DateTime<Utc>) -> Self {
        let spots = ScarcityCounter::load(store.as_ref(), config.default_spots, config.spots_floor);
        let popup_shown = store.get(POPUP_SHOWN_KEY).is_some();
        let theme = Theme::load(store.as_ref());
        let mut countdown = Countdown::starting_at(now, config.countdown_hours);
        let clock = countdown.tick(now);

        log::info!("landing loaded with {} spots left", spots.value());

        Self {
            modals: ModalController::new(&config.video_id),
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
            submission: SubmissionState::Idle,
            submit: SubmitControl::new(&config.submit_label, &config.busy_label),
            failure: None,
            spots,
            popup_shown,
            countdown,
            clock,
            theme,
            config,
            store,
        }
    }

    pub fn handle(&mut self, event: AppEvent) -> Vec<Followup> {
        let mut followups = Vec::new();

        match event {
            AppEvent::OpenModal(name) => self.open_modal(name),
            AppEvent::CloseModal(name) => {
                self.modals.close(name);
            }
            AppEvent::BackdropClicked(name) => {
                self.modals.backdrop_clicked(name);
            }
            AppEvent::FieldInput { field, value } => {
                if self.form.set_value(&field, &value) {
                    self.errors.clear_error(&field);
                }
            }
            AppEvent::FieldBlur { field } => {
                if let Some(field) = self.form.field(&field) {
                    let result = validate(field);
                    if result.valid {
                        self.errors.clear_error(&field.name);
                    } else {
                        self.errors.show_error(&field.name, &result.message);
                    }
                }
            }
            AppEvent::Submit => {
                self.failure = None;
                let fields = self.form.fields().to_vec();
                self.run_flow(FlowEvent::Submit(fields), &mut followups);
            }
            AppEvent::SubmissionSettled(outcome) => {
                self.run_flow(FlowEvent::Settled(outcome), &mut followups);
            }
            AppEvent::SpotsDecayTick { roll } => {
                if roll < self.config.decay_probability {
                    self.decrement_spots(DecrementSource::Decay);
                }
            }
            AppEvent::AutoPopupElapsed => {
                if !self.popup_shown {
                    self.open_modal(ModalName::Registration);
                    self.popup_shown = true;
                    if let Err(e) = self.store.set(POPUP_SHOWN_KEY, "true") {
                        log::warn!("could not remember auto popup: {}", e);
                    }
                }
            }
            AppEvent::ClockTick(now) => {
                self.clock = self.countdown.tick(now);
            }
            AppEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.theme.persist(self.store.as_ref());
            }
        }

        followups
    }

    fn run_flow(&mut self, event: FlowEvent, followups: &mut Vec<Followup>) {
        let (next, effects) = flow::step(&self.submission, event, &self.config.timings);
        self.submission = next;
        for effect in effects {
            self.apply(effect, followups);
        }
    }

    fn apply(&mut self, effect: Effect, followups: &mut Vec<Followup>) {
        match effect {
            Effect::ShowError { field, message } => self.errors.show_error(&field, &message),
            Effect::ClearError { field } => self.errors.clear_error(&field),
            Effect::BusySubmit => self.submit.set_busy(),
            // Stand-in for a backend call; the simulated submission always succeeds.
            Effect::ScheduleSettlement { delay_ms } => followups.push(Followup::After {
                delay_ms,
                event: AppEvent::SubmissionSettled(Ok(())),
            }),
            Effect::ClearForm => self.form.clear(),
            Effect::CloseModal(name) => {
                self.modals.close(name);
            }
            Effect::OpenModalAfter { modal, delay_ms } => followups.push(Followup::After {
                delay_ms,
                event: AppEvent::OpenModal(modal),
            }),
            Effect::RestoreSubmit => self.submit.restore(),
            Effect::DecrementSpots => self.decrement_spots(DecrementSource::Registration),
            Effect::NotifyRegistered(submission) => {
                log::info!("registration completed");
                followups.push(Followup::Registered(submission));
            }
            Effect::ShowFailure(message) => {
                log::warn!("registration rejected: {}", message);
                self.failure = Some(message);
            }
        }
    }

    fn open_modal(&mut self, name: ModalName) {
        if let Err(e) = self.modals.open(name) {
            log::warn!("{}", e);
        }
    }

    /// Single mutation point for the counter; persists on change.
    fn decrement_spots(&mut self, source: DecrementSource) {
        if self.spots.decrement(source) {
            log::debug!("spots left now {} ({:?})", self.spots.value(), source);
            self.spots.persist(self.store.as_ref());
        }
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn spots_left(&self) -> u32 {
        self.spots.value()
    }

    pub fn clock(&self) -> CountdownParts {
        self.clock
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::validator::EMAIL_MESSAGE;
    use crate::utils::storage::{MemoryStorage, SPOTS_LEFT_KEY, THEME_KEY};
    use chrono::TimeZone;
    use std::rc::Rc;

    /// Shares the backing map with the app so tests can inspect writes.
    struct SharedStorage(Rc<MemoryStorage>);

    impl KeyValueStore for SharedStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), crate::utils::storage::StorageError> {
            self.0.set(key, value)
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn app_with(store: &Rc<MemoryStorage>) -> LandingApp {
        LandingApp::load(
            Box::new(SharedStorage(store.clone())),
            LandingConfig::default(),
            now(),
        )
    }

    fn fill(app: &mut LandingApp, name: &str, email: &str, phone: &str) {
        for (field, value) in [("name", name), ("email", email), ("phone", phone)] {
            app.handle(AppEvent::FieldInput {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
    }

    fn expect_after(followup: &Followup) -> (u32, AppEvent) {
        match followup {
            Followup::After { delay_ms, event } => (*delay_ms, event.clone()),
            other => panic!("expected a scheduled event, got {:?}", other),
        }
    }

    mod registration {
        use super::*;

        #[test]
        fn test_valid_submission_end_to_end() {
            let store = Rc::new(MemoryStorage::new());
            store.set(SPOTS_LEFT_KEY, "23").unwrap();
            let mut app = app_with(&store);

            app.handle(AppEvent::OpenModal(ModalName::Registration));
            fill(&mut app, "Ann", "ann@x.com", "5551234567");

            let followups = app.handle(AppEvent::Submit);
            assert!(app.submission().is_submitting());
            assert!(app.submit_control().is_busy());
            assert_eq!(app.submit_control().label(), "Registering...");
            assert_eq!(followups.len(), 1);
            let (delay, settle) = expect_after(&followups[0]);
            assert_eq!(delay, 2_000);

            let followups = app.handle(settle);
            assert_eq!(app.submission(), &SubmissionState::Succeeded);
            assert!(app.form().fields().iter().all(|f| f.raw_value.is_empty()));
            assert!(!app.modals().is_open(ModalName::Registration));
            assert!(!app.modals().is_open(ModalName::Success));
            assert!(!app.submit_control().is_disabled());
            assert_eq!(app.submit_control().label(), "Reserve My Free Spot");
            assert_eq!(app.spots_left(), 22);
            assert_eq!(store.get(SPOTS_LEFT_KEY).as_deref(), Some("22"));

            let (stagger, open_success) = expect_after(&followups[0]);
            assert_eq!(stagger, 300);
            let Followup::Registered(submission) = &followups[1] else {
                panic!("expected registration notice, got {:?}", followups[1]);
            };
            assert_eq!(submission.values["name"], "Ann");
            assert_eq!(submission.values["phone"], "5551234567");

            app.handle(open_success);
            assert!(app.modals().is_open(ModalName::Success));
            assert!(app.modals().scroll_locked());
        }

        #[test]
        fn test_registration_counts_below_decay_floor() {
            let store = Rc::new(MemoryStorage::new());
            store.set(SPOTS_LEFT_KEY, "10").unwrap();
            let mut app = app_with(&store);
            fill(&mut app, "Ann", "ann@x.com", "5551234567");

            let followups = app.handle(AppEvent::Submit);
            let (_, settle) = expect_after(&followups[0]);
            app.handle(settle);

            assert_eq!(app.spots_left(), 9);
            assert_eq!(store.get(SPOTS_LEFT_KEY).as_deref(), Some("9"));
        }

        #[test]
        fn test_invalid_email_blocks_submission() {
            let store = Rc::new(MemoryStorage::new());
            let mut app = app_with(&store);
            app.handle(AppEvent::OpenModal(ModalName::Registration));
            fill(&mut app, "Ann", "not-an-email", "5551234567");
            let before = app.spots_left();

            let followups = app.handle(AppEvent::Submit);

            assert!(followups.is_empty());
            assert_eq!(app.submission(), &SubmissionState::Idle);
            assert_eq!(app.errors().len(), 1);
            assert_eq!(app.errors().message("email"), Some(EMAIL_MESSAGE));
            assert!(!app.submit_control().is_disabled());
            assert_eq!(app.spots_left(), before);
            assert!(app.modals().is_open(ModalName::Registration));
            assert!(!app.modals().is_open(ModalName::Success));
            assert_eq!(store.get(SPOTS_LEFT_KEY), None);
        }

        #[test]
        fn test_resubmitting_after_fix_clears_error() {
            let store = Rc::new(MemoryStorage::new());
            let mut app = app_with(&store);
            fill(&mut app, "Ann", "not-an-email", "5551234567");
            app.handle(AppEvent::Submit);
            // typing clears the message before the next attempt
            fill(&mut app, "Ann", "ann@x.com", "5551234567");
            assert!(app.errors().is_empty());

            app.handle(AppEvent::Submit);
            assert!(app.submission().is_submitting());
        }

        #[test]
        fn test_rejected_submission_surfaces_failure() {
            let store = Rc::new(MemoryStorage::new());
            let mut app = app_with(&store);
            fill(&mut app, "Ann", "ann@x.com", "5551234567");
            app.handle(AppEvent::Submit);

            app.handle(AppEvent::SubmissionSettled(Err("Seats are gone".to_string())));

            assert_eq!(app.failure(), Some("Seats are gone"));
            assert!(!app.submit_control().is_disabled());
            assert_eq!(app.spots_left(), 47);
            assert_eq!(app.form().field("name").unwrap().raw_value, "Ann");
        }
    }

    mod field_feedback {
        use super::*;

        #[test]
        fn test_blur_shows_then_input_clears() {
            let store = Rc::new(MemoryStorage::new());
            let mut app = app_with(&store);

            app.handle(AppEvent::FieldBlur {
                field: "phone".to_string(),
            });
            assert!(app.errors().has_error("phone"));

            app.handle(AppEvent::FieldInput {
                field: "phone".to_string(),
                value: "0".to_string(),
            });
            assert!(!app.errors().has_error("phone"));
        }

        #[test]
        fn test_unknown_field_is_ignored() {
            let store = Rc::new(MemoryStorage::new());
            let mut app = app_with(&store);
            app.handle(AppEvent::FieldBlur {
                field: "nickname".to_string(),
            });
            assert!(app.errors().is_empty());
        }
    }

    mod timers {
        use super::*;

        #[test]
        fn test_auto_popup_opens_once_and_remembers() {
            let store = Rc::new(MemoryStorage::new());
            let mut app = app_with(&store);

            app.handle(AppEvent::AutoPopupElapsed);
            assert!(app.modals().is_open(ModalName::Registration));
            assert_eq!(store.get(POPUP_SHOWN_KEY).as_deref(), Some("true"));

            app.handle(AppEvent::CloseModal(ModalName::Registration));
            app.handle(AppEvent::AutoPopupElapsed);
            assert!(!app.modals().is_open(ModalName::Registration));

            let mut reloaded = app_with(&store);
            reloaded.handle(AppEvent::AutoPopupElapsed);
            assert!(!reloaded.modals().is_open(ModalName::Registration));
        }

        #[test]
        fn test_decay_respects_roll_and_floor() {
            let store = Rc::new(MemoryStorage::new());
            store.set(SPOTS_LEFT_KEY, "11").unwrap();
            let mut app = app_with(&store);

            app.handle(AppEvent::SpotsDecayTick { roll: 0.9 });
            assert_eq!(app.spots_left(), 11);

            app.handle(AppEvent::SpotsDecayTick { roll: 0.1 });
            app.handle(AppEvent::SpotsDecayTick { roll: 0.1 });
            assert_eq!(app.spots_left(), 10);
            assert_eq!(store.get(SPOTS_LEFT_KEY).as_deref(), Some("10"));
        }

        #[test]
        fn test_clock_tick_updates_parts() {
            let store = Rc::new(MemoryStorage::new());
            let mut app = app_with(&store);
            app.handle(AppEvent::ClockTick(now() + chrono::Duration::minutes(90)));
            assert_eq!(app.clock().hours, 22);
            assert_eq!(app.clock().minutes, 30);
        }
    }

    #[test]
    fn test_toggle_theme_persists() {
        let store = Rc::new(MemoryStorage::new());
        let mut app = app_with(&store);
        app.handle(AppEvent::ToggleTheme);
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
