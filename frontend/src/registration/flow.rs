//! Registration submission state machine.
//!
//! `step` is pure: it takes the current state and an event and returns the
//! next state plus the effects the caller has to carry out. Timers, the form,
//! the modals and the counter all live with the caller.

use serde::Serialize;
use std::collections::BTreeMap;

use super::validator::{validate, FormField};
use crate::state::modal::ModalName;

#[derive(Debug, Clone, PartialEq)]
pub struct FlowTimings {
    /// Simulated round trip of the submission
    pub submission_delay_ms: u32,
    /// Pause between closing the form and showing the success modal
    pub success_stagger_ms: u32,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            submission_delay_ms: 2_000,
            success_stagger_ms: 300,
        }
    }
}

/// Field values captured when a submission starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub values: BTreeMap<String, String>,
}

impl Submission {
    fn capture(fields: &[FormField]) -> Self {
        Self {
            values: fields
                .iter()
                .map(|f| (f.name.clone(), f.raw_value.trim().to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting(Submission),
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    Submit(Vec<FormField>),
    /// Outcome of the (simulated) submission. `Err` carries a user-facing message.
    Settled(Result<(), String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowError { field: String, message: String },
    ClearError { field: String },
    /// Disable the submit control and swap in the busy label
    BusySubmit,
    ScheduleSettlement { delay_ms: u32 },
    ClearForm,
    CloseModal(ModalName),
    OpenModalAfter { modal: ModalName, delay_ms: u32 },
    RestoreSubmit,
    DecrementSpots,
    NotifyRegistered(Submission),
    ShowFailure(String),
}

/// Validation is synchronous, so `Validating` is entered and left inside the
/// `Submit` step: the returned state is `Idle` or `Submitting`, never
/// `Validating`. A `Submit` seen while already validating (a nested call) is
/// dropped like one seen while submitting.
pub fn step(
    state: &SubmissionState,
    event: FlowEvent,
    timings: &FlowTimings,
) -> (SubmissionState, Vec<Effect>) {
    match (state, event) {
        // The disabled submit control is the only guard against double submits;
        // anything that slips through is dropped here.
        (SubmissionState::Submitting(_) | SubmissionState::Validating, FlowEvent::Submit(_)) => {
            (state.clone(), Vec::new())
        }
        (_, FlowEvent::Submit(fields)) => {
            log::debug!("submission {:?} -> Validating", state);
            validate_all(SubmissionState::Validating, &fields, timings)
        }
        (SubmissionState::Submitting(submission), FlowEvent::Settled(Ok(()))) => (
            SubmissionState::Succeeded,
            vec![
                Effect::ClearForm,
                Effect::CloseModal(ModalName::Registration),
                Effect::OpenModalAfter {
                    modal: ModalName::Success,
                    delay_ms: timings.success_stagger_ms,
                },
                Effect::RestoreSubmit,
                Effect::DecrementSpots,
                Effect::NotifyRegistered(submission.clone()),
            ],
        ),
        (SubmissionState::Submitting(_), FlowEvent::Settled(Err(message))) => (
            SubmissionState::Failed(message.clone()),
            vec![Effect::RestoreSubmit, Effect::ShowFailure(message)],
        ),
        (_, FlowEvent::Settled(_)) => {
            log::debug!("ignoring stale settlement in {:?}", state);
            (state.clone(), Vec::new())
        }
    }
}

fn validate_all(
    validating: SubmissionState,
    fields: &[FormField],
    timings: &FlowTimings,
) -> (SubmissionState, Vec<Effect>) {
    let mut effects = Vec::new();
    let mut all_valid = true;

    for field in fields.iter().filter(|f| f.required) {
        let result = validate(field);
        if result.valid {
            effects.push(Effect::ClearError {
                field: field.name.clone(),
            });
        } else {
            all_valid = false;
            effects.push(Effect::ShowError {
                field: field.name.clone(),
                message: result.message,
            });
        }
    }

    if !all_valid {
        log::debug!("submission {:?} -> Idle", validating);
        return (SubmissionState::Idle, effects);
    }

    log::debug!("submission {:?} -> Submitting", validating);
    effects.push(Effect::BusySubmit);
    effects.push(Effect::ScheduleSettlement {
        delay_ms: timings.submission_delay_ms,
    });
    (SubmissionState::Submitting(Submission::capture(fields)), effects)
}
