use serde::Serialize;
use thiserror::Error;

/// Lifecycle of one booking submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: SubmissionState,
        to: SubmissionState,
    },
}

/// Validates if a state transition is allowed
pub fn validate_transition(
    from: SubmissionState,
    to: SubmissionState,
) -> Result<(), TransitionError> {
    use SubmissionState::*;

    match (from, to) {
        (Idle, Validating) => Ok(()),
        // Rejected by validation, back to the form
        (Validating, Idle) => Ok(()),
        (Validating, Submitting) => Ok(()),
        (Submitting, Success) => Ok(()),
        (Submitting, Failed) => Ok(()),
        // A new attempt after a terminal outcome
        (Success, Validating) => Ok(()),
        (Failed, Validating) => Ok(()),

        _ => Err(TransitionError::InvalidTransition { from, to }),
    }
}

/// Tracks the state of a submission and records every step taken.
#[derive(Debug, Clone)]
pub struct Submission {
    state: SubmissionState,
    history: Vec<SubmissionState>,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            history: vec![SubmissionState::Idle],
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn history(&self) -> &[SubmissionState] {
        &self.history
    }

    pub fn transition(&mut self, to: SubmissionState) -> Result<(), TransitionError> {
        validate_transition(self.state, to)?;

        tracing::debug!("Booking submission {:?} -> {:?}", self.state, to);
        self.state = to;
        self.history.push(to);
        Ok(())
    }
}
