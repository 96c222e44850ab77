//! Submission lifecycle shared by every form flow. The state machine is
//! UI-agnostic: a terminal front end polls it the same way a web page
//! would read component state.

use crate::error::ApiResult;

/// Lifecycle of one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    /// Nothing sent yet, or a previous attempt was reset.
    Idle,
    /// A request is in flight; further submits are ignored.
    Submitting,
    /// The backend answered successfully.
    Succeeded(T),
    /// Validation or the request itself failed; holds the user-facing text.
    Failed(String),
}

impl<T> Submission<T> {
    pub fn new() -> Self {
        Submission::Idle
    }

    /// Marks the submission in flight. Returns false when a request is
    /// already running, in which case the state does not change.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Submission::Submitting) {
            return false;
        }
        *self = Submission::Submitting;
        true
    }

    /// Records the outcome of an in-flight request.
    pub fn complete(&mut self, outcome: ApiResult<T>) {
        *self = match outcome {
            Ok(value) => Submission::Succeeded(value),
            Err(err) => Submission::Failed(err.to_string()),
        };
    }

    /// Fails the submission without ever entering `Submitting`. Used when
    /// local validation stops the request before it starts.
    pub fn reject(&mut self, message: impl Into<String>) {
        *self = Submission::Failed(message.into());
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Submission::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Submission::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for Submission<T> {
    fn default() -> Self {
        Submission::new()
    }
}
