//! Generation request lifecycle shared by every tool view.
//!
//! DESIGN
//! ======
//! One linear machine per view: `Idle -> Pending -> Done`. Validation runs
//! before the transition, so a rejected submission leaves both the phase and
//! any earlier result untouched. Only one request may be in flight.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use classroom::InputError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Done,
}

/// Outcome of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Phase moved to `Pending`; the caller should issue the request.
    Started,
    /// Validation failed; the caller should show one validation toast.
    Rejected(InputError),
    /// A request is already in flight.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToolState<R> {
    pub phase: Phase,
    pub result: Option<R>,
}

impl<R> Default for ToolState<R> {
    fn default() -> Self {
        Self { phase: Phase::Idle, result: None }
    }
}

impl<R> ToolState<R> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Try to start a request given the form's validation outcome.
    pub fn submit(&mut self, check: Result<(), InputError>) -> Submission {
        if self.is_pending() {
            return Submission::Ignored;
        }
        if let Err(err) = check {
            return Submission::Rejected(err);
        }
        self.phase = Phase::Pending;
        Submission::Started
    }

    /// Store a fresh result, replacing any earlier one.
    pub fn complete(&mut self, result: R) {
        self.result = Some(result);
        self.phase = Phase::Done;
    }

    /// Abandon the in-flight request, keeping the earlier result if any.
    pub fn fail(&mut self) {
        self.phase = if self.result.is_some() { Phase::Done } else { Phase::Idle };
    }
}
