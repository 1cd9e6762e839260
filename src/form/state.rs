use crate::form::{Field, FieldErrors, FormValues};
use std::sync::Arc;

/// Result of the most recent full-record check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordValidity {
    /// A check for the current values has not resolved yet.
    #[default]
    Pending,
    Valid,
    Invalid,
}

/// Outcome of the latest submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded(String),
    /// The message is whatever the server put in its error payload, if anything.
    Failed(Option<String>),
}

impl SubmissionOutcome {
    pub fn success_message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Succeeded(message) => Some(message),
            SubmissionOutcome::Failed(_) => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Succeeded(_) => None,
            SubmissionOutcome::Failed(message) => message.as_deref(),
        }
    }
}

/// Everything the rendering layer reads. Holds no validation logic.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: Arc<FormValues>,
    errors: FieldErrors,
    outcome: Option<SubmissionOutcome>,
    record_validity: RecordValidity,
    in_flight: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current values snapshot. Holders of an older snapshot keep seeing it unchanged.
    pub fn values(&self) -> &Arc<FormValues> {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(SubmissionOutcome::success_message)
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(SubmissionOutcome::failure_message)
    }

    pub fn record_validity(&self) -> RecordValidity {
        self.record_validity
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// The submit gate: the current record validated and nothing is in flight.
    pub fn submit_allowed(&self) -> bool {
        self.record_validity == RecordValidity::Valid && !self.in_flight
    }

    /// Replace the values snapshot. Invalidates the record check result.
    pub fn replace_values(&mut self, values: FormValues) -> Arc<FormValues> {
        self.values = Arc::new(values);
        self.record_validity = RecordValidity::Pending;
        Arc::clone(&self.values)
    }

    pub fn set_field_error(&mut self, field: Field, message: impl Into<String>) {
        self.errors.set(field, message);
    }

    pub fn clear_field_error(&mut self, field: Field) {
        self.errors.clear(field);
    }

    pub fn set_record_validity(&mut self, valid: bool) {
        self.record_validity = if valid {
            RecordValidity::Valid
        } else {
            RecordValidity::Invalid
        };
    }

    pub fn set_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }

    pub fn set_outcome(&mut self, outcome: SubmissionOutcome) {
        self.outcome = Some(outcome);
    }

    pub fn clear_outcome(&mut self) {
        self.outcome = None;
    }
}
