//! The form controller: owns the state and reacts to user actions.
//!
//! Validation and submission run as spawned tasks in a `JoinSet`. Their
//! results come back as `FormEvent`s and are applied one at a time by the
//! owner (`next_event` / `settle`), always against the state as it is at that
//! moment. Results that were overtaken by a newer edit carry an outdated
//! sequence number and are dropped.

use crate::client::{RegistrationService, SubmissionError};
use crate::form::{Field, FieldChange, FieldValue, FormState, FormValues, SubmissionOutcome};
use crate::i18n::Language;
use crate::schema::{FieldViolation, SchemaValidator};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::task::{Id, JoinSet};
use tracing::{debug, info, warn};

/// A resolved background operation, waiting to be applied to the state.
#[derive(Debug)]
pub enum FormEvent {
    FieldValidated {
        field: Field,
        seq: u64,
        result: Result<(), FieldViolation>,
    },
    RecordChecked {
        seq: u64,
        valid: bool,
    },
    SubmissionFinished {
        result: Result<String, SubmissionError>,
    },
}

pub struct FormController {
    state: FormState,
    language: Language,
    validator: Arc<dyn SchemaValidator>,
    service: Arc<dyn RegistrationService>,
    tasks: JoinSet<FormEvent>,
    record_seq: u64,
    field_seq: HashMap<Field, u64>,
    submission_task: Option<Id>,
}

impl FormController {
    /// Create a controller and schedule the initial full-record check.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        language: Language,
        validator: Arc<dyn SchemaValidator>,
        service: Arc<dyn RegistrationService>,
    ) -> Self {
        let mut controller = Self {
            state: FormState::new(),
            language,
            validator,
            service,
            tasks: JoinSet::new(),
            record_seq: 0,
            field_seq: HashMap::new(),
            submission_task: None,
        };
        let values = Arc::clone(controller.state.values());
        controller.schedule_record_check(values);
        controller
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn submit_allowed(&self) -> bool {
        self.state.submit_allowed()
    }

    /// Number of spawned validations/submissions whose results are not applied yet.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Flip the UI language. Values and errors are untouched.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        debug!("Language toggled to {}", self.language);
        self.language
    }

    /// Apply a change to one field and validate it in the background.
    pub fn on_change(&mut self, change: FieldChange) {
        let field = change.field();
        let value = change.value();

        let next = self.state.values().with_change(&change);
        let snapshot = self.state.replace_values(next);

        self.schedule_field_validation(field, value);
        self.schedule_record_check(snapshot);
    }

    /// Adapter for raw control events (`name`, `value`, `checked`).
    ///
    /// Returns `false` when the name does not belong to the record.
    pub fn on_input(&mut self, name: &str, value: &str, checked: bool) -> bool {
        match FieldChange::from_input(name, value, checked) {
            Some(change) => {
                self.on_change(change);
                true
            }
            None => {
                warn!("Ignoring input for unknown field '{}'", name);
                false
            }
        }
    }

    /// Submit the current record. Returns `false` if submission is not allowed.
    pub fn on_submit(&mut self) -> bool {
        if !self.state.submit_allowed() {
            debug!(
                "Submit ignored (validity: {:?}, in flight: {})",
                self.state.record_validity(),
                self.state.in_flight()
            );
            return false;
        }

        self.state.clear_outcome();
        self.state.set_in_flight(true);

        let values = Arc::clone(self.state.values());
        let service = Arc::clone(&self.service);
        info!("Submitting registration for '{}'", values.username);

        let id = self.spawn(async move {
            let result = service.register(&values).await;
            FormEvent::SubmissionFinished { result }
        });
        self.submission_task = Some(id);
        true
    }

    /// Wait for the next background result and apply it.
    ///
    /// Returns `false` once nothing is pending.
    pub async fn next_event(&mut self) -> bool {
        match self.tasks.join_next_with_id().await {
            Some(Ok((id, event))) => {
                if self.submission_task == Some(id) {
                    self.submission_task = None;
                }
                self.apply(event);
                true
            }
            Some(Err(e)) => {
                warn!("Form task {} failed: {}", e.id(), e);
                if self.submission_task == Some(e.id()) {
                    self.submission_task = None;
                    self.apply(FormEvent::SubmissionFinished {
                        result: Err(SubmissionError::Transport(e.to_string())),
                    });
                }
                true
            }
            None => false,
        }
    }

    /// Apply results until no background work is left.
    pub async fn settle(&mut self) {
        while self.next_event().await {}
    }

    /// Merge one resolved result into the current state.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::FieldValidated { field, seq, result } => {
                if self.field_seq.get(&field).copied() != Some(seq) {
                    debug!("Dropping stale validation #{} for {}", seq, field.name());
                    return;
                }
                match result {
                    Ok(()) => self.state.clear_field_error(field),
                    Err(violation) => {
                        debug!("{} invalid: {}", field.name(), violation.first_message());
                        self.state
                            .set_field_error(field, violation.first_message().to_string());
                    }
                }
            }
            FormEvent::RecordChecked { seq, valid } => {
                if seq != self.record_seq {
                    debug!(
                        "Dropping stale record check #{} (latest #{})",
                        seq, self.record_seq
                    );
                    return;
                }
                self.state.set_record_validity(valid);
            }
            FormEvent::SubmissionFinished { result } => {
                self.state.set_in_flight(false);
                match result {
                    Ok(message) => {
                        info!("Registration succeeded: {}", message);
                        self.reset_values();
                        self.state.set_outcome(SubmissionOutcome::Succeeded(message));
                    }
                    Err(e) => {
                        warn!("Registration failed: {}", e);
                        let message = e.user_message().map(str::to_string);
                        self.state.set_outcome(SubmissionOutcome::Failed(message));
                    }
                }
            }
        }
    }

    fn reset_values(&mut self) {
        // Field validations still running were started for the old values.
        for seq in self.field_seq.values_mut() {
            *seq += 1;
        }
        let snapshot = self.state.replace_values(FormValues::default());
        self.schedule_record_check(snapshot);
    }

    fn schedule_field_validation(&mut self, field: Field, value: FieldValue) {
        let seq = {
            let entry = self.field_seq.entry(field).or_insert(0);
            *entry += 1;
            *entry
        };
        let validator = Arc::clone(&self.validator);

        self.spawn(async move {
            let result = validator.validate_field(field, &value).await;
            FormEvent::FieldValidated { field, seq, result }
        });
    }

    fn schedule_record_check(&mut self, values: Arc<FormValues>) {
        self.record_seq += 1;
        let seq = self.record_seq;
        let validator = Arc::clone(&self.validator);

        self.spawn(async move {
            let valid = validator.is_valid(&values).await;
            FormEvent::RecordChecked { seq, valid }
        });
    }

    fn spawn<F>(&mut self, task: F) -> Id
    where
        F: Future<Output = FormEvent> + Send + 'static,
    {
        self.tasks.spawn(task).id()
    }
}
