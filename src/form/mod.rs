//! The registration form: record types, state store and the controller that
//! drives validation and submission.

mod controller;
mod state;
mod values;

pub use controller::{FormController, FormEvent};
pub use state::{FormState, RecordValidity, SubmissionOutcome};
pub use values::{Field, FieldChange, FieldErrors, FieldValue, FormValues};
