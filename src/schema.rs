//! Schema validation for the registration record.
//!
//! The form only talks to the `SchemaValidator` trait. `UserSchema` is the
//! built-in rule set; it is shared by the form and the mock endpoint so both
//! sides agree on what a valid record is.

use crate::form::{Field, FieldValue, FormValues};
use futures::future::{self, BoxFuture, FutureExt};
use std::fmt;

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 20;
pub const FAV_LANGUAGES: &[&str] = &["javascript", "rust"];
pub const FAV_FOODS: &[&str] = &["broccoli", "spaghetti", "pizza"];

/// A field that failed validation, with every message reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub errors: Vec<String>,
}

impl FieldViolation {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            errors: vec![message.into()],
        }
    }

    /// The message shown next to the field.
    pub fn first_message(&self) -> &str {
        self.errors.first().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.name(), self.errors.join("; "))
    }
}

impl std::error::Error for FieldViolation {}

/// Async boundary to the rule engine.
pub trait SchemaValidator: Send + Sync {
    /// Validate one field's value in isolation.
    fn validate_field<'a>(
        &'a self,
        field: Field,
        value: &'a FieldValue,
    ) -> BoxFuture<'a, Result<(), FieldViolation>>;

    /// Whether the complete record is valid.
    fn is_valid<'a>(&'a self, values: &'a FormValues) -> BoxFuture<'a, bool>;
}

/// Built-in rules for the registration record.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserSchema;

impl UserSchema {
    /// Check one field synchronously, stopping at the first failing rule.
    pub fn check_field(&self, field: Field, value: &FieldValue) -> Result<(), FieldViolation> {
        match (field, value) {
            (Field::Username, FieldValue::Text(v)) => check_username(v),
            (Field::FavLanguage, FieldValue::Text(v)) => check_one_of(
                field,
                v,
                FAV_LANGUAGES,
                "favLanguage must be either javascript or rust",
            ),
            (Field::FavFood, FieldValue::Text(v)) => check_one_of(
                field,
                v,
                FAV_FOODS,
                "favFood must be either broccoli, spaghetti or pizza",
            ),
            (Field::Agreement, FieldValue::Flag(true)) => Ok(()),
            (Field::Agreement, FieldValue::Flag(false)) => {
                Err(FieldViolation::new(field, "agreement must be accepted"))
            }
            (Field::Agreement, FieldValue::Text(_)) => {
                Err(FieldViolation::new(field, "agreement must be a boolean"))
            }
            (_, FieldValue::Flag(_)) => Err(FieldViolation::new(
                field,
                format!("{} must be a string", field.name()),
            )),
        }
    }

    /// Check every field, collecting one violation per failing field.
    pub fn validate_record(&self, values: &FormValues) -> Result<(), Vec<FieldViolation>> {
        let violations: Vec<_> = Field::ALL
            .iter()
            .filter_map(|field| self.check_field(*field, &values.get(*field)).err())
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl SchemaValidator for UserSchema {
    fn validate_field<'a>(
        &'a self,
        field: Field,
        value: &'a FieldValue,
    ) -> BoxFuture<'a, Result<(), FieldViolation>> {
        future::ready(self.check_field(field, value)).boxed()
    }

    fn is_valid<'a>(&'a self, values: &'a FormValues) -> BoxFuture<'a, bool> {
        future::ready(self.validate_record(values).is_ok()).boxed()
    }
}

fn check_username(raw: &str) -> Result<(), FieldViolation> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        Err(FieldViolation::new(Field::Username, "username is required"))
    } else if len < USERNAME_MIN_CHARS {
        Err(FieldViolation::new(
            Field::Username,
            format!("username must be at least {} characters", USERNAME_MIN_CHARS),
        ))
    } else if len > USERNAME_MAX_CHARS {
        Err(FieldViolation::new(
            Field::Username,
            format!("username cannot exceed {} characters", USERNAME_MAX_CHARS),
        ))
    } else {
        Ok(())
    }
}

fn check_one_of(
    field: Field,
    raw: &str,
    allowed: &[&str],
    message: &str,
) -> Result<(), FieldViolation> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(FieldViolation::new(field, format!("{} is required", field.name())))
    } else if allowed.contains(&trimmed) {
        Ok(())
    } else {
        Err(FieldViolation::new(field, message))
    }
}
