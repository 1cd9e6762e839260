//! Headless registration form.
//!
//! `form::FormController` holds the record, validates fields in the background
//! against a `schema::SchemaValidator`, gates submission on full-record
//! validity and submits through a `client::RegistrationService`. Labels are
//! rendered by `render::RenderedForm` from the `i18n` tables in English or
//! Spanish.

pub mod client;
pub mod config;
pub mod form;
pub mod i18n;
pub mod render;
pub mod schema;
pub mod server;
