//! Internationalization (i18n) for the registration form.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Validated `Language` tag with the toggle rule
//! - `strings`: Static label tables and the `TextResolver` boundary
//!
//! # Example
//!
//! ```rust
//! use registration_form::i18n::{Language, StaticTextTable, TextKey, TextResolver};
//!
//! let language = Language::from_code("esp").unwrap();
//! assert_eq!(StaticTextTable.text(language, TextKey::Submit), "Enviar");
//! assert_eq!(language.toggled(), Language::ENGLISH);
//! ```

mod language;
mod registry;
mod strings;

pub use language::{Language, LanguageError};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, StaticTextTable, TextKey, TextResolver};
