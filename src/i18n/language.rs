//! Language type: a validated form language tag.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;
use thiserror::Error;

/// Errors raised when resolving a language tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unknown(String),
    #[error("Language '{0}' is not enabled")]
    Disabled(String),
}

/// A language that has been validated against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const SPANISH: Language = Language { code: "esp" };

    /// Create a Language from a tag such as `"en"` or `"esp"`.
    ///
    /// Surrounding whitespace is ignored; the match is case-sensitive, like the
    /// tags used in the text table.
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        let code = code.trim();
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => Err(LanguageError::Disabled(code.to_string())),
            None => Err(LanguageError::Unknown(code.to_string())),
        }
    }

    /// The language used when no tag is configured.
    pub fn default_language() -> Language {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    /// The language the toggle control switches to.
    ///
    /// Cycles through the enabled languages in registry order, so with the two
    /// shipped languages this flips between English and Spanish.
    pub fn toggled(self) -> Language {
        let enabled = LanguageRegistry::get().list_enabled();
        let next = enabled
            .iter()
            .position(|lang| lang.code == self.code)
            .map(|idx| enabled[(idx + 1) % enabled.len()])
            .unwrap_or_else(|| LanguageRegistry::get().default_language());
        Language { code: next.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen for
    /// values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Flag glyph rendered as the toggle control.
    pub fn flag(&self) -> &'static str {
        self.config().flag
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Language::ENGLISH.code(), "en");
        assert_eq!(Language::SPANISH.code(), "esp");
        assert_eq!(Language::SPANISH.name(), "Spanish");
    }

    #[test]
    fn test_from_code_known_tags() {
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
        assert_eq!(Language::from_code(" esp ").unwrap(), Language::SPANISH);
    }

    #[test]
    fn test_from_code_unknown() {
        let err = Language::from_code("fr").unwrap_err();
        assert_eq!(err, LanguageError::Unknown("fr".to_string()));
        assert!(err.to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    #[test]
    fn test_toggle_flips_between_two_languages() {
        assert_eq!(Language::ENGLISH.toggled(), Language::SPANISH);
        assert_eq!(Language::SPANISH.toggled(), Language::ENGLISH);
        assert_eq!(Language::ENGLISH.toggled().toggled(), Language::ENGLISH);
    }

    #[test]
    fn test_flags() {
        assert_eq!(Language::ENGLISH.flag(), "🇺🇸");
        assert_eq!(Language::SPANISH.flag(), "🇪🇸");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::SPANISH.to_string(), "esp");
    }
}
