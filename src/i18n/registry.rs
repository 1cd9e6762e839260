//! Language registry: Single source of truth for all supported form languages.
//!
//! The registry is a lazily initialised singleton (`OnceLock`). Adding a third
//! language means adding an entry here plus a string table in `strings`.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Language tag used by the form (e.g., "en", "esp")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Flag glyph shown next to the heading as the toggle control
    pub flag: &'static str,

    /// Whether this is the fallback language when nothing is configured
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its tag.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in toggle order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default language
    /// (a programming error in `default_languages`).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language tag is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// English (default) and Spanish.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            flag: "🇺🇸",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "esp",
            name: "Spanish",
            native_name: "Español",
            flag: "🇪🇸",
            is_default: false,
            enabled: true,
        },
    ]
}
