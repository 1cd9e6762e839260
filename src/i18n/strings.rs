//! Static text table for every label the registration form renders.

use crate::i18n::Language;

/// Keys into the text table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    HeadingCreateAccount,
    LabelUsername,
    PlaceholderUsername,
    FavLanguageLegend,
    FavLanguageJavascript,
    FavLanguageRust,
    LabelFavFood,
    FavFoodPlaceholder,
    FavFoodPizza,
    FavFoodSpaghetti,
    FavFoodBroccoli,
    LabelAcceptTerms,
    Submit,
}

impl TextKey {
    pub const ALL: [TextKey; 13] = [
        TextKey::HeadingCreateAccount,
        TextKey::LabelUsername,
        TextKey::PlaceholderUsername,
        TextKey::FavLanguageLegend,
        TextKey::FavLanguageJavascript,
        TextKey::FavLanguageRust,
        TextKey::LabelFavFood,
        TextKey::FavFoodPlaceholder,
        TextKey::FavFoodPizza,
        TextKey::FavFoodSpaghetti,
        TextKey::FavFoodBroccoli,
        TextKey::LabelAcceptTerms,
        TextKey::Submit,
    ];
}

/// Looks up display strings by `(language, key)`.
///
/// The language is always passed in by the caller; resolvers hold no notion
/// of a "current" language.
pub trait TextResolver: Send + Sync {
    fn text(&self, language: Language, key: TextKey) -> &str;
}

/// All localized labels for one language.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Heading ====================
    pub heading_create_account: &'static str,

    // ==================== Username ====================
    pub label_username: &'static str,
    pub placeholder_username: &'static str,

    // ==================== Favorite language ====================
    pub fav_language_legend: &'static str,
    pub fav_language_javascript: &'static str,
    pub fav_language_rust: &'static str,

    // ==================== Favorite food ====================
    pub label_fav_food: &'static str,
    /// First `<option>` of the select, bound to the empty value
    pub fav_food_placeholder: &'static str,
    pub fav_food_pizza: &'static str,
    pub fav_food_spaghetti: &'static str,
    pub fav_food_broccoli: &'static str,

    // ==================== Terms / submit ====================
    pub label_accept_terms: &'static str,
    pub submit: &'static str,
}

impl LanguageStrings {
    /// Strings for a language. Unknown languages fall back to English.
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language.code() {
            "esp" => &SPANISH_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }

    pub fn get(&self, key: TextKey) -> &'static str {
        match key {
            TextKey::HeadingCreateAccount => self.heading_create_account,
            TextKey::LabelUsername => self.label_username,
            TextKey::PlaceholderUsername => self.placeholder_username,
            TextKey::FavLanguageLegend => self.fav_language_legend,
            TextKey::FavLanguageJavascript => self.fav_language_javascript,
            TextKey::FavLanguageRust => self.fav_language_rust,
            TextKey::LabelFavFood => self.label_fav_food,
            TextKey::FavFoodPlaceholder => self.fav_food_placeholder,
            TextKey::FavFoodPizza => self.fav_food_pizza,
            TextKey::FavFoodSpaghetti => self.fav_food_spaghetti,
            TextKey::FavFoodBroccoli => self.fav_food_broccoli,
            TextKey::LabelAcceptTerms => self.label_accept_terms,
            TextKey::Submit => self.submit,
        }
    }
}

/// The built-in English/Spanish table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTextTable;

impl TextResolver for StaticTextTable {
    fn text(&self, language: Language, key: TextKey) -> &str {
        LanguageStrings::for_language(language).get(key)
    }
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    heading_create_account: "Create an Account",

    label_username: "Username:",
    placeholder_username: "Type Username",

    fav_language_legend: "Favorite Language:",
    fav_language_javascript: "JavaScript",
    fav_language_rust: "Rust",

    label_fav_food: "Favorite Food:",
    fav_food_placeholder: "-- Select Favorite Food --",
    fav_food_pizza: "Pizza",
    fav_food_spaghetti: "Spaghetti",
    fav_food_broccoli: "Broccoli",

    label_accept_terms: "Agree to our terms",
    submit: "Submit",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    heading_create_account: "Crear una Cuenta",

    label_username: "Nombre de usuario:",
    placeholder_username: "Escriba su nombre de usuario",

    fav_language_legend: "Lenguaje Favorito:",
    fav_language_javascript: "JavaScript",
    fav_language_rust: "Rust",

    label_fav_food: "Comida Favorita:",
    fav_food_placeholder: "-- Seleccione su Comida Favorita --",
    fav_food_pizza: "Pizza",
    fav_food_spaghetti: "Espaguetis",
    fav_food_broccoli: "Brócoli",

    label_accept_terms: "Acepto los términos",
    submit: "Enviar",
};
