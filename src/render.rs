//! Plain-text rendering of the form.
//!
//! Rendering is a pure function of the state, the language and the text
//! resolver; nothing here reads a global "current language".

use crate::form::{Field, FormState};
use crate::i18n::{Language, TextKey, TextResolver};
use std::fmt;

/// One radio button or select option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

/// Everything visible on screen for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedForm {
    pub heading: String,
    /// Toggle control glyph for the current language
    pub flag: &'static str,
    pub success: Option<String>,
    pub failure: Option<String>,

    pub username_label: String,
    pub username_placeholder: String,
    pub username_value: String,
    pub username_error: Option<String>,

    pub fav_language_legend: String,
    pub fav_language_options: Vec<RenderedOption>,
    pub fav_language_error: Option<String>,

    pub fav_food_label: String,
    pub fav_food_options: Vec<RenderedOption>,
    pub fav_food_error: Option<String>,

    pub agreement_label: String,
    pub agreement_checked: bool,
    pub agreement_error: Option<String>,

    pub submit_label: String,
    pub submit_enabled: bool,
}

impl RenderedForm {
    pub fn render(state: &FormState, language: Language, resolver: &dyn TextResolver) -> Self {
        let text = |key: TextKey| resolver.text(language, key).to_string();
        let values = state.values();
        let error = |field: Field| {
            let message = state.errors().get(field);
            (!message.is_empty()).then(|| message.to_string())
        };
        let option = |value: &'static str, key: TextKey, current: &str| RenderedOption {
            value,
            label: text(key),
            selected: current == value,
        };

        Self {
            heading: text(TextKey::HeadingCreateAccount),
            flag: language.flag(),
            success: state.success_message().map(str::to_string),
            failure: state.failure_message().map(str::to_string),

            username_label: text(TextKey::LabelUsername),
            username_placeholder: text(TextKey::PlaceholderUsername),
            username_value: values.username.clone(),
            username_error: error(Field::Username),

            fav_language_legend: text(TextKey::FavLanguageLegend),
            fav_language_options: vec![
                option("javascript", TextKey::FavLanguageJavascript, values.fav_language.as_str()),
                option("rust", TextKey::FavLanguageRust, values.fav_language.as_str()),
            ],
            fav_language_error: error(Field::FavLanguage),

            fav_food_label: text(TextKey::LabelFavFood),
            fav_food_options: vec![
                option("", TextKey::FavFoodPlaceholder, values.fav_food.as_str()),
                option("pizza", TextKey::FavFoodPizza, values.fav_food.as_str()),
                option("spaghetti", TextKey::FavFoodSpaghetti, values.fav_food.as_str()),
                option("broccoli", TextKey::FavFoodBroccoli, values.fav_food.as_str()),
            ],
            fav_food_error: error(Field::FavFood),

            agreement_label: text(TextKey::LabelAcceptTerms),
            agreement_checked: values.agreement,
            agreement_error: error(Field::Agreement),

            submit_label: text(TextKey::Submit),
            submit_enabled: state.submit_allowed(),
        }
    }

    /// Every label drawn from the text table, in display order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels = vec![
            self.heading.as_str(),
            self.username_label.as_str(),
            self.username_placeholder.as_str(),
            self.fav_language_legend.as_str(),
        ];
        labels.extend(self.fav_language_options.iter().map(|o| o.label.as_str()));
        labels.push(self.fav_food_label.as_str());
        labels.extend(self.fav_food_options.iter().map(|o| o.label.as_str()));
        labels.push(self.agreement_label.as_str());
        labels.push(self.submit_label.as_str());
        labels
    }
}

fn mark(selected: bool) -> &'static str {
    if selected {
        "(x)"
    } else {
        "( )"
    }
}

impl fmt::Display for RenderedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} {} ==", self.heading, self.flag)?;
        if let Some(success) = &self.success {
            writeln!(f, "[ok] {}", success)?;
        }
        if let Some(failure) = &self.failure {
            writeln!(f, "[error] {}", failure)?;
        }

        let username = if self.username_value.is_empty() {
            format!("<{}>", self.username_placeholder)
        } else {
            self.username_value.clone()
        };
        writeln!(f, "{} {}", self.username_label, username)?;
        write_error(f, &self.username_error)?;

        writeln!(f, "{}", self.fav_language_legend)?;
        for option in &self.fav_language_options {
            writeln!(f, "  {} {}", mark(option.selected), option.label)?;
        }
        write_error(f, &self.fav_language_error)?;

        let food = self
            .fav_food_options
            .iter()
            .find(|o| o.selected)
            .or_else(|| self.fav_food_options.first())
            .map(|o| o.label.as_str())
            .unwrap_or_default();
        writeln!(f, "{} {}", self.fav_food_label, food)?;
        write_error(f, &self.fav_food_error)?;

        let checkbox = if self.agreement_checked { "[x]" } else { "[ ]" };
        writeln!(f, "{} {}", checkbox, self.agreement_label)?;
        write_error(f, &self.agreement_error)?;

        let state = if self.submit_enabled { "" } else { " (disabled)" };
        write!(f, "<{}>{}", self.submit_label, state)
    }
}

fn write_error(f: &mut fmt::Formatter<'_>, error: &Option<String>) -> fmt::Result {
    match error {
        Some(message) => writeln!(f, "  ! {}", message),
        None => Ok(()),
    }
}
