use serde::{Deserialize, Serialize};

/// One named input of the registration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    FavLanguage,
    FavFood,
    Agreement,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::FavLanguage,
        Field::FavFood,
        Field::Agreement,
    ];

    /// Wire/control name of the field (matches the JSON body keys).
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::FavLanguage => "favLanguage",
            Field::FavFood => "favFood",
            Field::Agreement => "agreement",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// A single field's value as handed to the schema validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// A change to exactly one field, as reported by its UI control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Username(String),
    FavLanguage(String),
    FavFood(String),
    Agreement(bool),
}

impl FieldChange {
    /// Build a change from a raw control event.
    ///
    /// Checkbox-backed fields read `checked`; every other field reads `value`.
    /// Returns `None` for names that are not part of the record.
    pub fn from_input(name: &str, value: &str, checked: bool) -> Option<FieldChange> {
        let change = match Field::from_name(name)? {
            Field::Username => FieldChange::Username(value.to_string()),
            Field::FavLanguage => FieldChange::FavLanguage(value.to_string()),
            Field::FavFood => FieldChange::FavFood(value.to_string()),
            Field::Agreement => FieldChange::Agreement(checked),
        };
        Some(change)
    }

    pub fn field(&self) -> Field {
        match self {
            FieldChange::Username(_) => Field::Username,
            FieldChange::FavLanguage(_) => Field::FavLanguage,
            FieldChange::FavFood(_) => Field::FavFood,
            FieldChange::Agreement(_) => Field::Agreement,
        }
    }

    pub fn value(&self) -> FieldValue {
        match self {
            FieldChange::Username(v) | FieldChange::FavLanguage(v) | FieldChange::FavFood(v) => {
                FieldValue::Text(v.clone())
            }
            FieldChange::Agreement(checked) => FieldValue::Flag(*checked),
        }
    }
}

/// The registration record. Serializes to the body of the register request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: bool,
}

impl FormValues {
    /// A new snapshot with one field replaced; `self` is left untouched.
    pub fn with_change(&self, change: &FieldChange) -> FormValues {
        let mut next = self.clone();
        match change {
            FieldChange::Username(v) => next.username = v.clone(),
            FieldChange::FavLanguage(v) => next.fav_language = v.clone(),
            FieldChange::FavFood(v) => next.fav_food = v.clone(),
            FieldChange::Agreement(checked) => next.agreement = *checked,
        }
        next
    }

    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Username => FieldValue::Text(self.username.clone()),
            Field::FavLanguage => FieldValue::Text(self.fav_language.clone()),
            Field::FavFood => FieldValue::Text(self.fav_food.clone()),
            Field::Agreement => FieldValue::Flag(self.agreement),
        }
    }
}

/// Per-field error messages. An empty string means "no error".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    username: String,
    fav_language: String,
    fav_food: String,
    agreement: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::FavLanguage => &self.fav_language,
            Field::FavFood => &self.fav_food,
            Field::Agreement => &self.agreement,
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot(field) = message.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.slot(field).clear();
    }

    /// True when no field currently shows an error.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::FavLanguage => &mut self.fav_language,
            Field::FavFood => &mut self.fav_food,
            Field::Agreement => &mut self.agreement,
        }
    }
}
