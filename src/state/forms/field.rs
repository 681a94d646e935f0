//! Form field definitions and value containers

use std::collections::{BTreeMap, HashMap};

/// Raw user input keyed by field name. Only touched fields have an entry.
pub type ValueMap = HashMap<String, String>;

/// Inline error messages keyed by field name
pub type ErrorMap = HashMap<String, String>;

/// Display label to display value, handed to the store on submit
pub type NormalizedRecord = BTreeMap<String, String>;

/// Static description of a single measurement input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub required: bool,
}

impl FieldDefinition {
    /// Create a field that must be filled before submitting
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    /// Create a field that may be left empty
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// Get a field's value, treating whitespace-only input as absent
pub fn field_value<'a>(values: &'a ValueMap, name: &str) -> Option<&'a str> {
    values
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// Append a character to a field value
pub fn push_char(values: &ValueMap, name: &str, c: char) -> String {
    let mut value = values.get(name).cloned().unwrap_or_default();
    value.push(c);
    value
}

/// Remove the last character of a field value
pub fn pop_char(values: &ValueMap, name: &str) -> String {
    let mut value = values.get(name).cloned().unwrap_or_default();
    value.pop();
    value
}

/// Upper-case the first character of a selector code ("slim" -> "Slim")
pub fn title_case(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
