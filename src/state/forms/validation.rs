//! Presence and numeric checks for measurement fields

use super::field::{field_value, ErrorMap, FieldDefinition, ValueMap};
use thiserror::Error;

/// A field-scoped validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    MissingRequired,
    #[error("Only numeric values are allowed")]
    NonNumeric,
}

/// Wording used for inline error messages.
///
/// The detailed form uses terse labels that fit under its grid cells, the
/// size form spells them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageStyle {
    Terse,
    #[default]
    Verbose,
}

impl FieldError {
    /// Inline message for this error in the given style
    pub fn message(self, style: MessageStyle) -> String {
        match (self, style) {
            (Self::MissingRequired, MessageStyle::Terse) => "Required".to_string(),
            (Self::NonNumeric, MessageStyle::Terse) => "Number only".to_string(),
            (err, MessageStyle::Verbose) => err.to_string(),
        }
    }
}

/// Whether the input reads as a finite decimal number
pub fn is_numeric(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(f64::is_finite)
        .unwrap_or(false)
}

/// Check a single field against its definition
pub fn check_field(def: &FieldDefinition, values: &ValueMap) -> Result<(), FieldError> {
    match field_value(values, def.name) {
        None if def.required => Err(FieldError::MissingRequired),
        None => Ok(()),
        Some(value) if !is_numeric(value) => Err(FieldError::NonNumeric),
        Some(_) => Ok(()),
    }
}

/// Validate every field in one pass, collecting all failures
pub fn validate(fields: &[FieldDefinition], values: &ValueMap, style: MessageStyle) -> ErrorMap {
    fields
        .iter()
        .filter_map(|def| {
            check_field(def, values)
                .err()
                .map(|err| (def.name.to_string(), err.message(style)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: [FieldDefinition; 3] = [
        FieldDefinition::required("Bust"),
        FieldDefinition::required("Waist"),
        FieldDefinition::optional("Knee"),
    ];

    fn values(pairs: &[(&str, &str)]) -> ValueMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    mod is_numeric_tests {
        use super::*;

        #[test]
        fn test_integers_and_decimals() {
            assert!(is_numeric("42"));
            assert!(is_numeric("42.5"));
            assert!(is_numeric(".5"));
            assert!(is_numeric("-3"));
            assert!(is_numeric(" 12 "));
            assert!(is_numeric("1e2"));
        }

        #[test]
        fn test_rejects_text() {
            assert!(!is_numeric("abc"));
            assert!(!is_numeric("12cm"));
            assert!(!is_numeric("1,5"));
            assert!(!is_numeric("0x1A"));
            assert!(!is_numeric("0b11"));
            assert!(!is_numeric(""));
        }

        #[test]
        fn test_rejects_non_finite() {
            assert!(!is_numeric("NaN"));
            assert!(!is_numeric("inf"));
            assert!(!is_numeric("infinity"));
        }
    }

    #[test]
    fn test_numeric_values_never_error() {
        let v = values(&[("Bust", "90"), ("Waist", "70.5"), ("Knee", "40")]);
        assert!(validate(&FIELDS, &v, MessageStyle::Verbose).is_empty());
    }

    #[test]
    fn test_missing_required_reported_per_field() {
        let v = values(&[("Waist", "70")]);
        let errors = validate(&FIELDS, &v, MessageStyle::Verbose);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["Bust"], "This field is required");
    }

    #[test]
    fn test_missing_required_independent_of_other_fields() {
        let v = values(&[("Waist", "oops"), ("Knee", "x")]);
        let errors = validate(&FIELDS, &v, MessageStyle::Verbose);
        assert_eq!(errors["Bust"], "This field is required");
        assert_eq!(errors["Waist"], "Only numeric values are allowed");
    }

    #[test]
    fn test_empty_optional_field_has_no_error() {
        let v = values(&[("Bust", "90"), ("Waist", "70"), ("Knee", "")]);
        assert!(validate(&FIELDS, &v, MessageStyle::Verbose).is_empty());
    }

    #[test]
    fn test_non_numeric_optional_field_is_flagged() {
        let v = values(&[("Bust", "90"), ("Waist", "70"), ("Knee", "long")]);
        let errors = validate(&FIELDS, &v, MessageStyle::Verbose);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["Knee"], "Only numeric values are allowed");
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let v = values(&[("Bust", "   "), ("Waist", "70")]);
        let errors = validate(&FIELDS, &v, MessageStyle::Verbose);
        assert_eq!(errors["Bust"], "This field is required");
    }

    #[test]
    fn test_terse_messages() {
        let v = values(&[("Waist", "abc")]);
        let errors = validate(&FIELDS, &v, MessageStyle::Terse);
        assert_eq!(errors["Bust"], "Required");
        assert_eq!(errors["Waist"], "Number only");
    }

    #[test]
    fn test_check_field() {
        let v = values(&[("Bust", "x")]);
        assert_eq!(
            check_field(&FIELDS[0], &v),
            Err(FieldError::NonNumeric)
        );
        assert_eq!(
            check_field(&FIELDS[1], &v),
            Err(FieldError::MissingRequired)
        );
        assert_eq!(check_field(&FIELDS[2], &v), Ok(()));
    }
}
