//! Field validation for the add forms

use std::collections::BTreeMap;

/// Per-field error messages, keyed by field name
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Validation rules for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub integer: bool,
}

impl ValidationRules {
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            integer: false,
        }
    }

    /// Required whole number no smaller than `min`
    pub const fn required_integer(min: f64) -> Self {
        Self {
            required: true,
            min: Some(min),
            integer: true,
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(format!("{} is required", field_label));
        }

        if self.integer && !trimmed.is_empty() {
            let number: i64 = trimmed
                .parse()
                .map_err(|_| format!("{} must be a whole number", field_label))?;
            self.validate_number(number as f64, field_label)?;
        }

        Ok(())
    }

    /// Validate a numeric value against the minimum
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }
        Ok(())
    }
}

/// Run `rules` on `value`, recording a failure under `field`
pub fn check_field(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
    rules: ValidationRules,
) {
    if let Err(message) = rules.validate_string(value, label) {
        errors.insert(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("", "Name").is_err());
        assert_eq!(
            rules.validate_string("   ", "Name").unwrap_err(),
            "Name is required"
        );
        assert!(rules.validate_string("LNA", "Name").is_ok());
    }

    #[test]
    fn test_optional_accepts_blank() {
        assert!(ValidationRules::default().validate_string("", "Comments").is_ok());
    }

    #[test]
    fn test_integer_rules() {
        let rules = ValidationRules::required_integer(1.0);
        assert!(rules.validate_string("3", "Values").is_ok());
        assert!(rules.validate_string(" 2 ", "Values").is_ok());
        assert_eq!(
            rules.validate_string("0", "Values").unwrap_err(),
            "Values must be at least 1"
        );
        assert_eq!(
            rules.validate_string("two", "Values").unwrap_err(),
            "Values must be a whole number"
        );
        assert!(rules.validate_string("1.5", "Values").is_err());
    }

    #[test]
    fn test_check_field_collects_errors() {
        let mut errors = FieldErrors::new();
        check_field(&mut errors, "name", "Name", "", ValidationRules::required());
        check_field(&mut errors, "units", "Units", "dB", ValidationRules::required());
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("name"));
    }
}
