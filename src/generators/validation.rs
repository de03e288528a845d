//! Input validation for the company profile.
//!
//! Collects every problem before reporting, so a caller sees all missing
//! fields in one response instead of fixing them one at a time.

use std::fmt;

/// Validation error for a single profile field.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create error for a missing or empty required field.
    pub fn missing_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} is required"))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Single-line summary naming every offending field.
    pub fn to_message(&self) -> String {
        let fields: Vec<&str> = self
            .errors
            .iter()
            .map(|error| error.field.as_str())
            .collect();
        format!(
            "missing required company profile fields: {}",
            fields.join(", ")
        )
    }

    /// Convert to Result - Ok if no errors, Err with formatted message otherwise.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

/// Validate that an optional field is present and non-empty after trimming.
/// Returns the trimmed value when valid.
pub fn validate_required(
    value: Option<&str>,
    field: &str,
    label: &str,
    errors: &mut ValidationErrors,
) -> String {
    match value {
        Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => {
            errors.add(ValidationError::missing_field(field, label));
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_present() {
        let mut errors = ValidationErrors::new();
        let value = validate_required(Some("  ACME Sdn Bhd "), "name", "Company Name", &mut errors);
        assert!(errors.is_empty());
        assert_eq!(value, "ACME Sdn Bhd");
    }

    #[test]
    fn test_validate_required_missing() {
        let mut errors = ValidationErrors::new();
        validate_required(None, "bank_name", "Bank Name", &mut errors);
        validate_required(Some("   "), "swift_code", "SWIFT Code", &mut errors);
        assert_eq!(errors.len(), 2);
        let msg = errors.to_message();
        assert!(msg.contains("bank_name"));
        assert!(msg.contains("swift_code"));
    }
}
