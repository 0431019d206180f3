// Field Validators - Reusable validation components
use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// String validator with length constraints
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    exact_length: Option<usize>,
    not_empty: bool,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { min_length: None, exact_length: None, not_empty: false, trim: true }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set minimum length
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Require an exact length
    pub fn exact_length(mut self, len: usize) -> Self {
        self.exact_length = Some(len);
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };
        let len = val.chars().count();

        if self.not_empty && val.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        if let Some(exact) = self.exact_length {
            if len != exact {
                return Err(format!("Length must be exactly {} characters", exact));
            }
        }

        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("Length must be at least {} characters", min));
            }
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

/// Static email regex pattern compiled once at first use
#[allow(clippy::expect_used)]
static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Email validator
#[derive(Debug, Clone)]
pub struct EmailValidator;

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }

    /// Convenience check returning a plain bool.
    pub fn is_valid(&self, value: &str) -> bool {
        FieldValidator::<str>::validate(self, value).is_ok()
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !EMAIL_REGEX.is_match(value) {
            return Err("Invalid email format".to_string());
        }

        Ok(())
    }
}

impl FieldValidator<String> for EmailValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validator() {
        let validator = EmailValidator;

        assert!(validator.validate(&"user@example.com".to_string()).is_ok());
        assert!(validator.validate(&"user.name+tag@example.co.uk".to_string()).is_ok());
        assert!(validator.validate(&"invalid-email".to_string()).is_err());
        assert!(validator.validate(&"@example.com".to_string()).is_err());
        assert!(!validator.is_valid(""));
        assert!(validator.is_valid("a@b.com"));
    }

    #[test]
    fn test_string_validator_exact_length() {
        let validator = StringValidator::new().exact_length(6);

        assert!(validator.validate(&"AbC123".to_string()).is_ok());
        assert!(validator.validate(&"AbC12".to_string()).is_err());
        assert!(validator.validate(&"AbC1234".to_string()).is_err());
    }

    #[test]
    fn test_string_validator_min_length_and_trim() {
        let validator = StringValidator::new().min_length(12);

        assert!(validator.validate(&"pk_0123456789".to_string()).is_ok());
        assert!(validator.validate(&"   short    ".to_string()).is_err());

        let untrimmed = StringValidator::new().min_length(12).trim(false);
        assert!(untrimmed.validate(&"   short    ".to_string()).is_ok());
    }

    #[test]
    fn test_string_validator_not_empty() {
        let validator = StringValidator::new().not_empty();

        assert_eq!(validator.validate(&"  ".to_string()), Err("Value cannot be empty".to_string()));
        assert!(validator.validate(&"abc".to_string()).is_ok());

        let untrimmed = StringValidator::new().not_empty().trim(false);
        assert!(untrimmed.validate(&"  ".to_string()).is_ok());
        assert!(untrimmed.validate(&String::new()).is_err());
    }
}
