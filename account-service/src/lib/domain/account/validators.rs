use crate::domain::account::errors::PasswordPolicyError;
use crate::domain::account::ports::Validator;

/// Email syntax validator.
///
/// Uses the RFC 5322 compliant parser from `email_address`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for EmailValidator {
    fn validate(&self, input: &str) -> bool {
        email_address::EmailAddress::is_valid(input)
    }
}

/// Password length policy.
///
/// Accepts passwords whose character count lies in `[min_length, max_length]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordLengthValidator {
    min_length: usize,
    max_length: usize,
}

impl PasswordLengthValidator {
    pub const DEFAULT_MIN_LENGTH: usize = 6;
    pub const DEFAULT_MAX_LENGTH: usize = 15;

    /// Create a validator with inclusive bounds.
    ///
    /// # Arguments
    /// * `min_length` - Shortest accepted password, in characters
    /// * `max_length` - Longest accepted password, in characters
    ///
    /// # Errors
    /// * `InvertedBounds` - `min_length` is greater than `max_length`
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, PasswordPolicyError> {
        if min_length > max_length {
            return Err(PasswordPolicyError::InvertedBounds {
                min: min_length,
                max: max_length,
            });
        }

        Ok(Self {
            min_length,
            max_length,
        })
    }
}

impl Default for PasswordLengthValidator {
    fn default() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }
}

impl Validator for PasswordLengthValidator {
    fn validate(&self, input: &str) -> bool {
        let length = input.chars().count();
        length >= self.min_length && length <= self.max_length
    }
}
