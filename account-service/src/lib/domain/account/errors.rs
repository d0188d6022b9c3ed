use thiserror::Error;

/// Error for password hashing operations
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

impl From<auth::PasswordError> for PasswordError {
    fn from(err: auth::PasswordError) -> Self {
        PasswordError::HashingFailed(err.to_string())
    }
}

/// Error for password policy construction
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password policy minimum length {min} exceeds maximum length {max}")]
    InvertedBounds { min: usize, max: usize },
}

/// Error raised by account persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Outcome of a failed register or login.
///
/// Display strings are safe to show to callers. Underlying causes of
/// `ServerError` are logged where they occur and never carried here.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("password length is out of the allowed range")]
    InvalidPasswordLength,

    #[error("user exists")]
    UserExists,

    #[error("user not exists")]
    UserNotFound,

    #[error("email or password incorrect")]
    AuthenticationFailed,

    #[error("server error")]
    ServerError,
}
