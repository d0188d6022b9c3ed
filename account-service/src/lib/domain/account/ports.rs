use async_trait::async_trait;

use crate::domain::account::errors::AuthError;
use crate::domain::account::errors::PasswordError;
use crate::domain::account::errors::RepositoryError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AuthenticatedUser;
use crate::domain::account::models::LoginCredentials;
use crate::domain::account::models::NewUser;
use crate::domain::account::models::SessionToken;

/// Port for registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `new_user` - Raw name, email and password
    ///
    /// # Returns
    /// Unit once the account is persisted
    ///
    /// # Errors
    /// * `InvalidEmail` - Email failed syntax validation
    /// * `InvalidPasswordLength` - Password outside the length policy
    /// * `UserExists` - Email is already registered
    /// * `ServerError` - Lookup, hashing or persistence failed
    async fn register(&self, new_user: NewUser) -> Result<(), AuthError>;

    /// Authenticate and issue a fresh session token.
    ///
    /// # Arguments
    /// * `credentials` - Raw email and password
    ///
    /// # Returns
    /// Account projection carrying the stored session token
    ///
    /// # Errors
    /// * `UserNotFound` - No account with this email
    /// * `AuthenticationFailed` - Password does not match
    /// * `ServerError` - Lookup or token update failed
    async fn login(&self, credentials: LoginCredentials) -> Result<AuthenticatedUser, AuthError>;
}

/// Persistence operations for accounts.
///
/// Implementations must enforce email uniqueness themselves.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Retrieve account by email address.
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError>;

    /// Persist a new account. Id and timestamps are assigned by storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Database` - Storage operation failed
    async fn register(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), RepositoryError>;

    /// Overwrite the session token of an account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `Database` - Storage operation failed
    async fn update_token(
        &self,
        account: &Account,
        token: &SessionToken,
    ) -> Result<(), RepositoryError>;
}

/// Pure predicate over a raw input string.
pub trait Validator: Send + Sync + 'static {
    fn validate(&self, input: &str) -> bool;
}

/// One-way password hashing and verification.
pub trait HashValidator: Send + Sync + 'static {
    /// Hash a plaintext password.
    ///
    /// # Errors
    /// * `HashingFailed` - Underlying primitive could not process the input
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Malformed hashes compare as `false`.
    fn compare(&self, plaintext: &str, hash: &str) -> bool;
}

/// Source of fresh, unguessable session tokens.
pub trait TokenGenerator: Send + Sync + 'static {
    fn generate(&self) -> SessionToken;
}
