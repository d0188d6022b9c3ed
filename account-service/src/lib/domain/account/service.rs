use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AuthError;
use crate::domain::account::errors::RepositoryError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AuthenticatedUser;
use crate::domain::account::models::LoginCredentials;
use crate::domain::account::models::NewUser;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AuthServicePort;
use crate::domain::account::ports::HashValidator;
use crate::domain::account::ports::TokenGenerator;
use crate::domain::account::ports::Validator;

/// Authentication usecase.
///
/// Stateless apart from its injected collaborators, so one instance can be
/// shared across concurrent requests.
pub struct AuthService<AR, EV, PV, HV, TG>
where
    AR: AccountRepository,
    EV: Validator,
    PV: Validator,
    HV: HashValidator,
    TG: TokenGenerator,
{
    repository: Arc<AR>,
    email_validator: Arc<EV>,
    password_validator: Arc<PV>,
    hash_validator: Arc<HV>,
    token_generator: Arc<TG>,
}

impl<AR, EV, PV, HV, TG> AuthService<AR, EV, PV, HV, TG>
where
    AR: AccountRepository,
    EV: Validator,
    PV: Validator,
    HV: HashValidator,
    TG: TokenGenerator,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `email_validator` - Email syntax predicate
    /// * `password_validator` - Password policy predicate
    /// * `hash_validator` - Password hashing implementation
    /// * `token_generator` - Session token source
    ///
    /// # Returns
    /// Configured auth service instance
    pub fn new(
        repository: Arc<AR>,
        email_validator: Arc<EV>,
        password_validator: Arc<PV>,
        hash_validator: Arc<HV>,
        token_generator: Arc<TG>,
    ) -> Self {
        Self {
            repository,
            email_validator,
            password_validator,
            hash_validator,
            token_generator,
        }
    }

    async fn find_account(
        &self,
        email: &str,
        operation: &'static str,
    ) -> Result<Option<Account>, AuthError> {
        self.repository.find_by_email(email).await.map_err(|e| {
            tracing::error!(operation, email, error = %e, "Account lookup failed");
            AuthError::ServerError
        })
    }
}

#[async_trait]
impl<AR, EV, PV, HV, TG> AuthServicePort for AuthService<AR, EV, PV, HV, TG>
where
    AR: AccountRepository,
    EV: Validator,
    PV: Validator,
    HV: HashValidator,
    TG: TokenGenerator,
{
    async fn register(&self, new_user: NewUser) -> Result<(), AuthError> {
        // Cheap rejections before any I/O
        if !self.email_validator.validate(&new_user.email) {
            tracing::debug!(email = %new_user.email, "Rejected invalid email address");
            return Err(AuthError::InvalidEmail);
        }

        if !self.password_validator.validate(&new_user.password) {
            tracing::debug!(
                email = %new_user.email,
                password_length = new_user.password.chars().count(),
                "Rejected password outside length policy"
            );
            return Err(AuthError::InvalidPasswordLength);
        }

        // Existence check before paying for the hash
        if self
            .find_account(&new_user.email, "register")
            .await?
            .is_some()
        {
            tracing::debug!(email = %new_user.email, "Registration for existing account");
            return Err(AuthError::UserExists);
        }

        let password_hash = self.hash_validator.hash(&new_user.password).map_err(|e| {
            tracing::error!(
                operation = "register",
                email = %new_user.email,
                error = %e,
                "Password hashing failed"
            );
            AuthError::ServerError
        })?;

        self.repository
            .register(&new_user.name, &new_user.email, &password_hash)
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration
                RepositoryError::EmailAlreadyExists(_) => {
                    tracing::warn!(
                        operation = "register",
                        email = %new_user.email,
                        "Storage rejected duplicate email"
                    );
                    AuthError::UserExists
                }
                _ => {
                    tracing::error!(
                        operation = "register",
                        email = %new_user.email,
                        error = %e,
                        "Account persistence failed"
                    );
                    AuthError::ServerError
                }
            })?;

        tracing::info!(email = %new_user.email, "Account registered");

        Ok(())
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<AuthenticatedUser, AuthError> {
        let account = self
            .find_account(&credentials.email, "login")
            .await?
            .ok_or_else(|| {
                tracing::warn!(email = %credentials.email, "Login for unknown account");
                AuthError::UserNotFound
            })?;

        if !self
            .hash_validator
            .compare(&credentials.password, &account.password_hash)
        {
            tracing::warn!(email = %credentials.email, "Password does not match stored hash");
            return Err(AuthError::AuthenticationFailed);
        }

        let token = self.token_generator.generate();

        self.repository
            .update_token(&account, &token)
            .await
            .map_err(|e| {
                tracing::error!(
                    operation = "update_token",
                    email = %credentials.email,
                    account_id = %account.id,
                    error = %e,
                    "Session token update failed"
                );
                AuthError::ServerError
            })?;

        // Re-read for the canonical token and timestamps
        let account = self
            .find_account(&credentials.email, "login")
            .await?
            .ok_or_else(|| {
                tracing::error!(
                    operation = "login",
                    email = %credentials.email,
                    "Account vanished after token update"
                );
                AuthError::ServerError
            })?;

        let account_id = account.id;
        let user = AuthenticatedUser::from_account(account).ok_or_else(|| {
            tracing::error!(
                operation = "login",
                email = %credentials.email,
                account_id = %account_id,
                "Stored account has no session token after update"
            );
            AuthError::ServerError
        })?;

        tracing::info!(email = %credentials.email, account_id = %user.id, "Account logged in");

        Ok(user)
    }
}
