use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Registration request as received from the transport layer.
///
/// All fields are raw and untrusted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Login request as received from the transport layer.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    ///
    /// # Returns
    /// AccountId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque session credential issued on login.
///
/// The contents are never inspected by the domain.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Persisted account record.
///
/// Owned by the repository. `password_hash` is never the raw password and
/// `session_token` stays `None` until the first successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub session_token: Option<SessionToken>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read projection of an [`Account`] returned after login.
///
/// Has no password or hash field, so none can leak through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub session_token: SessionToken,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    /// Project an account that holds a session.
    ///
    /// # Returns
    /// `None` if the account has no session token
    pub fn from_account(account: Account) -> Option<Self> {
        let session_token = account.session_token?;

        Some(Self {
            id: account.id,
            name: account.name,
            email: account.email,
            session_token,
            created_at: account.created_at,
            updated_at: account.updated_at,
        })
    }
}
