use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::account::errors::RepositoryError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::SessionToken;
use crate::domain::account::ports::AccountRepository;

/// In-process account store keyed by email.
///
/// Enforces the same email uniqueness as the database schema, so the
/// insert race between concurrent registrations resolves the same way.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(email) {
            return Err(RepositoryError::EmailAlreadyExists(email.to_string()));
        }

        let now = Utc::now();
        accounts.insert(
            email.to_string(),
            Account {
                id: AccountId::new(),
                name: name.to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                session_token: None,
                created_at: now,
                updated_at: now,
            },
        );

        Ok(())
    }

    async fn update_token(
        &self,
        account: &Account,
        token: &SessionToken,
    ) -> Result<(), RepositoryError> {
        let mut accounts = self.accounts.write().await;

        let stored = accounts
            .values_mut()
            .find(|stored| stored.id == account.id)
            .ok_or_else(|| RepositoryError::NotFound(account.id.to_string()))?;

        stored.session_token = Some(token.clone());
        stored.updated_at = Utc::now();

        Ok(())
    }
}
