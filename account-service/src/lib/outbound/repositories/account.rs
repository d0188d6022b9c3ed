use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::RepositoryError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::SessionToken;
use crate::domain::account::ports::AccountRepository;

const EMAIL_UNIQUE_CONSTRAINT: &str = "accounts_email_key";

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRecord {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    session_token: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AccountRecord> for Account {
    fn from(r: AccountRecord) -> Self {
        Account {
            id: AccountId(r.id),
            name: r.name,
            email: r.email,
            password_hash: r.password_hash,
            session_token: r.session_token.map(SessionToken::new),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, name, email, password_hash, session_token, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(record.map(Account::from))
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            "#,
        )
        .bind(AccountId::new().0)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT)
                {
                    return RepositoryError::EmailAlreadyExists(email.to_string());
                }
            }
            tracing::debug!(email, error = %e, "Insert into accounts failed");
            RepositoryError::Database(e.to_string())
        })?;

        Ok(())
    }

    async fn update_token(
        &self,
        account: &Account,
        token: &SessionToken,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET session_token = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(account.id.0)
        .bind(token.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(account.id.to_string()));
        }

        Ok(())
    }
}
