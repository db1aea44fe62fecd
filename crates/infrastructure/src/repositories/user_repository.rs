use async_trait::async_trait;
use domainboard_application::ports::{NewUser, UserRepository};
use domainboard_domain::{AuthProvider, DomainError, User};
use sqlx::SqlitePool;
use tracing::{error, instrument};

use crate::database::now_utc;

type UserRow = (
    i64,
    String,
    String,
    Option<String>,
    String,
    Option<String>,
    Option<String>,
    bool,
    String,
    String,
);

const SELECT_COLUMNS: &str = "id, email, name, password_hash, provider, provider_id, \
     avatar_url, is_verified, created_at, updated_at";

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: UserRow) -> Result<User, DomainError> {
        let (
            id,
            email,
            name,
            password_hash,
            provider,
            provider_id,
            avatar_url,
            is_verified,
            created_at,
            updated_at,
        ) = row;

        let provider: AuthProvider = provider
            .parse()
            .map_err(|_| DomainError::DatabaseError(format!("Corrupt provider '{}'", provider)))?;

        Ok(User {
            id: Some(id),
            email,
            name,
            password_hash,
            provider,
            provider_id,
            avatar_url,
            is_verified,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let now = now_utc();

        let result = sqlx::query(
            "INSERT INTO users (email, name, password_hash, provider, provider_id, avatar_url, \
             is_verified, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.provider.as_str())
        .bind(&user.provider_id)
        .bind(&user.avatar_url)
        .bind(user.is_verified)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                DomainError::EmailAlreadyRegistered
            } else {
                error!(error = %e, "Failed to create user");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        let id = result.last_insert_rowid();

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::DatabaseError("Failed to fetch created user".to_string()))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query user by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_user).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE email = ?",
            SELECT_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query user by email");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_user).transpose()
    }

    #[instrument(skip(self))]
    async fn find_local_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE email = ? AND provider = 'local'",
            SELECT_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query local user by email");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_user).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_provider(
        &self,
        provider: AuthProvider,
        provider_id: &str,
    ) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE provider = ? AND provider_id = ?",
            SELECT_COLUMNS
        ))
        .bind(provider.as_str())
        .bind(provider_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query user by provider");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_user).transpose()
    }

    #[instrument(skip(self))]
    async fn link_provider(
        &self,
        id: i64,
        provider: AuthProvider,
        provider_id: &str,
        avatar_url: Option<&str>,
    ) -> Result<User, DomainError> {
        sqlx::query(
            "UPDATE users
             SET provider = ?, provider_id = ?, avatar_url = COALESCE(?, avatar_url), \
             updated_at = ?
             WHERE id = ?",
        )
        .bind(provider.as_str())
        .bind(provider_id)
        .bind(avatar_url)
        .bind(now_utc())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to link provider");
            DomainError::DatabaseError(e.to_string())
        })?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("User".to_string()))
    }
}
