use async_trait::async_trait;
use domainboard_application::ports::RepositoryStore;
use domainboard_domain::{DomainError, Repository};
use sqlx::SqlitePool;
use tracing::{error, instrument};

use crate::database::now_utc;

const SELECT_COLUMNS: &str = "id, name, full_name, description, html_url, clone_url, language, \
     stars, forks, watchers, open_issues, size, is_private, is_fork, is_archived, topics, \
     pushed_at, last_commit, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct RepositoryRow {
    id: i64,
    name: String,
    full_name: String,
    description: Option<String>,
    html_url: Option<String>,
    clone_url: Option<String>,
    language: Option<String>,
    stars: i64,
    forks: i64,
    watchers: i64,
    open_issues: i64,
    size: i64,
    is_private: bool,
    is_fork: bool,
    is_archived: bool,
    topics: Option<String>,
    pushed_at: Option<String>,
    last_commit: Option<String>,
    created_at: String,
    updated_at: String,
}

impl From<RepositoryRow> for Repository {
    fn from(row: RepositoryRow) -> Self {
        Repository {
            id: Some(row.id),
            name: row.name,
            full_name: row.full_name,
            description: row.description,
            html_url: row.html_url,
            clone_url: row.clone_url,
            language: row.language,
            stars: row.stars,
            forks: row.forks,
            watchers: row.watchers,
            open_issues: row.open_issues,
            size: row.size,
            is_private: row.is_private,
            is_fork: row.is_fork,
            is_archived: row.is_archived,
            topics: row
                .topics
                .as_deref()
                .and_then(|t| serde_json::from_str(t).ok())
                .unwrap_or_default(),
            pushed_at: row.pushed_at,
            last_commit: row.last_commit,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

pub struct SqliteRepositoryStore {
    pool: SqlitePool,
}

impl SqliteRepositoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn topics_json(repository: &Repository) -> String {
        serde_json::to_string(&repository.topics).unwrap_or_else(|_| "[]".to_string())
    }
}

#[async_trait]
impl RepositoryStore for SqliteRepositoryStore {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Repository>, DomainError> {
        let rows = sqlx::query_as::<_, RepositoryRow>(&format!(
            "SELECT {} FROM repositories ORDER BY stars DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query repositories");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Repository::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Repository>, DomainError> {
        let row = sqlx::query_as::<_, RepositoryRow>(&format!(
            "SELECT {} FROM repositories WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query repository by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Repository::from))
    }

    #[instrument(skip(self))]
    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<Repository>, DomainError> {
        let row = sqlx::query_as::<_, RepositoryRow>(&format!(
            "SELECT {} FROM repositories WHERE full_name = ?",
            SELECT_COLUMNS
        ))
        .bind(full_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query repository by full name");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Repository::from))
    }

    #[instrument(skip(self, repository), fields(full_name = %repository.full_name))]
    async fn create(&self, repository: Repository) -> Result<Repository, DomainError> {
        let now = now_utc();

        let result = sqlx::query(
            "INSERT INTO repositories (name, full_name, description, html_url, clone_url, \
             language, stars, forks, watchers, open_issues, size, is_private, is_fork, \
             is_archived, topics, pushed_at, last_commit, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&repository.name)
        .bind(&repository.full_name)
        .bind(&repository.description)
        .bind(&repository.html_url)
        .bind(&repository.clone_url)
        .bind(&repository.language)
        .bind(repository.stars)
        .bind(repository.forks)
        .bind(repository.watchers)
        .bind(repository.open_issues)
        .bind(repository.size)
        .bind(repository.is_private)
        .bind(repository.is_fork)
        .bind(repository.is_archived)
        .bind(Self::topics_json(&repository))
        .bind(&repository.pushed_at)
        .bind(&repository.last_commit)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create repository");
            DomainError::DatabaseError(e.to_string())
        })?;

        let id = result.last_insert_rowid();

        self.get_by_id(id).await?.ok_or_else(|| {
            DomainError::DatabaseError("Failed to fetch created repository".to_string())
        })
    }

    #[instrument(skip(self, repository))]
    async fn update(
        &self,
        id: i64,
        repository: Repository,
    ) -> Result<Option<Repository>, DomainError> {
        let result = sqlx::query(
            "UPDATE repositories
             SET name = ?, full_name = ?, description = ?, html_url = ?, clone_url = ?, \
             language = ?, stars = ?, forks = ?, watchers = ?, open_issues = ?, size = ?, \
             is_private = ?, is_fork = ?, is_archived = ?, topics = ?, pushed_at = ?, \
             last_commit = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&repository.name)
        .bind(&repository.full_name)
        .bind(&repository.description)
        .bind(&repository.html_url)
        .bind(&repository.clone_url)
        .bind(&repository.language)
        .bind(repository.stars)
        .bind(repository.forks)
        .bind(repository.watchers)
        .bind(repository.open_issues)
        .bind(repository.size)
        .bind(repository.is_private)
        .bind(repository.is_fork)
        .bind(repository.is_archived)
        .bind(Self::topics_json(&repository))
        .bind(&repository.pushed_at)
        .bind(&repository.last_commit)
        .bind(now_utc())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update repository");
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM repositories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete repository");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
