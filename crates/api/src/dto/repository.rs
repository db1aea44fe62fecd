use domainboard_domain::Repository;
use serde::{Deserialize, Serialize};

/// Body for repository upsert and update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub clone_url: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stars: i64,
    #[serde(default)]
    pub forks: i64,
    #[serde(default)]
    pub watchers: i64,
    #[serde(default)]
    pub open_issues: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_fork: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub topics: Vec<String>,
    pub pushed_at: Option<String>,
    pub last_commit: Option<String>,
}

impl RepositoryRequest {
    pub fn into_repository(self) -> Repository {
        Repository {
            id: None,
            name: self.name,
            full_name: self.full_name,
            description: self.description,
            html_url: self.html_url,
            clone_url: self.clone_url,
            language: self.language,
            stars: self.stars,
            forks: self.forks,
            watchers: self.watchers,
            open_issues: self.open_issues,
            size: self.size,
            is_private: self.is_private,
            is_fork: self.is_fork,
            is_archived: self.is_archived,
            topics: self.topics,
            pushed_at: self.pushed_at,
            last_commit: self.last_commit,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Response DTO for a repository row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryResponse {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub clone_url: Option<String>,
    pub language: Option<String>,
    pub stars: i64,
    pub forks: i64,
    pub watchers: i64,
    pub open_issues: i64,
    pub size: i64,
    pub is_private: bool,
    pub is_fork: bool,
    pub is_archived: bool,
    pub topics: Vec<String>,
    pub pushed_at: Option<String>,
    pub last_commit: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl RepositoryResponse {
    pub fn from_repository(repository: Repository) -> Self {
        Self {
            id: repository.id.unwrap_or(0),
            name: repository.name,
            full_name: repository.full_name,
            description: repository.description,
            html_url: repository.html_url,
            clone_url: repository.clone_url,
            language: repository.language,
            stars: repository.stars,
            forks: repository.forks,
            watchers: repository.watchers,
            open_issues: repository.open_issues,
            size: repository.size,
            is_private: repository.is_private,
            is_fork: repository.is_fork,
            is_archived: repository.is_archived,
            topics: repository.topics,
            pushed_at: repository.pushed_at,
            last_commit: repository.last_commit,
            created_at: repository.created_at,
            updated_at: repository.updated_at,
        }
    }
}
