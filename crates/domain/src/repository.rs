/// A showcased GitHub repository row.
///
/// `full_name` ("owner/name") is the natural key used for upserts.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub id: Option<i64>,
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
