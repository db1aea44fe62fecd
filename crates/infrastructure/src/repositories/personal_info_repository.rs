use async_trait::async_trait;
use domainboard_application::ports::PersonalInfoRepository;
use domainboard_domain::{DomainError, PersonalInfo};
use sqlx::SqlitePool;
use tracing::{error, instrument};

use crate::database::now_utc;

const SELECT_COLUMNS: &str = "id, name, title, bio, email, phone, location, website, \
     avatar_url, github_url, linkedin_url, twitter_url, skills, interests, experience, \
     education, certifications, languages, timezone, availability, resume_url, is_active, \
     created_at, updated_at";

#[derive(sqlx::FromRow)]
struct PersonalInfoRow {
    id: i64,
    name: String,
    title: Option<String>,
    bio: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    website: Option<String>,
    avatar_url: Option<String>,
    github_url: Option<String>,
    linkedin_url: Option<String>,
    twitter_url: Option<String>,
    skills: Option<String>,
    interests: Option<String>,
    experience: i64,
    education: Option<String>,
    certifications: Option<String>,
    languages: Option<String>,
    timezone: Option<String>,
    availability: Option<String>,
    resume_url: Option<String>,
    is_active: bool,
    created_at: String,
    updated_at: String,
}

fn parse_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

fn list_json(list: &[String]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
}

impl From<PersonalInfoRow> for PersonalInfo {
    fn from(row: PersonalInfoRow) -> Self {
        PersonalInfo {
            id: Some(row.id),
            name: row.name,
            title: row.title,
            bio: row.bio,
            email: row.email,
            phone: row.phone,
            location: row.location,
            website: row.website,
            avatar_url: row.avatar_url,
            github_url: row.github_url,
            linkedin_url: row.linkedin_url,
            twitter_url: row.twitter_url,
            skills: parse_list(row.skills.as_deref()),
            interests: parse_list(row.interests.as_deref()),
            experience: row.experience,
            education: row.education,
            certifications: parse_list(row.certifications.as_deref()),
            languages: parse_list(row.languages.as_deref()),
            timezone: row.timezone,
            availability: row.availability,
            resume_url: row.resume_url,
            is_active: row.is_active,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

pub struct SqlitePersonalInfoRepository {
    pool: SqlitePool,
}

impl SqlitePersonalInfoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonalInfoRepository for SqlitePersonalInfoRepository {
    #[instrument(skip(self))]
    async fn get_active(&self) -> Result<Option<PersonalInfo>, DomainError> {
        let row = sqlx::query_as::<_, PersonalInfoRow>(&format!(
            "SELECT {} FROM personal_info WHERE is_active = 1 LIMIT 1",
            SELECT_COLUMNS
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query active personal info");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(PersonalInfo::from))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<PersonalInfo>, DomainError> {
        let row = sqlx::query_as::<_, PersonalInfoRow>(&format!(
            "SELECT {} FROM personal_info WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query personal info by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(PersonalInfo::from))
    }

    #[instrument(skip(self, info), fields(name = %info.name))]
    async fn create(&self, info: PersonalInfo) -> Result<PersonalInfo, DomainError> {
        let now = now_utc();

        let result = sqlx::query(
            "INSERT INTO personal_info (name, title, bio, email, phone, location, website, \
             avatar_url, github_url, linkedin_url, twitter_url, skills, interests, experience, \
             education, certifications, languages, timezone, availability, resume_url, \
             is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&info.name)
        .bind(&info.title)
        .bind(&info.bio)
        .bind(&info.email)
        .bind(&info.phone)
        .bind(&info.location)
        .bind(&info.website)
        .bind(&info.avatar_url)
        .bind(&info.github_url)
        .bind(&info.linkedin_url)
        .bind(&info.twitter_url)
        .bind(list_json(&info.skills))
        .bind(list_json(&info.interests))
        .bind(info.experience)
        .bind(&info.education)
        .bind(list_json(&info.certifications))
        .bind(list_json(&info.languages))
        .bind(&info.timezone)
        .bind(&info.availability)
        .bind(&info.resume_url)
        .bind(info.is_active)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create personal info");
            DomainError::DatabaseError(e.to_string())
        })?;

        let id = result.last_insert_rowid();

        self.get_by_id(id).await?.ok_or_else(|| {
            DomainError::DatabaseError("Failed to fetch created personal info".to_string())
        })
    }

    #[instrument(skip(self, info))]
    async fn update(
        &self,
        id: i64,
        info: PersonalInfo,
    ) -> Result<Option<PersonalInfo>, DomainError> {
        let result = sqlx::query(
            "UPDATE personal_info
             SET name = ?, title = ?, bio = ?, email = ?, phone = ?, location = ?, website = ?, \
             avatar_url = ?, github_url = ?, linkedin_url = ?, twitter_url = ?, skills = ?, \
             interests = ?, experience = ?, education = ?, certifications = ?, languages = ?, \
             timezone = ?, availability = ?, resume_url = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&info.name)
        .bind(&info.title)
        .bind(&info.bio)
        .bind(&info.email)
        .bind(&info.phone)
        .bind(&info.location)
        .bind(&info.website)
        .bind(&info.avatar_url)
        .bind(&info.github_url)
        .bind(&info.linkedin_url)
        .bind(&info.twitter_url)
        .bind(list_json(&info.skills))
        .bind(list_json(&info.interests))
        .bind(info.experience)
        .bind(&info.education)
        .bind(list_json(&info.certifications))
        .bind(list_json(&info.languages))
        .bind(&info.timezone)
        .bind(&info.availability)
        .bind(&info.resume_url)
        .bind(now_utc())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update personal info");
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM personal_info WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete personal info");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
