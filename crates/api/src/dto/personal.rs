use domainboard_application::use_cases::PersonalInfoPatch;
use domainboard_domain::PersonalInfo;
use serde::{Deserialize, Serialize};

/// Body for profile upsert and update; every field is optional and only
/// supplied ones change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub experience: Option<i64>,
    pub education: Option<String>,
    pub certifications: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub timezone: Option<String>,
    pub availability: Option<String>,
    pub resume_url: Option<String>,
}

impl PersonalInfoRequest {
    pub fn into_patch(self) -> PersonalInfoPatch {
        PersonalInfoPatch {
            name: self.name,
            title: self.title,
            bio: self.bio,
            email: self.email,
            phone: self.phone,
            location: self.location,
            website: self.website,
            avatar_url: self.avatar_url,
            github_url: self.github_url,
            linkedin_url: self.linkedin_url,
            twitter_url: self.twitter_url,
            skills: self.skills,
            interests: self.interests,
            experience: self.experience,
            education: self.education,
            certifications: self.certifications,
            languages: self.languages,
            timezone: self.timezone,
            availability: self.availability,
            resume_url: self.resume_url,
        }
    }
}

/// Response DTO for the profile row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoResponse {
    pub id: i64,
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub experience: i64,
    pub education: Option<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub timezone: Option<String>,
    pub availability: Option<String>,
    pub resume_url: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl PersonalInfoResponse {
    pub fn from_info(info: PersonalInfo) -> Self {
        Self {
            id: info.id.unwrap_or(0),
            name: info.name,
            title: info.title,
            bio: info.bio,
            email: info.email,
            phone: info.phone,
            location: info.location,
            website: info.website,
            avatar_url: info.avatar_url,
            github_url: info.github_url,
            linkedin_url: info.linkedin_url,
            twitter_url: info.twitter_url,
            skills: info.skills,
            interests: info.interests,
            experience: info.experience,
            education: info.education,
            certifications: info.certifications,
            languages: info.languages,
            timezone: info.timezone,
            availability: info.availability,
            resume_url: info.resume_url,
            is_active: info.is_active,
            created_at: info.created_at,
            updated_at: info.updated_at,
        }
    }
}
