/// The site owner's profile row.
///
/// At most one row is active at a time; the public API always serves the
/// active one.
#[derive(Debug, Clone, Default)]
pub struct PersonalInfo {
    pub id: Option<i64>,
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
