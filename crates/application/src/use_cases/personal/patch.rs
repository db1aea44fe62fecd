use domainboard_domain::PersonalInfo;

/// Partial profile update: only supplied fields replace the current ones.
#[derive(Debug, Clone, Default)]
pub struct PersonalInfoPatch {
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

impl PersonalInfoPatch {
    pub fn apply_to(self, mut info: PersonalInfo) -> PersonalInfo {
        if let Some(name) = self.name {
            info.name = name;
        }
        if self.title.is_some() {
            info.title = self.title;
        }
        if self.bio.is_some() {
            info.bio = self.bio;
        }
        if self.email.is_some() {
            info.email = self.email;
        }
        if self.phone.is_some() {
            info.phone = self.phone;
        }
        if self.location.is_some() {
            info.location = self.location;
        }
        if self.website.is_some() {
            info.website = self.website;
        }
        if self.avatar_url.is_some() {
            info.avatar_url = self.avatar_url;
        }
        if self.github_url.is_some() {
            info.github_url = self.github_url;
        }
        if self.linkedin_url.is_some() {
            info.linkedin_url = self.linkedin_url;
        }
        if self.twitter_url.is_some() {
            info.twitter_url = self.twitter_url;
        }
        if let Some(skills) = self.skills {
            info.skills = skills;
        }
        if let Some(interests) = self.interests {
            info.interests = interests;
        }
        if let Some(experience) = self.experience {
            info.experience = experience;
        }
        if self.education.is_some() {
            info.education = self.education;
        }
        if let Some(certifications) = self.certifications {
            info.certifications = certifications;
        }
        if let Some(languages) = self.languages {
            info.languages = languages;
        }
        if self.timezone.is_some() {
            info.timezone = self.timezone;
        }
        if self.availability.is_some() {
            info.availability = self.availability;
        }
        if self.resume_url.is_some() {
            info.resume_url = self.resume_url;
        }
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_keeps_unset_fields() {
        let base = PersonalInfo {
            name: "Anshul Yadav".to_string(),
            title: Some("Developer".to_string()),
            experience: 5,
            is_active: true,
            ..Default::default()
        };

        let patched = PersonalInfoPatch {
            title: Some("Senior Developer".to_string()),
            ..Default::default()
        }
        .apply_to(base);

        assert_eq!(patched.name, "Anshul Yadav");
        assert_eq!(patched.title.as_deref(), Some("Senior Developer"));
        assert_eq!(patched.experience, 5);
        assert!(patched.is_active);
    }
}
