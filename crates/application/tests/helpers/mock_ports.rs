use async_trait::async_trait;
use domainboard_application::ports::{CredentialHasher, DnsLookup, NewUser, UserRepository};
use domainboard_domain::{AuthProvider, DnsRecord, DomainError, RecordType, User};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Scripted lookup: fixed answers per record type, with selected types
/// configured to fail.
#[derive(Default)]
pub struct ScriptedDnsLookup {
    answers: HashMap<RecordType, Vec<DnsRecord>>,
    failing: HashSet<RecordType>,
}

impl ScriptedDnsLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(mut self, record_type: RecordType, records: Vec<DnsRecord>) -> Self {
        self.answers.insert(record_type, records);
        self
    }

    pub fn with_failure(mut self, record_type: RecordType) -> Self {
        self.failing.insert(record_type);
        self
    }
}

#[async_trait]
impl DnsLookup for ScriptedDnsLookup {
    async fn lookup(
        &self,
        _domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        if self.failing.contains(&record_type) {
            return Err(DomainError::LookupFailed(format!(
                "scripted failure for {}",
                record_type
            )));
        }
        Ok(self.answers.get(&record_type).cloned().unwrap_or_default())
    }
}

/// In-memory user store.
#[derive(Default)]
pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().push(user);
        self
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        let created = User {
            id: Some(users.len() as i64 + 1),
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            provider: user.provider,
            provider_id: user.provider_id,
            avatar_url: user.avatar_url,
            is_verified: user.is_verified,
            created_at: None,
            updated_at: None,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == Some(id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_local_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email && u.provider == AuthProvider::Local)
            .cloned())
    }

    async fn find_by_provider(
        &self,
        provider: AuthProvider,
        provider_id: &str,
    ) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.provider == provider && u.provider_id.as_deref() == Some(provider_id))
            .cloned())
    }

    async fn link_provider(
        &self,
        id: i64,
        provider: AuthProvider,
        provider_id: &str,
        avatar_url: Option<&str>,
    ) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == Some(id))
            .ok_or_else(|| DomainError::NotFound("User".to_string()))?;
        user.provider = provider;
        user.provider_id = Some(provider_id.to_string());
        if let Some(url) = avatar_url {
            user.avatar_url = Some(url.to_string());
        }
        Ok(user.clone())
    }
}

/// Transparent hasher so tests can assert on stored hashes.
pub struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        hash == format!("hashed:{}", password)
    }
}

pub fn local_user(id: i64, email: &str, password: &str) -> User {
    User {
        id: Some(id),
        email: email.to_string(),
        name: "Test User".to_string(),
        password_hash: Some(format!("hashed:{}", password)),
        provider: AuthProvider::Local,
        provider_id: None,
        avatar_url: None,
        is_verified: false,
        created_at: None,
        updated_at: None,
    }
}
