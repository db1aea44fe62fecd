use dashmap::DashMap;
use uuid::Uuid;

/// Name of the signed cookie carrying the session id.
pub const SESSION_COOKIE: &str = "domainboard_session";

/// Server-side session table: opaque session id to user id.
///
/// The cookie only ever holds the id; the user row is re-fetched from
/// storage on every request.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, i64>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, user_id: i64) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.sessions.insert(session_id.clone(), user_id);
        session_id
    }

    pub fn user_id(&self, session_id: &str) -> Option<i64> {
        self.sessions.get(session_id).map(|entry| *entry.value())
    }

    pub fn remove(&self, session_id: &str) {
        self.sessions.remove(session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_resolve() {
        let store = SessionStore::new();
        let sid = store.create(42);
        assert_eq!(store.user_id(&sid), Some(42));
    }

    #[test]
    fn test_remove_invalidates() {
        let store = SessionStore::new();
        let sid = store.create(42);
        store.remove(&sid);
        assert_eq!(store.user_id(&sid), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = SessionStore::new();
        assert_ne!(store.create(1), store.create(1));
    }

    #[test]
    fn test_unknown_id_resolves_to_none() {
        let store = SessionStore::new();
        assert_eq!(store.user_id("not-a-session"), None);
    }
}
