use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TokenStore;
use crate::models::LoginResponse;

/// Storage key for the bearer credential
pub const TOKEN_KEY: &str = "access_token";

/// Storage key for the student identifier
pub const STUDENT_ID_KEY: &str = "student_id";

/// Storage key for the display name
pub const NAME_KEY: &str = "name";

/// Snapshot of the persisted session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub student_id: String,
    pub name: String,
}

/// Session state over an injected [`TokenStore`].
///
/// Clone is cheap - the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Persist the credential and identity fields from a successful login.
    /// The three keys are written together.
    pub fn save(&self, login: &LoginResponse) {
        self.store.set(TOKEN_KEY, &login.access_token);
        self.store.set(STUDENT_ID_KEY, &login.student_id);
        self.store.set(NAME_KEY, &login.name);
        debug!(student_id = %login.student_id, "session saved");
    }

    /// Delete the credential and identity fields. The three keys are
    /// cleared together; clearing an empty session is a no-op.
    pub fn clear(&self) {
        self.store.delete(TOKEN_KEY);
        self.store.delete(STUDENT_ID_KEY);
        self.store.delete(NAME_KEY);
        debug!("session cleared");
    }

    /// Get the bearer token if one is stored
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Get the stored session snapshot, if complete
    pub fn data(&self) -> Option<SessionData> {
        Some(SessionData {
            token: self.store.get(TOKEN_KEY)?,
            student_id: self.store.get(STUDENT_ID_KEY)?,
            name: self.store.get(NAME_KEY)?,
        })
    }

    /// Check whether a credential is present
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryStore;

    fn login_response() -> LoginResponse {
        LoginResponse {
            access_token: "tok".to_string(),
            token_type: "bearer".to_string(),
            student_id: "s123".to_string(),
            name: "Jane".to_string(),
        }
    }

    #[test]
    fn test_save_writes_all_three_keys() {
        let store = Arc::new(MemoryStore::new());
        let session = Session::new(store.clone());

        session.save(&login_response());

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(store.get(STUDENT_ID_KEY).as_deref(), Some("s123"));
        assert_eq!(store.get(NAME_KEY).as_deref(), Some("Jane"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_clear_removes_all_three_keys() {
        let store = Arc::new(MemoryStore::new());
        let session = Session::new(store.clone());

        session.save(&login_response());
        session.clear();

        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(STUDENT_ID_KEY), None);
        assert_eq!(store.get(NAME_KEY), None);
        assert!(!session.is_authenticated());
        assert!(session.data().is_none());
    }

    #[test]
    fn test_data_requires_all_keys() {
        let store = Arc::new(MemoryStore::new());
        let session = Session::new(store.clone());

        store.set(TOKEN_KEY, "tok");
        assert!(session.data().is_none());

        store.set(STUDENT_ID_KEY, "s123");
        store.set(NAME_KEY, "Jane");
        let data = session.data().unwrap();
        assert_eq!(data.token, "tok");
        assert_eq!(data.student_id, "s123");
        assert_eq!(data.name, "Jane");
    }
}
