//! Persists the auth session between page loads.

use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::api::AuthSessionResponse;
use shared::models::UserIdentity;
use shared::ApiError;

const SESSION_KEY: &str = "cliccash.auth.session";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserIdentity,
}

impl From<AuthSessionResponse> for StoredSession {
    fn from(session: AuthSessionResponse) -> Self {
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            user: session.user,
        }
    }
}

pub fn load() -> Option<StoredSession> {
    LocalStorage::get(SESSION_KEY).ok()
}

pub fn save(session: &StoredSession) -> Result<(), ApiError> {
    LocalStorage::set(SESSION_KEY, session).map_err(|e| ApiError::Storage(e.to_string()))
}

pub fn clear() {
    LocalStorage::delete(SESSION_KEY);
}

/// Bearer token for table requests, if someone is signed in.
pub fn access_token() -> Option<String> {
    load().map(|session| session.access_token)
}
