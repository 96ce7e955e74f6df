//! Signed-in identity for the current run.
//!
//! Restored from storage at startup, set by a successful login/register,
//! cleared by an explicit sign-out. Absent credentials mean
//! unauthenticated; there is no partially-signed-in state.

use crate::auth::Credentials;
use crate::storage::Storage;

#[derive(Debug, Default)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    /// Pick up a prior session from storage, if one was persisted.
    pub fn restore(storage: &Storage) -> Self {
        let credentials = storage.load_session();
        if let Some(creds) = &credentials {
            tracing::info!(username = %creds.username, "restored persisted session");
        }
        Self { credentials }
    }

    pub fn current_user(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Adopt freshly minted credentials and persist them.
    pub fn sign_in(&mut self, storage: &Storage, credentials: Credentials) {
        storage.save_session(&credentials);
        self.credentials = Some(credentials);
    }

    /// Drop the session and wipe it from storage.
    pub fn sign_out(&mut self, storage: &Storage) {
        storage.clear_session();
        self.credentials = None;
    }
}
