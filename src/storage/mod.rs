//! Local persistence for the post collection and the session.
//!
//! Three logical keys in one key-value namespace: the serialized post
//! collection, the session username, and the session token. Reads fail
//! open: malformed stored data falls back to the empty state with a
//! warning rather than refusing to start.

mod kv;

pub use kv::FileKv;

use crate::auth::Credentials;
use crate::store::Post;

const POSTS_KEY: &str = "posts";
const SESSION_USERNAME_KEY: &str = "session.username";
const SESSION_TOKEN_KEY: &str = "session.token";

#[derive(Debug, Clone)]
pub struct Storage {
    kv: FileKv,
}

impl Storage {
    pub fn open(dir: impl Into<std::path::PathBuf>) -> std::io::Result<Self> {
        Ok(Self {
            kv: FileKv::open(dir)?,
        })
    }

    /// Load the post collection. Absent or malformed data yields an empty
    /// collection; the malformed case is logged so the discard is visible.
    pub fn load_posts(&self) -> Vec<Post> {
        let Some(raw) = self.kv.get(POSTS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(posts) => posts,
            Err(err) => {
                tracing::warn!(%err, "stored posts are not valid JSON, starting empty");
                Vec::new()
            }
        }
    }

    /// Persist the post collection, best-effort.
    pub fn save_posts(&self, posts: &[Post]) {
        match serde_json::to_string(posts) {
            Ok(json) => self.kv.set(POSTS_KEY, &json),
            Err(err) => tracing::warn!(%err, "failed to serialize posts"),
        }
    }

    /// Load the persisted session, if both halves are present.
    ///
    /// A username without a token (or vice versa) is treated as no
    /// session, preserving the token-iff-username invariant.
    pub fn load_session(&self) -> Option<Credentials> {
        let username = self.kv.get(SESSION_USERNAME_KEY)?;
        let token = self.kv.get(SESSION_TOKEN_KEY)?;
        Some(Credentials { username, token })
    }

    pub fn save_session(&self, credentials: &Credentials) {
        self.kv.set(SESSION_USERNAME_KEY, &credentials.username);
        self.kv.set(SESSION_TOKEN_KEY, &credentials.token);
    }

    pub fn clear_session(&self) {
        self.kv.remove(SESSION_USERNAME_KEY);
        self.kv.remove(SESSION_TOKEN_KEY);
    }

    #[cfg(test)]
    fn raw_posts(&self) -> Option<String> {
        self.kv.get(POSTS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Post;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_post(title: &str) -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: "body".to_string(),
            author: "alice".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn missing_posts_key_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        assert!(storage.load_posts().is_empty());
    }

    #[test]
    fn malformed_posts_fail_open_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        storage.kv.set(POSTS_KEY, "{ not json ]");
        assert!(storage.load_posts().is_empty());
    }

    #[test]
    fn posts_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        let posts = vec![sample_post("Hello"), sample_post("Second")];
        storage.save_posts(&posts);
        assert_eq!(storage.load_posts(), posts);
    }

    #[test]
    fn saving_a_just_loaded_collection_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        storage.save_posts(&[sample_post("Hello")]);
        let first = storage.raw_posts().unwrap();

        let loaded = storage.load_posts();
        storage.save_posts(&loaded);
        let second = storage.raw_posts().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn session_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        assert_eq!(storage.load_session(), None);

        let creds = Credentials {
            username: "alice".to_string(),
            token: "tok-1".to_string(),
        };
        storage.save_session(&creds);
        assert_eq!(storage.load_session(), Some(creds));

        storage.clear_session();
        assert_eq!(storage.load_session(), None);
    }

    #[test]
    fn half_present_session_loads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        storage.kv.set(SESSION_USERNAME_KEY, "alice");
        assert_eq!(storage.load_session(), None);
    }
}
