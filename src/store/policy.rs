//! Single authorization point for post mutations.
//!
//! Every mutating store operation calls one of these checks before
//! touching state, so "is this allowed" lives in exactly one place
//! instead of being repeated at call sites.

use crate::session::Session;
use crate::store::error::StoreError;
use crate::store::Post;

/// Capability: authenticated. Returns the acting username.
pub fn require_user(session: &Session) -> Result<&str, StoreError> {
    session.current_user().ok_or(StoreError::AuthRequired)
}

/// Capability: owner-of-post. Returns the acting username.
pub fn require_owner<'a>(session: &'a Session, post: &Post) -> Result<&'a str, StoreError> {
    let user = require_user(session)?;
    if post.author == user {
        Ok(user)
    } else {
        Err(StoreError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::storage::Storage;
    use chrono::Utc;
    use uuid::Uuid;

    fn signed_in(dir: &tempfile::TempDir, username: &str) -> Session {
        let storage = Storage::open(dir.path()).unwrap();
        let mut session = Session::default();
        session.sign_in(
            &storage,
            Credentials {
                username: username.to_string(),
                token: "tok".to_string(),
            },
        );
        session
    }

    fn post_by(author: &str) -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            content: "c".to_string(),
            author: author.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn signed_out_fails_both_checks() {
        let session = Session::default();
        assert_eq!(require_user(&session), Err(StoreError::AuthRequired));
        assert_eq!(
            require_owner(&session, &post_by("alice")),
            Err(StoreError::AuthRequired)
        );
    }

    #[test]
    fn owner_passes_non_owner_does_not() {
        let dir = tempfile::tempdir().unwrap();
        let session = signed_in(&dir, "alice");

        assert_eq!(require_owner(&session, &post_by("alice")), Ok("alice"));
        assert_eq!(
            require_owner(&session, &post_by("bob")),
            Err(StoreError::PermissionDenied)
        );
    }
}
