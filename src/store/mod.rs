//! In-memory post collection, mirrored to storage on every mutation.

mod error;
pub mod policy;

pub use error::StoreError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::Session;
use crate::storage::Storage;

/// A single authored blog entry.
///
/// Posts carry a stable id assigned at creation and are referenced by id
/// everywhere, so filtered views stay actionable without index bookkeeping.
/// Invariant: `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ordered post collection, newest-first. Every mutation is validated,
/// authorized through [`policy`], applied, and mirrored to storage.
pub struct PostStore {
    posts: Vec<Post>,
    storage: Storage,
}

impl PostStore {
    /// Load the persisted collection (empty when nothing valid is stored).
    pub fn load(storage: Storage) -> Self {
        let posts = storage.load_posts();
        Self { posts, storage }
    }

    /// Publish a new post. Prepends, so the collection stays newest-first.
    pub fn create(
        &mut self,
        title: &str,
        content: &str,
        session: &Session,
    ) -> Result<Post, StoreError> {
        let author = policy::require_user(session)?;
        let (title, content) = validate_draft(title, content)?;

        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title,
            content,
            author: author.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.posts.insert(0, post.clone());
        self.persist();
        Ok(post)
    }

    /// Rewrite an existing post's title and content. Keeps `created_at`;
    /// `updated_at` advances but never moves backwards, even if the clock
    /// does.
    pub fn update(
        &mut self,
        id: Uuid,
        title: &str,
        content: &str,
        session: &Session,
    ) -> Result<Post, StoreError> {
        let (title, content) = validate_draft(title, content)?;
        let index = self.index_of(id)?;
        policy::require_owner(session, &self.posts[index])?;

        let post = &mut self.posts[index];
        post.title = title;
        post.content = content;
        post.updated_at = Utc::now().max(post.updated_at);
        let updated = post.clone();
        self.persist();
        Ok(updated)
    }

    /// Remove a post. The UI confirms with the user before calling this.
    pub fn delete(&mut self, id: Uuid, session: &Session) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        policy::require_owner(session, &self.posts[index])?;

        self.posts.remove(index);
        self.persist();
        Ok(())
    }

    /// All posts, newest-first.
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Posts by one author, in the same relative order as [`Self::all`].
    pub fn by_author<'a>(&'a self, author: &str) -> Vec<&'a Post> {
        self.posts.iter().filter(|p| p.author == author).collect()
    }

    pub fn get(&self, id: Uuid) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn index_of(&self, id: Uuid) -> Result<usize, StoreError> {
        self.posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)
    }

    fn persist(&self) {
        self.storage.save_posts(&self.posts);
    }
}

/// Reject blank titles/contents; returns the trimmed pair that gets stored.
fn validate_draft(title: &str, content: &str) -> Result<(String, String), StoreError> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(StoreError::Validation(
            "Please enter both title and content".to_string(),
        ));
    }
    Ok((title.to_string(), content.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    struct Fixture {
        // Held so the backing directory outlives the store.
        _dir: tempfile::TempDir,
        storage: Storage,
        store: PostStore,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        let store = PostStore::load(storage.clone());
        Fixture {
            _dir: dir,
            storage,
            store,
        }
    }

    fn session_for(fixture: &Fixture, username: &str) -> Session {
        let mut session = Session::default();
        session.sign_in(
            &fixture.storage,
            Credentials {
                username: username.to_string(),
                token: "tok".to_string(),
            },
        );
        session
    }

    #[test]
    fn create_prepends_with_equal_timestamps() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");

        fx.store.create("First", "one", &alice).unwrap();
        let post = fx.store.create("Second", "two", &alice).unwrap();

        assert_eq!(fx.store.all()[0], post);
        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(fx.store.all()[1].title, "First");
    }

    #[test]
    fn create_rejects_blank_fields() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");

        for (title, content) in [("", "body"), ("   ", "body"), ("title", ""), ("title", " \n")] {
            let err = fx.store.create(title, content, &alice).unwrap_err();
            assert!(matches!(err, StoreError::Validation(_)));
        }
        assert!(fx.store.all().is_empty());
    }

    #[test]
    fn create_while_signed_out_is_rejected() {
        let mut fx = fixture();
        let err = fx
            .store
            .create("Hello", "World", &Session::default())
            .unwrap_err();
        assert_eq!(err, StoreError::AuthRequired);
        assert!(fx.store.all().is_empty());
    }

    #[test]
    fn create_trims_stored_fields() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");

        let post = fx.store.create("  Hello  ", " World\n", &alice).unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
    }

    #[test]
    fn update_keeps_created_at_and_never_rewinds_updated_at() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");

        let post = fx.store.create("Hello", "World", &alice).unwrap();
        let updated = fx
            .store
            .update(post.id, "Hello2", "World", &alice)
            .unwrap();

        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at >= post.updated_at);
        assert_eq!(updated.title, "Hello2");
        assert_eq!(updated.content, "World");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");

        let err = fx
            .store
            .update(Uuid::new_v4(), "t", "c", &alice)
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn update_by_non_owner_changes_nothing() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");
        let bob = session_for(&fx, "bob");

        let post = fx.store.create("Hello", "World", &alice).unwrap();
        let err = fx
            .store
            .update(post.id, "Hijacked", "World", &bob)
            .unwrap_err();

        assert_eq!(err, StoreError::PermissionDenied);
        assert_eq!(fx.store.get(post.id).unwrap().title, "Hello");
    }

    #[test]
    fn delete_removes_exactly_one_without_reordering() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");

        fx.store.create("a", "1", &alice).unwrap();
        let middle = fx.store.create("b", "2", &alice).unwrap();
        fx.store.create("c", "3", &alice).unwrap();

        fx.store.delete(middle.id, &alice).unwrap();

        let titles: Vec<_> = fx.store.all().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["c", "a"]);
    }

    #[test]
    fn delete_by_non_owner_is_denied() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");
        let bob = session_for(&fx, "bob");

        let post = fx.store.create("Hello", "World", &alice).unwrap();
        assert_eq!(
            fx.store.delete(post.id, &bob),
            Err(StoreError::PermissionDenied)
        );
        assert_eq!(fx.store.all().len(), 1);
    }

    #[test]
    fn by_author_is_a_stable_subsequence() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");
        let bob = session_for(&fx, "bob");

        fx.store.create("a1", "x", &alice).unwrap();
        fx.store.create("b1", "x", &bob).unwrap();
        fx.store.create("a2", "x", &alice).unwrap();

        let expected: Vec<&Post> = fx
            .store
            .all()
            .iter()
            .filter(|p| p.author == "alice")
            .collect();
        assert_eq!(fx.store.by_author("alice"), expected);

        let titles: Vec<_> = fx
            .store
            .by_author("alice")
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, ["a2", "a1"]);
    }

    #[test]
    fn mutations_are_mirrored_to_storage() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");

        let post = fx.store.create("Hello", "World", &alice).unwrap();
        let reloaded = PostStore::load(fx.storage.clone());
        assert_eq!(reloaded.all(), fx.store.all());

        fx.store.delete(post.id, &alice).unwrap();
        let reloaded = PostStore::load(fx.storage.clone());
        assert!(reloaded.all().is_empty());
    }

    /// The full lifecycle scenario: create, edit the title, delete.
    #[test]
    fn create_update_delete_scenario() {
        let mut fx = fixture();
        let alice = session_for(&fx, "alice");

        let post = fx.store.create("Hello", "World", &alice).unwrap();
        assert_eq!(fx.store.all().len(), 1);
        assert_eq!(fx.store.all()[0].title, "Hello");
        assert_eq!(fx.store.all()[0].content, "World");
        assert_eq!(fx.store.all()[0].author, "alice");

        let updated = fx.store.update(post.id, "Hello2", "World", &alice).unwrap();
        assert_eq!(updated.title, "Hello2");
        assert_eq!(updated.content, "World");

        fx.store.delete(post.id, &alice).unwrap();
        assert!(fx.store.all().is_empty());
    }
}
