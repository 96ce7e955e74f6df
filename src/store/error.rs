//! Error taxonomy for post mutations.
//!
//! Nothing here is fatal: every variant is surfaced to the acting user as
//! a notice and control returns to the current page unchanged.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Empty title or content after trimming.
    #[error("{0}")]
    Validation(String),

    /// A mutation was attempted while signed out.
    #[error("You must be signed in to do that")]
    AuthRequired,

    /// No post with the given id. The UI only offers actions on posts it
    /// just listed, so this should not occur in normal operation.
    #[error("That post no longer exists")]
    NotFound,

    /// A mutation was attempted on somebody else's post.
    #[error("Only the author can change this post")]
    PermissionDenied,
}
