//! Domain entities - the core business objects.
//!
//! Relations are plain foreign-key fields. There are no navigation
//! collections; related rows are found through repository queries.

mod comment;
mod post;
mod user;

use uuid::Uuid;

pub use comment::Comment;
pub use post::Post;
pub use user::User;

/// Identity accessor shared by every persisted record.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable type name used in error messages.
    const NAME: &'static str;

    fn id(&self) -> Uuid;
}
