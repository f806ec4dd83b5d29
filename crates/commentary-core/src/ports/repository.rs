use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Entity, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// Writes are staged inside the owning unit of work and only become
/// visible to other requests once it commits.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Every entity of the type. Ordering is unspecified.
    async fn get_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    ///
    /// `Ok(None)` means the row is absent; a nil ID is rejected with
    /// [`RepoError::InvalidIdentity`].
    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError>;

    /// Stage a new entity for insertion.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Stage a replace of an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Stage removal of an existing entity.
    async fn remove(&self, entity: T) -> Result<(), RepoError>;
}

/// User repository.
pub trait UserRepository: Repository<User> {}

/// Post repository.
#[async_trait]
pub trait PostRepository: Repository<Post> {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError>;
}

/// Comment repository with lookups by post, by author, and by both.
#[async_trait]
pub trait CommentRepository: Repository<Comment> {
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    async fn find_by_post_and_user(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<Comment>, RepoError>;
}
