use async_trait::async_trait;

use super::repository::{CommentRepository, PostRepository, UserRepository};
use crate::error::RepoError;

/// One transactional session over the three repositories.
///
/// A unit of work lives for a single request. Changes staged through its
/// repositories are published together by [`UnitOfWork::commit`]; dropping
/// it without committing discards them.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> &dyn UserRepository;

    fn posts(&self) -> &dyn PostRepository;

    fn comments(&self) -> &dyn CommentRepository;

    /// Persist every staged change atomically.
    async fn commit(self: Box<Self>) -> Result<(), RepoError>;
}

/// Opens a fresh [`UnitOfWork`] per request.
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError>;
}
