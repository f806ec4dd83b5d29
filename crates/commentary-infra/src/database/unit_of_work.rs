//! Unit of work over a single PostgreSQL transaction.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseTransaction, DbConn, TransactionTrait};

use commentary_core::error::RepoError;
use commentary_core::ports::{
    CommentRepository, PostRepository, UnitOfWork, UnitOfWorkFactory, UserRepository,
};

use super::postgres_base::classify_db_err;
use super::postgres_repo::{
    PostgresCommentRepository, PostgresPostRepository, PostgresUserRepository,
};

/// Repositories sharing one open transaction.
///
/// Dropping the value without calling [`UnitOfWork::commit`] rolls the
/// transaction back.
pub struct PostgresUnitOfWork {
    tx: Arc<DatabaseTransaction>,
    users: PostgresUserRepository,
    posts: PostgresPostRepository,
    comments: PostgresCommentRepository,
}

impl PostgresUnitOfWork {
    /// Open a transaction on `db`.
    pub async fn begin(db: &DbConn) -> Result<Self, RepoError> {
        let tx = Arc::new(db.begin().await.map_err(classify_db_err)?);

        Ok(Self {
            users: PostgresUserRepository::new(tx.clone()),
            posts: PostgresPostRepository::new(tx.clone()),
            comments: PostgresCommentRepository::new(tx.clone()),
            tx,
        })
    }
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn posts(&self) -> &dyn PostRepository {
        &self.posts
    }

    fn comments(&self) -> &dyn CommentRepository {
        &self.comments
    }

    async fn commit(self: Box<Self>) -> Result<(), RepoError> {
        let Self {
            tx,
            users,
            posts,
            comments,
        } = *self;
        drop((users, posts, comments));

        let tx = Arc::try_unwrap(tx).map_err(|_| {
            RepoError::Transaction("transaction still shared at commit".to_string())
        })?;

        tx.commit().await.map_err(classify_db_err)?;
        tracing::debug!("Transaction committed");
        Ok(())
    }
}

/// Opens a [`PostgresUnitOfWork`] per request from the shared pool.
pub struct PostgresUnitOfWorkFactory {
    db: DbConn,
}

impl PostgresUnitOfWorkFactory {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWorkFactory for PostgresUnitOfWorkFactory {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError> {
        let uow = PostgresUnitOfWork::begin(&self.db).await?;
        Ok(Box::new(uow))
    }
}
