//! In-memory store - used as fallback when no database is configured.
//!
//! Enforces the same foreign keys and delete cascades as the SQL schema.
//! Note: Data is lost on process restart.

mod repository;
mod tables;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use commentary_core::error::RepoError;
use commentary_core::ports::{
    CommentRepository, PostRepository, UnitOfWork, UnitOfWorkFactory, UserRepository,
};

pub use repository::{
    InMemoryCommentRepository, InMemoryPostRepository, InMemoryRepository, InMemoryUserRepository,
};

use tables::{Staged, Tables};

/// Shared tables behind an async RwLock.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a unit of work. Nothing is copied until its first write.
    pub async fn begin(&self) -> InMemoryUnitOfWork {
        let staged = Arc::new(Mutex::new(Staged::default()));

        InMemoryUnitOfWork {
            users: InMemoryRepository::new(self.tables.clone(), staged.clone()),
            posts: InMemoryRepository::new(self.tables.clone(), staged.clone()),
            comments: InMemoryRepository::new(self.tables.clone(), staged.clone()),
            tables: self.tables.clone(),
            staged,
        }
    }
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError> {
        Ok(Box::new(InMemoryStore::begin(self).await))
    }
}

/// Working copy plus the log of staged changes.
///
/// Read-only units never copy the tables; the first write snapshots them.
/// From then on reads see the unit's own writes. On commit the log is replayed against
/// the live tables, so changes committed by other units in the meantime are
/// kept. Either every change applies or none does.
pub struct InMemoryUnitOfWork {
    tables: Arc<RwLock<Tables>>,
    staged: Arc<Mutex<Staged>>,
    users: InMemoryUserRepository,
    posts: InMemoryPostRepository,
    comments: InMemoryCommentRepository,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
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
        let changes = self.staged.lock().await.take_changes();
        if changes.is_empty() {
            return Ok(());
        }

        let mut tables = self.tables.write().await;
        let mut next = tables.clone();
        for change in &changes {
            change(&mut next)?;
        }
        *tables = next;

        tracing::debug!(changes = changes.len(), "In-memory unit of work committed");
        Ok(())
    }
}
