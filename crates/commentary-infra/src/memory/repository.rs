//! Repositories over the working copy of an [`InMemoryUnitOfWork`](super::InMemoryUnitOfWork).

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use commentary_core::domain::{Comment, Post, User};
use commentary_core::error::RepoError;
use commentary_core::ports::{CommentRepository, PostRepository, Repository, UserRepository};

use super::tables::{Row, Staged, Tables, delete_row, insert_row, update_row};

/// Generic in-memory repository.
///
/// Reads see the unit's working copy once it has written, and the live
/// tables before that.
pub struct InMemoryRepository<T> {
    tables: Arc<RwLock<Tables>>,
    staged: Arc<Mutex<Staged>>,
    _row: PhantomData<fn() -> T>,
}

impl<T> InMemoryRepository<T> {
    pub(crate) fn new(tables: Arc<RwLock<Tables>>, staged: Arc<Mutex<Staged>>) -> Self {
        Self {
            tables,
            staged,
            _row: PhantomData,
        }
    }

    async fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        let staged = self.staged.lock().await;
        match staged.working() {
            Some(working) => f(working),
            None => f(&*self.tables.read().await),
        }
    }

    async fn stage(
        &self,
        change: impl Fn(&mut Tables) -> Result<(), RepoError> + Send + Sync + 'static,
    ) -> Result<(), RepoError> {
        let mut staged = self.staged.lock().await;
        let live = self.tables.read().await;
        staged.stage(&live, change)
    }

    async fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T>
    where
        T: Row,
    {
        self.read(|tables| {
            T::table(tables)
                .values()
                .filter(|row| predicate(row))
                .cloned()
                .collect()
        })
        .await
    }
}

pub type InMemoryUserRepository = InMemoryRepository<User>;
pub type InMemoryPostRepository = InMemoryRepository<Post>;
pub type InMemoryCommentRepository = InMemoryRepository<Comment>;

#[async_trait]
impl<T: Row> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.select(|_| true).await)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        if id.is_nil() {
            return Err(RepoError::InvalidIdentity(id));
        }

        Ok(self.read(|tables| T::table(tables).get(&id).cloned()).await)
    }

    async fn create(&self, entity: T) -> Result<T, RepoError> {
        let row = entity.clone();
        self.stage(move |tables| insert_row(tables, row.clone()))
            .await?;
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let row = entity.clone();
        self.stage(move |tables| update_row(tables, row.clone()))
            .await?;
        Ok(entity)
    }

    async fn remove(&self, entity: T) -> Result<(), RepoError> {
        let id = entity.id();
        self.stage(move |tables| delete_row::<T>(tables, id)).await
    }
}

impl UserRepository for InMemoryUserRepository {}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.select(|post| post.author_id == user_id).await;
        posts.sort_by_key(|post| post.published_at);
        Ok(posts)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        Ok(by_edit_date(
            self.select(|comment| comment.post_id == post_id).await,
        ))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        Ok(by_edit_date(
            self.select(|comment| comment.author_id == user_id).await,
        ))
    }

    async fn find_by_post_and_user(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<Comment>, RepoError> {
        Ok(by_edit_date(
            self.select(|comment| comment.post_id == post_id && comment.author_id == user_id)
                .await,
        ))
    }
}

fn by_edit_date(mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.sort_by_key(|comment| comment.last_edited_at);
    comments
}
