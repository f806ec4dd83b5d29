//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use commentary_core::domain::{Comment, Post};
use commentary_core::error::RepoError;
use commentary_core::ports::{CommentRepository, PostRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::Entity as UserEntity;
use super::postgres_base::{PostgresBaseRepository, classify_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

impl UserRepository for PostgresUserRepository {}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(%user_id, "Finding posts by author");

        let result = PostEntity::find()
            .filter(post::Column::AuthorId.eq(user_id))
            .order_by_asc(post::Column::PublishedAt)
            .all(self.tx.as_ref())
            .await
            .map_err(classify_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

impl PostgresCommentRepository {
    async fn find_where(
        &self,
        condition: sea_orm::Condition,
    ) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(condition)
            .order_by_asc(comment::Column::LastEditedAt)
            .all(self.tx.as_ref())
            .await
            .map_err(classify_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        self.find_where(sea_orm::Condition::all().add(comment::Column::PostId.eq(post_id)))
            .await
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        self.find_where(sea_orm::Condition::all().add(comment::Column::AuthorId.eq(user_id)))
            .await
    }

    async fn find_by_post_and_user(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<Comment>, RepoError> {
        self.find_where(
            sea_orm::Condition::all()
                .add(comment::Column::PostId.eq(post_id))
                .add(comment::Column::AuthorId.eq(user_id)),
        )
        .await
    }
}
