//! Post operations.

use tracing::instrument;
use uuid::Uuid;

use commentary_shared::dto::PostDto;

use super::{require_id, require_text};
use crate::domain::{Entity, Post};
use crate::error::DomainError;
use crate::ports::UnitOfWork;

const TEXT_FIELD: &str = "Post text";

pub async fn get_all(uow: Box<dyn UnitOfWork>) -> Result<Vec<PostDto>, DomainError> {
    let posts = uow.posts().get_all().await?;
    Ok(posts.into_iter().map(PostDto::from).collect())
}

pub async fn get_by_id(uow: Box<dyn UnitOfWork>, post_id: Uuid) -> Result<PostDto, DomainError> {
    let post = load(uow.as_ref(), post_id).await?;
    Ok(post.into())
}

/// Posts written by `user_id`. An unknown user simply has no posts.
pub async fn get_by_user_id(
    uow: Box<dyn UnitOfWork>,
    user_id: Uuid,
) -> Result<Vec<PostDto>, DomainError> {
    require_id(user_id, "userId")?;

    let posts = uow.posts().find_by_user_id(user_id).await?;
    Ok(posts.into_iter().map(PostDto::from).collect())
}

/// Publish a post. The author must exist; the store enforces that.
#[instrument(skip(uow, text))]
pub async fn create(
    uow: Box<dyn UnitOfWork>,
    user_id: Uuid,
    text: &str,
) -> Result<PostDto, DomainError> {
    let text = require_text(text, TEXT_FIELD)?;
    require_id(user_id, "userId")?;

    let post = uow.posts().create(Post::new(user_id, text)).await?;
    uow.commit().await?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(post.into())
}

#[instrument(skip(uow, text))]
pub async fn update(
    uow: Box<dyn UnitOfWork>,
    post_id: Uuid,
    text: &str,
) -> Result<PostDto, DomainError> {
    let text = require_text(text, TEXT_FIELD)?;

    let mut post = load(uow.as_ref(), post_id).await?;
    post.edit(text);

    let post = uow.posts().update(post).await?;
    uow.commit().await?;

    Ok(post.into())
}

/// Delete a post together with its comments.
#[instrument(skip(uow))]
pub async fn delete(uow: Box<dyn UnitOfWork>, post_id: Uuid) -> Result<(), DomainError> {
    let post = load(uow.as_ref(), post_id).await?;

    uow.posts().remove(post).await?;
    uow.commit().await?;

    tracing::info!(%post_id, "Post deleted");
    Ok(())
}

async fn load(uow: &dyn UnitOfWork, post_id: Uuid) -> Result<Post, DomainError> {
    require_id(post_id, "postId")?;

    uow.posts()
        .get_by_id(post_id)
        .await?
        .ok_or_else(|| DomainError::not_found(Post::NAME, post_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::untouched;

    #[tokio::test]
    async fn test_get_by_nil_id_is_rejected() {
        let err = get_by_id(untouched(), Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_posts_of_nil_user_are_rejected() {
        let err = get_by_user_id(untouched(), Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_checks_text_and_author() {
        let err = create(untouched(), Uuid::new_v4(), "").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = create(untouched(), Uuid::nil(), "hello").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete_reject_nil_id() {
        let err = update(untouched(), Uuid::nil(), "hello").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = delete(untouched(), Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
