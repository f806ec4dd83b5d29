//! Comment operations.

use tracing::instrument;
use uuid::Uuid;

use commentary_shared::dto::CommentDto;

use super::{require_id, require_text};
use crate::domain::{Comment, Entity};
use crate::error::DomainError;
use crate::ports::UnitOfWork;

const TEXT_FIELD: &str = "Comment text";

pub async fn get_all(uow: Box<dyn UnitOfWork>) -> Result<Vec<CommentDto>, DomainError> {
    let comments = uow.comments().get_all().await?;
    Ok(to_dtos(comments))
}

pub async fn get_by_id(
    uow: Box<dyn UnitOfWork>,
    comment_id: Uuid,
) -> Result<CommentDto, DomainError> {
    let comment = load(uow.as_ref(), comment_id).await?;
    Ok(comment.into())
}

/// Comments under `post_id`. A deleted or unknown post yields an empty list.
pub async fn get_by_post_id(
    uow: Box<dyn UnitOfWork>,
    post_id: Uuid,
) -> Result<Vec<CommentDto>, DomainError> {
    require_id(post_id, "postId")?;

    let comments = uow.comments().find_by_post_id(post_id).await?;
    Ok(to_dtos(comments))
}

pub async fn get_by_user_id(
    uow: Box<dyn UnitOfWork>,
    user_id: Uuid,
) -> Result<Vec<CommentDto>, DomainError> {
    require_id(user_id, "userId")?;

    let comments = uow.comments().find_by_user_id(user_id).await?;
    Ok(to_dtos(comments))
}

/// Comments `user_id` left under `post_id`.
pub async fn get_by_post_and_user(
    uow: Box<dyn UnitOfWork>,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<Vec<CommentDto>, DomainError> {
    require_id(post_id, "postId")?;
    require_id(user_id, "userId")?;

    let comments = uow
        .comments()
        .find_by_post_and_user(post_id, user_id)
        .await?;
    Ok(to_dtos(comments))
}

#[instrument(skip(uow, text))]
pub async fn create(
    uow: Box<dyn UnitOfWork>,
    text: &str,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<CommentDto, DomainError> {
    let text = require_text(text, TEXT_FIELD)?;
    require_id(user_id, "userId")?;
    require_id(post_id, "postId")?;

    let comment = uow
        .comments()
        .create(Comment::new(post_id, user_id, text))
        .await?;
    uow.commit().await?;

    tracing::info!(comment_id = %comment.id, "Comment created");
    Ok(comment.into())
}

/// Replace the text of a comment and refresh its edit date.
#[instrument(skip(uow, text))]
pub async fn update(
    uow: Box<dyn UnitOfWork>,
    comment_id: Uuid,
    text: &str,
) -> Result<CommentDto, DomainError> {
    let text = require_text(text, TEXT_FIELD)?;

    let mut comment = load(uow.as_ref(), comment_id).await?;
    comment.edit(text);

    let comment = uow.comments().update(comment).await?;
    uow.commit().await?;

    Ok(comment.into())
}

#[instrument(skip(uow))]
pub async fn delete(uow: Box<dyn UnitOfWork>, comment_id: Uuid) -> Result<(), DomainError> {
    let comment = load(uow.as_ref(), comment_id).await?;

    uow.comments().remove(comment).await?;
    uow.commit().await?;

    Ok(())
}

async fn load(uow: &dyn UnitOfWork, comment_id: Uuid) -> Result<Comment, DomainError> {
    require_id(comment_id, "commentId")?;

    uow.comments()
        .get_by_id(comment_id)
        .await?
        .ok_or_else(|| DomainError::not_found(Comment::NAME, comment_id))
}

fn to_dtos(comments: Vec<Comment>) -> Vec<CommentDto> {
    comments.into_iter().map(CommentDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::untouched;

    #[tokio::test]
    async fn test_relation_queries_reject_nil_ids() {
        let err = get_by_post_id(untouched(), Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = get_by_user_id(untouched(), Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = get_by_post_and_user(untouched(), Uuid::new_v4(), Uuid::nil())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_input() {
        let user_id = Uuid::new_v4();
        let post_id = Uuid::new_v4();

        let err = create(untouched(), "", user_id, post_id).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = create(untouched(), "nice", Uuid::nil(), post_id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = create(untouched(), "nice", user_id, Uuid::nil())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_empty_text() {
        let err = update(untouched(), Uuid::new_v4(), "").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_and_delete_reject_nil_id() {
        let err = get_by_id(untouched(), Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = delete(untouched(), Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
