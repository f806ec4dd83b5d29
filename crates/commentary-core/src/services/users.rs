//! User operations.

use tracing::instrument;
use uuid::Uuid;

use commentary_shared::dto::UserDto;

use super::{require_id, require_text};
use crate::domain::{Entity, User};
use crate::error::DomainError;
use crate::ports::UnitOfWork;

pub async fn get_all(uow: Box<dyn UnitOfWork>) -> Result<Vec<UserDto>, DomainError> {
    let users = uow.users().get_all().await?;
    Ok(users.into_iter().map(UserDto::from).collect())
}

pub async fn get_by_id(uow: Box<dyn UnitOfWork>, user_id: Uuid) -> Result<UserDto, DomainError> {
    let user = load(uow.as_ref(), user_id).await?;
    Ok(user.into())
}

#[instrument(skip(uow))]
pub async fn create(uow: Box<dyn UnitOfWork>, nickname: &str) -> Result<UserDto, DomainError> {
    let nickname = require_text(nickname, "Nickname")?;

    let user = uow.users().create(User::new(nickname)).await?;
    uow.commit().await?;

    tracing::info!(user_id = %user.id, "User created");
    Ok(user.into())
}

/// Rename a user. Nothing else about the user changes.
#[instrument(skip(uow))]
pub async fn update(
    uow: Box<dyn UnitOfWork>,
    user_id: Uuid,
    nickname: &str,
) -> Result<UserDto, DomainError> {
    require_id(user_id, "userId")?;
    let nickname = require_text(nickname, "Nickname")?;

    let mut user = load(uow.as_ref(), user_id).await?;
    user.rename(nickname);

    let user = uow.users().update(user).await?;
    uow.commit().await?;

    Ok(user.into())
}

/// Delete a user. Their posts and comments go with them.
#[instrument(skip(uow))]
pub async fn delete(uow: Box<dyn UnitOfWork>, user_id: Uuid) -> Result<(), DomainError> {
    let user = load(uow.as_ref(), user_id).await?;

    uow.users().remove(user).await?;
    uow.commit().await?;

    tracing::info!(%user_id, "User deleted");
    Ok(())
}

async fn load(uow: &dyn UnitOfWork, user_id: Uuid) -> Result<User, DomainError> {
    require_id(user_id, "userId")?;

    uow.users()
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| DomainError::not_found(User::NAME, user_id))
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
    async fn test_create_with_empty_nickname_is_rejected() {
        let err = create(untouched(), "").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_validates_before_loading() {
        let err = update(untouched(), Uuid::nil(), "alice").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = update(untouched(), Uuid::new_v4(), "   ").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_nil_id_is_rejected() {
        let err = delete(untouched(), Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
