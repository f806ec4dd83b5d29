//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire (`userId`, `lastEditDate`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub nickname: String,
    pub registration_date: DateTime<Utc>,
}

/// A post as exposed by the API. Comments are fetched separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: Uuid,
    pub text: String,
    pub publication_date: DateTime<Utc>,
    pub author_id: Uuid,
}

/// A comment as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Uuid,
    pub text: String,
    pub last_edit_date: DateTime<Utc>,
    pub post_id: Uuid,
    pub author_id: Uuid,
}

/// POST /api/User
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub nickname: String,
}

/// PATCH /api/User
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub user_id: Uuid,
    pub nickname: String,
}

/// POST /api/Post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: Uuid,
    pub text: String,
}

/// PATCH /api/Post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub post_id: Uuid,
    pub text: String,
}

/// POST /api/Comment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub text: String,
    pub user_id: Uuid,
    pub post_id: Uuid,
}

/// PATCH /api/Comment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    pub comment_id: Uuid,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_dto_uses_camel_case() {
        let dto = CommentDto {
            id: Uuid::new_v4(),
            text: "nice".to_string(),
            last_edit_date: Utc::now(),
            post_id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("lastEditDate").is_some());
        assert!(json.get("postId").is_some());
        assert!(json.get("authorId").is_some());
    }

    #[test]
    fn test_update_request_reads_camel_case() {
        let id = Uuid::new_v4();
        let body = format!(r#"{{"commentId":"{id}","text":"edited"}}"#);

        let req: UpdateCommentRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(req.comment_id, id);
        assert_eq!(req.text, "edited");
    }
}
