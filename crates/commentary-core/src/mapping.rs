//! Entity to DTO conversions, one field at a time.

use commentary_shared::dto::{CommentDto, PostDto, UserDto};

use crate::domain::{Comment, Post, User};

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname,
            registration_date: user.registered_at,
        }
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            text: post.text,
            publication_date: post.published_at,
            author_id: post.author_id,
        }
    }
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            last_edit_date: comment.last_edited_at,
            post_id: comment.post_id,
            author_id: comment.author_id,
        }
    }
}
