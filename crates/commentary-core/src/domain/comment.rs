use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Entity;

/// Comment entity - a reply left by a user under a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub last_edited_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment on `post_id` written by `author_id`.
    pub fn new(post_id: Uuid, author_id: Uuid, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            text,
            last_edited_at: Utc::now(),
        }
    }

    /// Replace the text and bump the edit timestamp.
    pub fn edit(&mut self, text: String) {
        self.text = text;
        self.last_edited_at = Utc::now();
    }
}

impl Entity for Comment {
    const NAME: &'static str = "Comment";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_refreshes_timestamp() {
        let mut comment = Comment::new(Uuid::new_v4(), Uuid::new_v4(), "first".to_string());
        let id = comment.id;
        let created = comment.last_edited_at;

        comment.edit("second".to_string());

        assert_eq!(comment.id, id);
        assert_eq!(comment.text, "second");
        assert!(comment.last_edited_at >= created);
    }

    #[test]
    fn test_new_comments_get_distinct_ids() {
        let post_id = Uuid::new_v4();
        let author_id = Uuid::new_v4();
        let a = Comment::new(post_id, author_id, "a".to_string());
        let b = Comment::new(post_id, author_id, "b".to_string());

        assert_ne!(a.id, b.id);
        assert!(!a.id.is_nil());
    }
}
