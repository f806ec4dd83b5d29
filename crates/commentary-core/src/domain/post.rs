use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Entity;

/// Post entity - a piece of text published by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub published_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(author_id: Uuid, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            text,
            published_at: Utc::now(),
        }
    }

    /// Replace the text. The publication date stays as it was.
    pub fn edit(&mut self, text: String) {
        self.text = text;
    }
}

impl Entity for Post {
    const NAME: &'static str = "Post";

    fn id(&self) -> Uuid {
        self.id
    }
}
