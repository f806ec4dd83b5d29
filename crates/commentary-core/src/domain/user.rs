use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Entity;

/// User entity - an author of posts and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub nickname: String,
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and registration time.
    pub fn new(nickname: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            nickname,
            registered_at: Utc::now(),
        }
    }

    pub fn rename(&mut self, nickname: String) {
        self.nickname = nickname;
    }
}

impl Entity for User {
    const NAME: &'static str = "User";

    fn id(&self) -> Uuid {
        self.id
    }
}
