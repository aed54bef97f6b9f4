use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

impl User {
    /// Builds a fresh user representation with a new id, stamped with a
    /// single `now` for both timestamps.
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_shares_timestamps() {
        let user = User::new("a@b.com");
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_new_users_get_distinct_ids() {
        assert_ne!(User::new("a@b.com").id, User::new("a@b.com").id);
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let value = serde_json::to_value(User::new("a@b.com")).unwrap();
        for key in ["id", "created_at", "updated_at", "email"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
