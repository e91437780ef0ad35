use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user
pub type UserId = Uuid;

/// A registered user of the geodata entry app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Login name
    pub username: String,

    /// Password as supplied at creation
    pub password: String,

    /// Contact email
    pub email: String,

    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: password.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_users_get_distinct_ids() {
        let a = User::new("ada", "secret", "ada@example.com");
        let b = User::new("ada", "secret", "ada@example.com");
        assert_ne!(a.id, b.id);
    }
}
