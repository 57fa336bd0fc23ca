//! User domain types.
//!
//! These types represent validated domain objects separate from database row
//! types. The password hash is deliberately absent: it is fetched separately
//! by the auth service and never serialized into a response.

use chrono::{DateTime, Utc};
use serde::Serialize;

use clearwell_core::{Email, UserId, UserRole};

/// A site user (domain type).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// User's email address (unique).
    pub email: Email,
    /// Account role.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_has_no_password_fields() {
        let user = User {
            id: UserId::new(1),
            name: "Admin".to_string(),
            email: Email::parse("admin@example.com").unwrap(),
            role: UserRole::Admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["role"], "ADMIN");
        assert!(json.get("createdAt").is_some());
    }
}
