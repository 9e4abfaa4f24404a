use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's authority level. Stored as the `admin` flag on the users table;
/// checked by the service layer, never by comparing usernames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    pub fn from_admin_flag(admin: bool) -> Self {
        if admin { Role::Admin } else { Role::Member }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// A registered user. The password hash never leaves the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub course_code: String,
    pub course_name: String,
    pub description: String,
}
