//! User principal and role types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed role enumeration.
///
/// The store persists roles as strings; anything that does not parse back
/// into one of these variants is treated as a role with zero permissions,
/// never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Parse a stored role string. Unknown strings yield `None`.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "editor" => Some(Role::Editor),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }

    /// The canonical stored form
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User ID
    pub id: Uuid,
    /// Username (unique, case-sensitive)
    pub username: String,
    /// PHC-format password digest. Never serialized or logged.
    pub password_hash: String,
    /// Stored role string
    pub role: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last successful login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// The parsed role, if the stored string is recognized
    pub fn parsed_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Public view of this account
    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
            role: self.role.clone(),
            last_login_at: self.last_login_at,
        }
    }

    /// The principal this account resolves to on a request
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }
}

/// A user account to be provisioned. Roles are typed here so only valid
/// roles can ever be written through the application.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// Public, serializable view of a user. Excludes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// The authenticated identity attached to a request after session
/// resolution. Carries the role as stored so a reassignment takes effect on
/// the very next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl Principal {
    /// The parsed role, if recognized
    pub fn parsed_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_storage_form() {
        for role in [Role::Admin, Role::Editor, Role::Viewer] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn unknown_role_string_parses_to_none() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn user_info_omits_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            password_hash: "$argon2id$secret".into(),
            role: "editor".into(),
            created_at: Utc::now(),
            last_login_at: None,
        };
        let serialized = serde_json::to_string(&user.info()).unwrap();
        assert!(!serialized.contains("argon2"));
        assert!(serialized.contains("alice"));
    }
}
