//! Credential store contract
//!
//! The auth system is backend-agnostic: it talks to user records through
//! this trait, which the database layer implements for both the local and
//! the remote backend. Tests substitute an in-memory store.

use crate::core::models::{NewUser, Role, User};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// User record operations required by authentication and user management
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user by exact, case-sensitive username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Look up a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Insert a new user. Username uniqueness is enforced by the store's
    /// unique constraint; a violation surfaces as
    /// [`VaultError::DuplicateUsername`](crate::utils::error::VaultError::DuplicateUsername).
    async fn insert_user(&self, user: NewUser) -> Result<User>;

    /// Reassign a user's role
    async fn update_role(&self, id: Uuid, role: Role) -> Result<()>;

    /// Record a successful login timestamp
    async fn record_login(&self, id: Uuid) -> Result<()>;

    /// List all users
    async fn list_users(&self) -> Result<Vec<User>>;
}
