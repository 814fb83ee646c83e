//! Authentication and authorization
//!
//! [`AuthSystem`] owns the login/logout state machine, the session table,
//! the password hasher, and the RBAC engine. It reaches user records only
//! through the [`CredentialStore`] trait, so it is agnostic to which storage
//! backend is configured.

pub mod password;
pub mod rbac;
pub mod session;
pub mod store;
#[cfg(test)]
mod tests;
pub mod throttle;

pub use password::Hasher;
pub use rbac::{Access, Permission, RbacSystem, RoleTable};
pub use session::SessionManager;
pub use store::CredentialStore;
pub use throttle::{LoginThrottle, NoThrottle};

use crate::config::AuthConfig;
use crate::core::models::User;
use crate::utils::error::{Result, VaultError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// A freshly established session
#[derive(Debug, Clone)]
pub struct LoginSession {
    /// Opaque session token to hand back to the client
    pub token: String,
    /// The authenticated account
    pub user: User,
}

/// Main authentication system
pub struct AuthSystem {
    store: Arc<dyn CredentialStore>,
    sessions: SessionManager,
    hasher: Hasher,
    rbac: RbacSystem,
    throttle: Arc<dyn LoginThrottle>,
    /// Digest verified against when a username does not exist, so a miss
    /// costs the same as a password mismatch.
    decoy_hash: String,
}

impl AuthSystem {
    /// Create an authentication system over the given store and role table
    pub fn new(
        config: &AuthConfig,
        store: Arc<dyn CredentialStore>,
        role_table: RoleTable,
        throttle: Arc<dyn LoginThrottle>,
    ) -> Result<Self> {
        let hasher = Hasher::new(&config.argon2)?;
        let decoy_hash = hasher.hash(&uuid::Uuid::new_v4().to_string())?;

        Ok(Self {
            store,
            sessions: SessionManager::new(Duration::from_secs(config.session_ttl_secs)),
            hasher,
            rbac: RbacSystem::new(role_table),
            throttle,
            decoy_hash,
        })
    }

    /// Attempt a login. On success binds a session and returns its token.
    ///
    /// A missing username and a wrong password produce the same
    /// [`VaultError::InvalidCredentials`] outcome, in message and in cost.
    pub async fn login(&self, username: &str, password: &str, origin: &str) -> Result<LoginSession> {
        self.throttle.check(origin)?;

        // Local validation, not a store lookup.
        if username.is_empty() || password.is_empty() {
            return Err(VaultError::InvalidCredentials);
        }

        let Some(user) = self.store.find_by_username(username).await? else {
            let _ = self.hasher.verify(password, &self.decoy_hash);
            self.throttle.record_failure(origin);
            return Err(VaultError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &user.password_hash) {
            self.throttle.record_failure(origin);
            return Err(VaultError::InvalidCredentials);
        }

        self.throttle.record_success(origin);

        // Best effort; a failed timestamp update must not fail the login.
        if let Err(e) = self.store.record_login(user.id).await {
            warn!("failed to record login time: {}", e);
        }

        let token = self.sessions.bind(user.id);
        info!(user = %user.username, "user logged in");

        Ok(LoginSession { token, user })
    }

    /// Tear down a session. Logging out an unknown or already-cleared token
    /// is a no-op success.
    pub fn logout(&self, token: &str) {
        self.sessions.clear(token);
    }

    /// Resolve a session token to its account.
    ///
    /// The account is re-read from the store on every call so role changes
    /// take effect on the next request. A token whose account has been
    /// removed out-of-band is cleared.
    pub async fn resolve(&self, token: &str) -> Result<Option<User>> {
        let Some(user_id) = self.sessions.resolve(token) else {
            return Ok(None);
        };

        let user = self.store.find_by_id(user_id).await?;
        if user.is_none() {
            self.sessions.clear(token);
        }
        Ok(user)
    }

    /// The RBAC engine
    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }

    /// The credential store
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// The session table
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// The password hasher
    pub fn hasher(&self) -> &Hasher {
        &self.hasher
    }
}
