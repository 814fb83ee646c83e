//! Authentication flow tests against an in-memory credential store

use crate::auth::store::CredentialStore;
use crate::auth::throttle::{LoginThrottle, NoThrottle};
use crate::auth::{AuthSystem, RoleTable};
use crate::config::{Argon2Config, AuthConfig};
use crate::core::models::{NewUser, Role, User};
use crate::utils::error::{Result, VaultError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory store enforcing the same username uniqueness the database
/// schema does
#[derive(Default)]
struct MemoryStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(VaultError::DuplicateUsername);
        }
        let stored = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            role: user.role.as_str().to_string(),
            created_at: Utc::now(),
            last_login_at: None,
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn update_role(&self, id: Uuid, role: Role) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| VaultError::NotFound("user".into()))?;
        user.role = role.as_str().to_string();
        Ok(())
    }

    async fn record_login(&self, id: Uuid) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.last_login_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }
}

impl MemoryStore {
    fn remove(&self, id: Uuid) {
        self.users.lock().unwrap().retain(|u| u.id != id);
    }
}

fn fast_auth_config() -> AuthConfig {
    AuthConfig {
        session_ttl_secs: 3600,
        cookie_name: "session".into(),
        argon2: Argon2Config {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        },
    }
}

fn auth_over(store: Arc<MemoryStore>) -> AuthSystem {
    AuthSystem::new(
        &fast_auth_config(),
        store,
        RoleTable::builtin(),
        Arc::new(NoThrottle),
    )
    .unwrap()
}

async fn seed_user(auth: &AuthSystem, username: &str, password: &str, role: Role) -> User {
    let hash = auth.hasher().hash(password).unwrap();
    auth.store()
        .insert_user(NewUser {
            username: username.into(),
            password_hash: hash,
            role,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn login_binds_a_resolvable_session() {
    let auth = auth_over(Arc::new(MemoryStore::default()));
    let created = seed_user(&auth, "alice", "secret", Role::Editor).await;

    let session = auth.login("alice", "secret", "test").await.unwrap();
    assert_eq!(session.user.id, created.id);

    let resolved = auth.resolve(&session.token).await.unwrap().unwrap();
    assert_eq!(resolved.username, "alice");
    assert!(resolved.last_login_at.is_some());
}

#[tokio::test]
async fn missing_user_and_wrong_password_are_indistinguishable() {
    let auth = auth_over(Arc::new(MemoryStore::default()));
    seed_user(&auth, "alice", "secret", Role::Viewer).await;

    let missing = auth.login("nobody", "whatever", "test").await.unwrap_err();
    let mismatch = auth.login("alice", "wrong", "test").await.unwrap_err();

    assert!(matches!(missing, VaultError::InvalidCredentials));
    assert!(matches!(mismatch, VaultError::InvalidCredentials));
    assert_eq!(missing.to_string(), mismatch.to_string());
}

#[tokio::test]
async fn empty_credentials_fail_without_store_lookup() {
    let auth = auth_over(Arc::new(MemoryStore::default()));
    assert!(matches!(
        auth.login("", "secret", "test").await.unwrap_err(),
        VaultError::InvalidCredentials
    ));
    assert!(matches!(
        auth.login("alice", "", "test").await.unwrap_err(),
        VaultError::InvalidCredentials
    ));
}

#[tokio::test]
async fn username_match_is_case_sensitive() {
    let auth = auth_over(Arc::new(MemoryStore::default()));
    seed_user(&auth, "Alice", "secret", Role::Viewer).await;

    assert!(matches!(
        auth.login("alice", "secret", "test").await.unwrap_err(),
        VaultError::InvalidCredentials
    ));
}

#[tokio::test]
async fn logout_clears_the_session_and_is_idempotent() {
    let auth = auth_over(Arc::new(MemoryStore::default()));
    seed_user(&auth, "alice", "secret", Role::Viewer).await;

    let session = auth.login("alice", "secret", "test").await.unwrap();
    auth.logout(&session.token);
    assert!(auth.resolve(&session.token).await.unwrap().is_none());

    // Logging out an anonymous session is a no-op success.
    auth.logout(&session.token);
    auth.logout("never-a-token");
}

#[tokio::test]
async fn duplicate_username_is_rejected_and_one_row_survives() {
    let store = Arc::new(MemoryStore::default());
    let auth = auth_over(store.clone());

    seed_user(&auth, "alice", "first", Role::Viewer).await;
    let hash = auth.hasher().hash("second").unwrap();
    let err = auth
        .store()
        .insert_user(NewUser {
            username: "alice".into(),
            password_hash: hash,
            role: Role::Admin,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, VaultError::DuplicateUsername));
    let users = auth.store().list_users().await.unwrap();
    assert_eq!(users.iter().filter(|u| u.username == "alice").count(), 1);
    // The surviving row is the original.
    assert_eq!(users[0].role, "viewer");
}

#[tokio::test]
async fn role_change_is_visible_on_next_resolve() {
    let auth = auth_over(Arc::new(MemoryStore::default()));
    let created = seed_user(&auth, "alice", "secret", Role::Viewer).await;

    let session = auth.login("alice", "secret", "test").await.unwrap();
    auth.store()
        .update_role(created.id, Role::Admin)
        .await
        .unwrap();

    let resolved = auth.resolve(&session.token).await.unwrap().unwrap();
    assert_eq!(resolved.role, "admin");
}

#[tokio::test]
async fn session_for_a_removed_account_resolves_anonymous() {
    let store = Arc::new(MemoryStore::default());
    let auth = auth_over(store.clone());
    let created = seed_user(&auth, "alice", "secret", Role::Viewer).await;

    let session = auth.login("alice", "secret", "test").await.unwrap();
    store.remove(created.id);

    assert!(auth.resolve(&session.token).await.unwrap().is_none());
    // The stale binding was cleared, not just masked.
    assert!(auth.sessions().is_empty());
}

#[tokio::test]
async fn throttle_rejection_short_circuits_login() {
    struct AlwaysThrottled;
    impl LoginThrottle for AlwaysThrottled {
        fn check(&self, _origin: &str) -> Result<()> {
            Err(VaultError::Throttled)
        }
        fn record_failure(&self, _origin: &str) {}
        fn record_success(&self, _origin: &str) {}
    }

    let store = Arc::new(MemoryStore::default());
    let auth = AuthSystem::new(
        &fast_auth_config(),
        store,
        RoleTable::builtin(),
        Arc::new(AlwaysThrottled),
    )
    .unwrap();

    assert!(matches!(
        auth.login("alice", "secret", "test").await.unwrap_err(),
        VaultError::Throttled
    ));
}
