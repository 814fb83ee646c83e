//! In-process session table
//!
//! Maps opaque session tokens to user identities. Only the user id is bound
//! to the token; the principal (including its role) is re-resolved from the
//! record store on every request.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// One bound session
#[derive(Debug, Clone)]
struct SessionEntry {
    user_id: Uuid,
    expires_at: DateTime<Utc>,
}

/// Concurrent session token table with a fixed TTL
#[derive(Debug)]
pub struct SessionManager {
    sessions: DashMap<String, SessionEntry>,
    ttl: Duration,
}

impl SessionManager {
    /// Create a session manager with the given token lifetime
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            // An absurdly large configured TTL is capped rather than rejected.
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::days(365 * 100)),
        }
    }

    /// Bind a fresh token to a user. At most one principal is ever bound per
    /// token; tokens are random v4 UUIDs and never reused.
    pub fn bind(&self, user_id: Uuid) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(
            token.clone(),
            SessionEntry {
                user_id,
                expires_at: Utc::now()
                    .checked_add_signed(self.ttl)
                    .unwrap_or(chrono::DateTime::<Utc>::MAX_UTC),
            },
        );
        token
    }

    /// Resolve a token to the bound user id. Expired tokens are evicted and
    /// resolve as anonymous.
    pub fn resolve(&self, token: &str) -> Option<Uuid> {
        let entry = self.sessions.get(token)?;
        if entry.expires_at <= Utc::now() {
            drop(entry);
            self.sessions.remove(token);
            return None;
        }
        Some(entry.user_id)
    }

    /// Clear a token binding. Clearing an unknown or already-cleared token is
    /// a no-op.
    pub fn clear(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Drop every expired entry
    pub fn purge_expired(&self) {
        let now = Utc::now();
        self.sessions.retain(|_, entry| entry.expires_at > now);
    }

    /// Number of live bindings (includes not-yet-purged expired entries)
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no bindings exist
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    #[test]
    fn bind_then_resolve_returns_user() {
        let sessions = SessionManager::new(StdDuration::from_secs(60));
        let user_id = Uuid::new_v4();
        let token = sessions.bind(user_id);
        assert_eq!(sessions.resolve(&token), Some(user_id));
    }

    #[test]
    fn tokens_are_unique_per_bind() {
        let sessions = SessionManager::new(StdDuration::from_secs(60));
        let user_id = Uuid::new_v4();
        assert_ne!(sessions.bind(user_id), sessions.bind(user_id));
    }

    #[test]
    fn clear_is_idempotent() {
        let sessions = SessionManager::new(StdDuration::from_secs(60));
        let token = sessions.bind(Uuid::new_v4());
        sessions.clear(&token);
        sessions.clear(&token);
        sessions.clear("never-bound");
        assert_eq!(sessions.resolve(&token), None);
    }

    #[test]
    fn expired_token_resolves_anonymous_and_is_evicted() {
        let sessions = SessionManager::new(StdDuration::ZERO);
        let token = sessions.bind(Uuid::new_v4());
        assert_eq!(sessions.resolve(&token), None);
        assert!(sessions.is_empty());
    }

    #[test]
    fn purge_drops_only_expired_entries() {
        let expiring = SessionManager::new(StdDuration::ZERO);
        expiring.bind(Uuid::new_v4());
        expiring.purge_expired();
        assert!(expiring.is_empty());

        let living = SessionManager::new(StdDuration::from_secs(60));
        living.bind(Uuid::new_v4());
        living.purge_expired();
        assert_eq!(living.len(), 1);
    }

    #[test]
    fn unknown_token_is_anonymous() {
        let sessions = SessionManager::new(StdDuration::from_secs(60));
        assert_eq!(sessions.resolve("deadbeef"), None);
    }
}
