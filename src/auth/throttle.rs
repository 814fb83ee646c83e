//! Login throttling seam
//!
//! Brute-force throttling is a separate collaborator keyed by origin, not
//! part of the authentication state machine. The shipped implementation
//! performs no throttling; deployments that need it supply their own
//! [`LoginThrottle`].

use crate::utils::error::Result;

/// Collaborator consulted before any credential work on a login attempt
pub trait LoginThrottle: Send + Sync {
    /// Return `Err(VaultError::Throttled)` to reject the attempt outright
    fn check(&self, origin: &str) -> Result<()>;

    /// Record a failed attempt for the origin
    fn record_failure(&self, origin: &str);

    /// Record a successful attempt for the origin
    fn record_success(&self, origin: &str);
}

/// No-op throttle
#[derive(Debug, Default, Clone, Copy)]
pub struct NoThrottle;

impl LoginThrottle for NoThrottle {
    fn check(&self, _origin: &str) -> Result<()> {
        Ok(())
    }

    fn record_failure(&self, _origin: &str) {}

    fn record_success(&self, _origin: &str) {}
}
