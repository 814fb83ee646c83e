//! HTTP middleware

/// Helper functions for middleware
pub mod helpers;
/// Session resolution middleware
pub mod session;

pub use helpers::extract_session_token;
pub use session::SessionContext;
