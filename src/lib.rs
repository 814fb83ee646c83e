//! # GameVault
//!
//! Inventory management service for a personal collection of video games and
//! consoles. Clients authenticate with a session cookie; every protected
//! operation is gated by a role-based permission check (`admin`, `editor`,
//! `viewer` over `view`/`create`/`edit`/`delete`/`manage_users`). Records
//! live in a local SQLite file or a remote managed PostgreSQL database
//! behind one storage layer.
//!
//! Accounts are provisioned with the `create-user` binary; there is no
//! self-registration.

/// Authentication and authorization
pub mod auth;
/// Service configuration
pub mod config;
/// Core domain types
pub mod core;
/// HTTP server, middleware, and routes
pub mod server;
/// Storage layer
pub mod storage;
/// Shared utilities
pub mod utils;

pub use config::Config;
pub use utils::error::{Result, VaultError};
