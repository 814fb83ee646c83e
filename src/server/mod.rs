//! HTTP server, middleware, and routes

/// Per-operation permission guard
pub mod guard;
/// HTTP middleware
pub mod middleware;
/// Route handlers
pub mod routes;
/// Server setup and lifecycle
pub mod server;
/// Shared application state
pub mod state;

pub use server::{HttpServer, run_server};
pub use state::AppState;
