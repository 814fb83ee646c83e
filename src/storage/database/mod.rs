//! Record store over SeaORM
//!
//! One `Database` type serves both backends: a local SQLite file and a
//! remote managed PostgreSQL instance, selected by the connection URL.

mod connection;
/// Console record operations
mod console_ops;
/// Database entities
pub mod entities;
/// Game record operations
mod game_ops;
/// Schema migrations
pub mod migration;
/// User record operations
mod user_ops;

pub use connection::{Database, DatabaseBackendType};
pub use game_ops::GameQuery;
