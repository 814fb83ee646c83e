//! Domain models
//!
//! Plain data types shared between the storage layer, the auth system, and
//! the HTTP routes.

/// Console records
pub mod console;
/// Game records
pub mod game;
/// Users, principals, and roles
pub mod user;

pub use console::{Console, ConsolePayload};
pub use game::{Game, GamePayload};
pub use user::{NewUser, Principal, Role, User, UserInfo};
