/// Console entity module
pub mod console;
/// Game entity module
pub mod game;
/// User entity module
pub mod user;

pub use console::Entity as Console;
pub use game::Entity as Game;
pub use user::Entity as User;
