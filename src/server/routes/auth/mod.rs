//! Authentication endpoints

mod login;
mod models;
mod session;
mod user;

pub use login::login;
pub use models::{LoginRequest, LoginResponse};
pub use session::logout;
pub use user::current_user;

use actix_web::web;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/me", web::get().to(current_user)),
    );
}
