//! Session teardown endpoint

use crate::server::middleware::extract_session_token;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::cookie::Cookie;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

/// User logout endpoint. Logging out an anonymous session is a no-op
/// success.
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    if let Some(token) = extract_session_token(req.headers(), &state.config.auth.cookie_name) {
        state.auth.logout(&token);
        info!("session cleared");
    }

    let mut removal = Cookie::new(state.config.auth.cookie_name.clone(), "");
    removal.set_path("/");
    removal.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(removal)
        .json(ApiResponse::success(())))
}
