//! User login endpoint

use crate::core::models::Principal;
use crate::server::routes::{ApiResponse, LANDING_PATH};
use crate::server::state::AppState;
use crate::utils::error::{Result, VaultError};
use actix_web::cookie::{Cookie, SameSite, time};
use actix_web::http::header;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use tracing::info;

use super::models::{LoginRequest, LoginResponse};

/// User login endpoint
pub async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    // An already-authenticated session is bounced to the landing page
    // instead of being allowed to switch identity in place.
    if req.extensions().get::<Principal>().is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, LANDING_PATH))
            .json(ApiResponse::success(())));
    }

    let origin = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    let session = state.auth.login(&body.username, &body.password, &origin).await?;

    let cookie = session_cookie(state.get_ref(), session.token)
        .map_err(|e| VaultError::Internal(format!("failed to build session cookie: {}", e)))?;

    info!(user = %session.user.username, "session established");

    Ok(HttpResponse::Ok().cookie(cookie).json(ApiResponse::success(
        LoginResponse {
            user: session.user.info(),
        },
    )))
}

fn session_cookie(
    state: &AppState,
    token: String,
) -> std::result::Result<Cookie<'static>, std::num::TryFromIntError> {
    let max_age = time::Duration::seconds(i64::try_from(state.config.auth.session_ttl_secs)?);

    Ok(Cookie::build(state.config.auth.cookie_name.clone(), token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .finish())
}
