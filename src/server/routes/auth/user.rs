//! Current user endpoint

use crate::server::guard::Authenticated;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{Result, VaultError};
use actix_web::{HttpResponse, web};

/// Return the account bound to the current session
pub async fn current_user(
    state: web::Data<AppState>,
    auth: Authenticated,
) -> Result<HttpResponse> {
    let user = state
        .auth
        .store()
        .find_by_id(auth.principal.id)
        .await?
        .ok_or(VaultError::Unauthenticated)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(user.info())))
}
