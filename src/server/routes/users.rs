//! User administration endpoints
//!
//! Accounts are provisioned out-of-band by the `create-user` binary; the web
//! surface only lists accounts and reassigns roles.

use crate::core::models::{Role, UserInfo};
use crate::server::guard::{Require, perm};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

/// Role reassignment body
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Role,
}

/// Configure user administration routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list))
            .route("/{id}/role", web::put().to(update_role)),
    );
}

/// List all accounts
pub async fn list(
    state: web::Data<AppState>,
    _auth: Require<perm::ManageUsers>,
) -> Result<HttpResponse> {
    let users = state.auth.store().list_users().await?;
    let infos: Vec<UserInfo> = users.iter().map(|u| u.info()).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(infos)))
}

/// Reassign an account's role. Takes effect on the target's next request.
pub async fn update_role(
    state: web::Data<AppState>,
    auth: Require<perm::ManageUsers>,
    id: web::Path<Uuid>,
    body: web::Json<UpdateRoleRequest>,
) -> Result<HttpResponse> {
    state.auth.store().update_role(*id, body.role).await?;
    info!(admin = %auth.principal.username, user = %id, role = %body.role, "role reassigned");

    Ok(HttpResponse::Ok().json(ApiResponse::success(())))
}
