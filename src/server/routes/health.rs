//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tracing::debug;

/// Health status payload
#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    database: bool,
    version: &'static str,
}

/// Liveness probe. Public: requires no session.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("health check requested");

    let database = state.storage.database.health_check().await.is_ok();

    let status = HealthStatus {
        status: if database { "healthy" } else { "degraded" },
        database,
        version: env!("CARGO_PKG_VERSION"),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(status)))
}
