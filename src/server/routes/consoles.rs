//! Console CRUD endpoints

use crate::core::models::ConsolePayload;
use crate::server::guard::{Require, perm};
use crate::server::routes::games::ListParams;
use crate::server::routes::{ApiResponse, Paged};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::info;

/// Configure console routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/consoles")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/model/{model}", web::get().to(by_model))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

/// List all consoles
pub async fn list(
    state: web::Data<AppState>,
    _auth: Require<perm::View>,
) -> Result<HttpResponse> {
    let consoles = state.storage.database.list_consoles().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(consoles)))
}

/// List consoles for one model, paginated
pub async fn by_model(
    state: web::Data<AppState>,
    _auth: Require<perm::View>,
    model: web::Path<String>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let (items, total) = state
        .storage
        .database
        .consoles_by_model(&model, params.per_page(), params.offset())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(Paged {
        items,
        page: params.page(),
        per_page: params.per_page(),
        total,
    })))
}

/// Add a console to the collection
pub async fn create(
    state: web::Data<AppState>,
    auth: Require<perm::Create>,
    payload: web::Json<ConsolePayload>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let console = state.storage.database.insert_console(&payload).await?;
    info!(user = %auth.principal.username, name = %console.name, "console added");

    Ok(HttpResponse::Created().json(ApiResponse::success(console)))
}

/// Update a console record
pub async fn update(
    state: web::Data<AppState>,
    auth: Require<perm::Edit>,
    id: web::Path<i32>,
    payload: web::Json<ConsolePayload>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let console = state.storage.database.update_console(*id, &payload).await?;
    info!(user = %auth.principal.username, id = %console.id, "console updated");

    Ok(HttpResponse::Ok().json(ApiResponse::success(console)))
}

/// Delete a console record
pub async fn delete(
    state: web::Data<AppState>,
    auth: Require<perm::Delete>,
    id: web::Path<i32>,
) -> Result<HttpResponse> {
    state.storage.database.delete_console(*id).await?;
    info!(user = %auth.principal.username, id = %id, "console deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::success(())))
}
