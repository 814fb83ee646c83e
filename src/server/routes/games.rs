//! Game CRUD endpoints
//!
//! Each handler declares the single permission it requires through the
//! [`Require`] guard; the guard is the only gate between a request and the
//! handler body.

use crate::core::models::GamePayload;
use crate::server::guard::{Require, perm};
use crate::server::routes::{ApiResponse, Paged};
use crate::server::state::AppState;
use crate::storage::GameQuery;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

const DEFAULT_PER_PAGE: u64 = 50;
const MAX_PER_PAGE: u64 = 200;

/// Listing query parameters
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive search over title, genre, and platform
    pub q: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl ListParams {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
    }

    pub fn offset(&self) -> u64 {
        (self.page() - 1) * self.per_page()
    }
}

/// Configure game routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/games")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/platform/{platform}", web::get().to(by_platform))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

/// List games, optionally filtered by a search string
pub async fn list(
    state: web::Data<AppState>,
    _auth: Require<perm::View>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let query = GameQuery {
        search: params.q.clone(),
        limit: params.per_page(),
        offset: params.offset(),
    };

    let games = state.storage.database.list_games(&query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(games)))
}

/// List games for one platform, paginated
pub async fn by_platform(
    state: web::Data<AppState>,
    _auth: Require<perm::View>,
    platform: web::Path<String>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let (items, total) = state
        .storage
        .database
        .games_by_platform(&platform, params.per_page(), params.offset())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(Paged {
        items,
        page: params.page(),
        per_page: params.per_page(),
        total,
    })))
}

/// Add a game to the collection
pub async fn create(
    state: web::Data<AppState>,
    auth: Require<perm::Create>,
    payload: web::Json<GamePayload>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let game = state.storage.database.insert_game(&payload).await?;
    info!(user = %auth.principal.username, title = %game.title, "game added");

    Ok(HttpResponse::Created().json(ApiResponse::success(game)))
}

/// Update a game record
pub async fn update(
    state: web::Data<AppState>,
    auth: Require<perm::Edit>,
    id: web::Path<i32>,
    payload: web::Json<GamePayload>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let game = state.storage.database.update_game(*id, &payload).await?;
    info!(user = %auth.principal.username, id = %game.id, "game updated");

    Ok(HttpResponse::Ok().json(ApiResponse::success(game)))
}

/// Delete a game record
pub async fn delete(
    state: web::Data<AppState>,
    auth: Require<perm::Delete>,
    id: web::Path<i32>,
) -> Result<HttpResponse> {
    state.storage.database.delete_game(*id).await?;
    info!(user = %auth.principal.username, id = %id, "game deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::success(())))
}
