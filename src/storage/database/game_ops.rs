use crate::core::models::game::{Game, GamePayload, normalize};
use crate::utils::error::{Result, VaultError};
use sea_orm::sea_query::{Condition, Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::debug;

use super::connection::Database;
use super::entities::{self, game};

/// Listing parameters for games
#[derive(Debug, Clone, Default)]
pub struct GameQuery {
    /// Case-insensitive substring matched against title, genre, and platform
    pub search: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl Database {
    /// List games, optionally filtered by a search string
    pub async fn list_games(&self, query: &GameQuery) -> Result<Vec<Game>> {
        let mut select = entities::Game::find().order_by_asc(game::Column::Title);

        if let Some(q) = query.search.as_deref().filter(|q| !q.is_empty()) {
            let pattern = format!("%{}%", q.to_lowercase());
            select = select.filter(
                Condition::any()
                    .add(lower(game::Column::Title).like(pattern.as_str()))
                    .add(lower(game::Column::Genre).like(pattern.as_str()))
                    .add(lower(game::Column::Platform).like(pattern.as_str())),
            );
        }

        if query.limit > 0 {
            select = select.limit(query.limit).offset(query.offset);
        }

        let models = select.all(&self.db).await?;
        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    /// List games for one platform with a total count for pagination.
    /// The platform argument is normalized before matching.
    pub async fn games_by_platform(
        &self,
        platform: &str,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Game>, u64)> {
        let select = entities::Game::find()
            .filter(game::Column::PlatformNormalized.eq(normalize(platform)));

        let total = select.clone().count(&self.db).await?;
        let models = select
            .order_by_asc(game::Column::Title)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await?;

        Ok((models.iter().map(|m| m.to_domain()).collect(), total))
    }

    /// Insert a game record
    pub async fn insert_game(&self, payload: &GamePayload) -> Result<Game> {
        debug!("inserting game: {}", payload.title);

        let active = game::ActiveModel {
            title: Set(payload.title.clone()),
            release_year: Set(payload.release_year),
            manufacturer: Set(payload.manufacturer.clone()),
            description: Set(payload.description.clone()),
            genre: Set(payload.genre.clone()),
            platform: Set(payload.platform.clone()),
            platform_normalized: Set(payload.platform_normalized()),
            score: Set(payload.score),
            complete_in_box: Set(payload.complete_in_box),
            condition: Set(payload.condition.clone()),
            inventory: Set(payload.inventory),
            sealed: Set(payload.sealed),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        Ok(model.to_domain())
    }

    /// Update a game record by id
    pub async fn update_game(&self, id: i32, payload: &GamePayload) -> Result<Game> {
        let model = entities::Game::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| VaultError::NotFound("game".into()))?;

        let mut active: game::ActiveModel = model.into();
        active.title = Set(payload.title.clone());
        active.release_year = Set(payload.release_year);
        active.manufacturer = Set(payload.manufacturer.clone());
        active.description = Set(payload.description.clone());
        active.genre = Set(payload.genre.clone());
        active.platform = Set(payload.platform.clone());
        active.platform_normalized = Set(payload.platform_normalized());
        active.score = Set(payload.score);
        active.complete_in_box = Set(payload.complete_in_box);
        active.condition = Set(payload.condition.clone());
        active.inventory = Set(payload.inventory);
        active.sealed = Set(payload.sealed);

        let model = active.update(&self.db).await?;
        Ok(model.to_domain())
    }

    /// Delete a game record by id
    pub async fn delete_game(&self, id: i32) -> Result<()> {
        let result = entities::Game::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(VaultError::NotFound("game".into()));
        }
        Ok(())
    }
}

/// LOWER(column) expression for case-insensitive matching
fn lower(column: game::Column) -> Expr {
    Expr::expr(Func::lower(Expr::col(column)))
}
