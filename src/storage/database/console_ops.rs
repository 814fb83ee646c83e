use crate::core::models::console::{Console, ConsolePayload};
use crate::core::models::game::normalize;
use crate::utils::error::{Result, VaultError};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr,
};
use tracing::debug;

use super::connection::Database;
use super::entities::{self, console};

impl Database {
    /// List all consoles
    pub async fn list_consoles(&self) -> Result<Vec<Console>> {
        let models = entities::Console::find()
            .order_by_asc(console::Column::Name)
            .all(&self.db)
            .await?;
        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    /// List consoles for one model with a total count for pagination.
    /// The model argument is normalized before matching.
    pub async fn consoles_by_model(
        &self,
        model: &str,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Console>, u64)> {
        let select = entities::Console::find()
            .filter(console::Column::ModelNormalized.eq(normalize(model)));

        let total = select.clone().count(&self.db).await?;
        let models = select
            .order_by_asc(console::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await?;

        Ok((models.iter().map(|m| m.to_domain()).collect(), total))
    }

    /// Insert a console record. Serial-number uniqueness is enforced by the
    /// store's constraint.
    pub async fn insert_console(&self, payload: &ConsolePayload) -> Result<Console> {
        debug!("inserting console: {}", payload.name);

        let active = console::ActiveModel {
            name: Set(payload.name.clone()),
            model: Set(payload.model.clone()),
            model_normalized: Set(payload.model_normalized()),
            release_year: Set(payload.release_year),
            manufacturer: Set(payload.manufacturer.clone()),
            serial_number_box: Set(payload.serial_number_box.clone()),
            serial_number_console: Set(payload.serial_number_console.clone()),
            complete_in_box: Set(payload.complete_in_box),
            condition: Set(payload.condition.clone()),
            inventory: Set(payload.inventory),
            sealed: Set(payload.sealed),
            ..Default::default()
        };

        match active.insert(&self.db).await {
            Ok(model) => Ok(model.to_domain()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(VaultError::DuplicateSerial),
                _ => Err(VaultError::Database(e)),
            },
        }
    }

    /// Update a console record by id
    pub async fn update_console(&self, id: i32, payload: &ConsolePayload) -> Result<Console> {
        let model = entities::Console::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| VaultError::NotFound("console".into()))?;

        let mut active: console::ActiveModel = model.into();
        active.name = Set(payload.name.clone());
        active.model = Set(payload.model.clone());
        active.model_normalized = Set(payload.model_normalized());
        active.release_year = Set(payload.release_year);
        active.manufacturer = Set(payload.manufacturer.clone());
        active.serial_number_box = Set(payload.serial_number_box.clone());
        active.serial_number_console = Set(payload.serial_number_console.clone());
        active.complete_in_box = Set(payload.complete_in_box);
        active.condition = Set(payload.condition.clone());
        active.inventory = Set(payload.inventory);
        active.sealed = Set(payload.sealed);

        match active.update(&self.db).await {
            Ok(model) => Ok(model.to_domain()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(VaultError::DuplicateSerial),
                _ => Err(VaultError::Database(e)),
            },
        }
    }

    /// Delete a console record by id
    pub async fn delete_console(&self, id: i32) -> Result<()> {
        let result = entities::Console::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(VaultError::NotFound("console".into()));
        }
        Ok(())
    }
}
