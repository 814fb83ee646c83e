//! Storage layer

/// Record store module
pub mod database;

pub use database::{Database, DatabaseBackendType, GameQuery};

use crate::config::DatabaseConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// Storage layer owning the record store
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Record store
    pub database: Arc<Database>,
}

impl StorageLayer {
    /// Connect and migrate the configured backend
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("initializing storage layer");

        let database = Arc::new(Database::new(config).await?);
        database.migrate().await?;

        Ok(Self { database })
    }
}
