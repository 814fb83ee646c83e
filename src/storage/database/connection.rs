use crate::config::DatabaseConfig;
use crate::utils::error::{Result, VaultError};
use sea_orm::{ConnectOptions, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::migration::Migrator;

/// Record store backend indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    /// Local file-based store
    Sqlite,
    /// Remote managed store
    Postgres,
}

/// SeaORM-backed record store
#[derive(Debug, Clone)]
pub struct Database {
    pub(super) db: DatabaseConnection,
    backend_type: DatabaseBackendType,
}

const SQLITE_FALLBACK_URL: &str = "sqlite://data/gamevault.db?mode=rwc";

impl Database {
    /// Connect to the configured backend. When the remote store is
    /// unreachable and fallback is enabled, degrade to the local SQLite
    /// file instead of refusing to start.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        match Self::try_connect(&config.url, config).await {
            Ok(db) => {
                let backend_type = Self::backend_for_url(&config.url);
                info!("database connection established ({:?})", backend_type);
                Ok(Self { db, backend_type })
            }
            Err(e) => {
                let is_remote = config.url.starts_with("postgres://")
                    || config.url.starts_with("postgresql://");
                if is_remote && config.fallback_to_sqlite {
                    warn!(
                        "remote database connection failed: {}. Falling back to SQLite",
                        e
                    );
                    Self::fallback_to_sqlite(config).await
                } else {
                    Err(e)
                }
            }
        }
    }

    fn backend_for_url(url: &str) -> DatabaseBackendType {
        if url.starts_with("sqlite") {
            DatabaseBackendType::Sqlite
        } else {
            DatabaseBackendType::Postgres
        }
    }

    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        if let Some(path) = url
            .strip_prefix("sqlite://")
            .map(|rest| rest.split('?').next().unwrap_or(rest))
        {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        VaultError::Config(format!("failed to create data directory: {}", e))
                    })?;
                }
            }
        }

        let mut options = ConnectOptions::new(url.to_string());
        options
            .max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        sea_orm::Database::connect(options)
            .await
            .map_err(VaultError::Database)
    }

    async fn fallback_to_sqlite(config: &DatabaseConfig) -> Result<Self> {
        info!("connecting to fallback store: {}", SQLITE_FALLBACK_URL);
        let db = Self::try_connect(SQLITE_FALLBACK_URL, config).await?;
        Ok(Self {
            db,
            backend_type: DatabaseBackendType::Sqlite,
        })
    }

    /// The active backend
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run schema migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("running database migrations");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("migration failed: {}", e);
            VaultError::Database(e)
        })?;
        Ok(())
    }

    /// Check database connectivity
    pub async fn health_check(&self) -> Result<()> {
        debug!("performing database health check");
        self.db.ping().await.map_err(VaultError::Database)
    }

    /// The underlying connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
