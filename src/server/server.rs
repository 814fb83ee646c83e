//! HTTP server core implementation

use crate::auth::{AuthSystem, CredentialStore, NoThrottle, RoleTable};
use crate::config::{Config, ServerConfig};
use crate::server::middleware::SessionContext;
use crate::server::routes::{self, LANDING_PATH};
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::{Result, VaultError};
use actix_web::http::header;
use actix_web::{App, HttpResponse, HttpServer as ActixHttpServer, web};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server: connect storage, run migrations, and wire
    /// the auth system over the built-in role table.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("creating HTTP server");

        let storage = StorageLayer::new(&config.database).await?;
        let store: Arc<dyn CredentialStore> = storage.database.clone();
        let auth = AuthSystem::new(
            &config.auth,
            store,
            RoleTable::builtin(),
            Arc::new(NoThrottle),
        )?;

        let state = AppState::new(config.clone(), auth, storage);

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub(crate) fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(SessionContext)
            .wrap(TracingLogger::default())
            .route("/", web::get().to(index))
            .route("/health", web::get().to(routes::health::health_check))
            .configure(routes::auth::configure_routes)
            .configure(routes::games::configure_routes)
            .configure(routes::consoles::configure_routes)
            .configure(routes::users::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);
        info!("starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .bind(&bind_addr)
            .map_err(|e| VaultError::Config(format!("failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| VaultError::Internal(format!("server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Application state (used by tests)
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Root path: send callers to the landing page
async fn index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LANDING_PATH))
        .finish()
}

/// Run the server with configuration loaded from `GAMEVAULT_CONFIG` (default
/// `config/gamevault.yaml`)
pub async fn run_server() -> Result<()> {
    let config_path = std::env::var("GAMEVAULT_CONFIG")
        .unwrap_or_else(|_| "config/gamevault.yaml".to_string());

    info!("loading configuration from {}", config_path);
    let config = Config::load(std::path::Path::new(&config_path))?;

    let server = HttpServer::new(&config).await?;
    server.start().await
}
