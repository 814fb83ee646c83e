//! Error types for the vault service

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the vault service
pub type Result<T> = std::result::Result<T, VaultError>;

/// Main error type for the vault service
#[derive(Error, Debug)]
pub enum VaultError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Bad username/password pair. Never says which half was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No session is bound to the request
    #[error("Authentication required")]
    Unauthenticated,

    /// A session exists but the role lacks the required permission
    #[error("Insufficient permissions")]
    Unauthorized,

    /// Store-level uniqueness violation on user provisioning
    #[error("Username is already taken")]
    DuplicateUsername,

    /// Store-level uniqueness violation on a console serial number
    #[error("A console with this serial number already exists")]
    DuplicateSerial,

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Too many login attempts (throttle collaborator)
    #[error("Too many login attempts, try again later")]
    Throttled,

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Login entry point that unauthenticated requests are redirected to
pub const LOGIN_PATH: &str = "/auth/login";

impl ResponseError for VaultError {
    fn status_code(&self) -> StatusCode {
        match self {
            VaultError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            VaultError::Unauthenticated => StatusCode::SEE_OTHER,
            VaultError::Unauthorized => StatusCode::FORBIDDEN,
            VaultError::DuplicateUsername | VaultError::DuplicateSerial => StatusCode::CONFLICT,
            VaultError::Validation(_) => StatusCode::BAD_REQUEST,
            VaultError::NotFound(_) => StatusCode::NOT_FOUND,
            VaultError::Throttled => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Backend details are logged, never surfaced to the caller.
            VaultError::Database(e) => {
                tracing::error!("database error: {}", e);
                "Database operation failed".to_string()
            }
            VaultError::Crypto(e) => {
                tracing::error!("crypto error: {}", e);
                "Authentication error".to_string()
            }
            VaultError::Internal(e) | VaultError::Config(e) => {
                tracing::error!("internal error: {}", e);
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            success: false,
            error: message,
        };

        // Anonymous callers are sent to the login entry point; everything
        // else is answered in place.
        if matches!(self, VaultError::Unauthenticated) {
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .json(body)
        } else {
            HttpResponse::build(self.status_code()).json(body)
        }
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
