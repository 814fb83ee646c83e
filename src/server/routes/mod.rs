//! HTTP route modules

/// Authentication endpoints
pub mod auth;
/// Console CRUD endpoints
pub mod consoles;
/// Game CRUD endpoints
pub mod games;
/// Health check endpoint
pub mod health;
/// User administration endpoints
pub mod users;

use serde::Serialize;

/// Default landing page for authenticated sessions
pub const LANDING_PATH: &str = "/games";

/// Standard API response structure
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Create an error response
    pub fn error(message: String) -> ApiResponse<T> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// One page of a listing
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}
