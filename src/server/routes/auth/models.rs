//! Request and response models for authentication endpoints

use crate::core::models::UserInfo;
use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response body. The session token itself travels in the cookie.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: UserInfo,
}
