//! DTOs for the admin login endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::SessionToken;

/// Message returned alongside a freshly issued token.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully";

/// Credentials submitted by the login form.
///
/// Absent fields deserialize as empty strings and are then rejected by
/// validation with the generic invalid-credential response.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Successful login response.
///
/// Failures are rendered by [`crate::error::AppError`] with the same
/// `success`/`message` fields and no token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub message: String,
}

impl LoginResponse {
    pub fn success(token: SessionToken) -> Self {
        Self {
            success: true,
            token: token.into_inner(),
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
        }
    }
}
