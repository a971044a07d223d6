//! Handler for the admin login endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use validator::Validate;

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Verifies admin credentials and returns a session token.
///
/// # Endpoint
///
/// `POST /api/adminlogin`
///
/// # Request Body
///
/// ```json
/// { "email": "a@x.com", "password": "secret" }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "token": "7-a@x.com", "message": "Logged in successfully" }
/// ```
///
/// The body is parsed as JSON whatever `Content-Type` the client sends.
///
/// # Errors
///
/// - **400 Bad Request**: unknown email, wrong password, or empty field.
///   All cases carry the same message, `Invalid email or password.`
/// - **500 Internal Server Error**: unreadable body, data store or hashing
///   failure. The cause is logged, never returned.
pub async fn login_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let body = body.map_err(|e| AppError::internal(format!("Unreadable login body: {e}")))?;
    let payload: LoginRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::internal(format!("Malformed login body: {e}")))?;

    payload.validate()?;

    let token = state
        .login_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse::success(token)))
}
