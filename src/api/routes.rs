//! API route configuration.

use crate::api::handlers::login_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /adminlogin` - Verify admin credentials and issue a session token
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/adminlogin", post(login_handler))
}
