//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    CheckStatus, ComponentStatus, HealthChecks, HealthResponse, ServiceStatus,
};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Admin store reachable
/// - **503 Service Unavailable**: Admin store unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let healthy = db_check.is_ok();

    let response = HealthResponse {
        status: if healthy {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { database: db_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    if state.login_service.is_store_healthy().await {
        CheckStatus {
            status: ComponentStatus::Ok,
            message: "Connected",
        }
    } else {
        CheckStatus {
            status: ComponentStatus::Error,
            message: "Database unreachable",
        }
    }
}
