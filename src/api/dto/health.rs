//! Body of `GET /health`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// The admin store is the only dependency login needs.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: ComponentStatus,
    pub message: &'static str,
}

impl CheckStatus {
    pub fn is_ok(&self) -> bool {
        self.status == ComponentStatus::Ok
    }
}
