//! System/health API handlers.
//!
//! # Purpose and responsibility
//! Provides lightweight endpoints for service metadata and health checks.
//!
//! # Key invariants and assumptions
//! - Health checks must be fast and side-effect free.
//! - Both routes sit outside the protected prefixes and answer anonymously.
use crate::api::types::{HealthStatus, SystemInfo};
use crate::app::AppState;
use axum::Json;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/v1/system/info",
    tag = "system",
    responses(
        (status = 200, description = "Service identity", body = SystemInfo)
    )
)]
/// Return console identity.
///
/// # Errors
/// - Does not return errors.
pub(crate) async fn system_info(State(state): State<AppState>) -> Json<SystemInfo> {
    Json(SystemInfo {
        service_name: state.service_name.clone(),
        api_version: state.api_version.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/v1/system/health",
    tag = "system",
    responses(
        (status = 200, description = "Console health", body = HealthStatus)
    )
)]
/// Return console health status.
///
/// The console has no backing services to probe; a response means the
/// process is serving.
pub(crate) async fn system_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}
