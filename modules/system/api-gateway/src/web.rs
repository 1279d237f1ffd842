use std::sync::Arc;

use axum::Extension;
use chrono::{SecondsFormat, Utc};
use poc_api::prelude::*;
use serde::Serialize;

pub const GREETING: &str = "Hello from Jenkins POC!";

/// Version reported by `/health`.
#[derive(Debug, Clone)]
pub struct AppVersion(pub Arc<str>);

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub version: String,
}

pub async fn root() -> &'static str {
    GREETING
}

pub async fn health_check(
    Extension(AppVersion(version)): Extension<AppVersion>,
) -> JsonBody<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: version.to_string(),
    })
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> ApiError {
    ApiError::route_not_found()
}
