//! Health check handlers.

use axum::{response::Json, routing::get, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests
    #[schema(example = "ok")]
    pub status: &'static str,
    /// Current server time, RFC 3339 in UTC
    #[schema(example = "2025-11-01T10:30:00.000Z")]
    pub timestamp: String,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Liveness check; does not touch storage
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_health_check_reports_ok() {
        let Json(body) = health_check().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn test_health_timestamp_is_rfc3339_utc() {
        let Json(body) = health_check().await;
        let parsed = DateTime::parse_from_rfc3339(&body.timestamp).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert!(body.timestamp.ends_with('Z'));
    }
}
