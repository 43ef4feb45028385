//! Liveness endpoint.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `healthy` or `degraded`
    pub status: &'static str,
    /// Database reachability, omitted when the state carries no database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Report service health, pinging the database when one is attached.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let Some(db) = state.database.as_ref() else {
        return (
            StatusCode::OK,
            Json(HealthReport {
                status: "healthy",
                database: None,
            }),
        );
    };

    match db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthReport {
                status: "healthy",
                database: Some("up".to_string()),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthReport {
                    status: "degraded",
                    database: Some(format!("down: {}", e)),
                }),
            )
        }
    }
}
