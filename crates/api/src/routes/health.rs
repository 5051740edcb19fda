//! Root-level liveness and readiness check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use vehicle_manager_db::DbStatus;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database is reachable and fully migrated, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DbStatus,
}

/// GET /health
///
/// Answers 503 while the database is unreachable or behind the embedded
/// migrations, so a load balancer holds traffic until startup finishes.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = vehicle_manager_db::status(&state.pool).await;

    let (code, status) = if database.is_healthy() {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!(?database, "Health check degraded");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

/// Mounted at the root, outside the API prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
