use axum::routing::get;
use axum::Router;

use crate::handlers::logs;
use crate::state::AppState;

/// Routes mounted at `/logs`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(logs::read_logs))
}
