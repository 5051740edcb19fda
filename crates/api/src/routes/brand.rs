//! Route definitions for the `/brands` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::brand;
use crate::state::AppState;

/// Routes mounted at `/brands`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /resolve?name=    -> resolve
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(brand::list).post(brand::create))
        .route("/resolve", get(brand::resolve))
        .route("/{id}", delete(brand::delete))
}
