pub mod brand;
pub mod health;
pub mod logs;
pub mod vehicle;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted under the configured prefix.
///
/// Route hierarchy:
///
/// ```text
/// /brands                    list, create
/// /brands/resolve            case-insensitive lookup by name
/// /brands/{id}               delete (cascades to vehicles)
///
/// /vehicles                  list (filterable), create
/// /vehicles/{id}             get, replace, patch, delete
///
/// /logs                      tail of the server log file
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/brands", brand::router())
        .nest("/vehicles", vehicle::router())
        .nest("/logs", logs::router())
}
