#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use vehicle_manager_api::config::ServerConfig;
use vehicle_manager_api::router::build_app_router;
use vehicle_manager_api::state::AppState;
use vehicle_manager_db::DbPool;

/// Build a test `ServerConfig` with safe defaults.
///
/// Routes are mounted under `/api`; the log file points at a path that does
/// not exist unless a test overrides it.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        api_prefix: "/api".to_string(),
        log_file: PathBuf::from("target/does-not-exist.log"),
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        seed_on_startup: false,
    }
}

/// Fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = vehicle_manager_db::connect_in_memory()
        .await
        .expect("in-memory pool");
    vehicle_manager_db::run_migrations(&pool)
        .await
        .expect("migrations");
    pool
}

/// Build the full application router over `pool` with [`test_config`].
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

pub fn build_test_app_with_config(pool: DbPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a brand through the API and return its id.
pub async fn create_brand(pool: &DbPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/brands", serde_json::json!({ "name": name })).await;
    assert_eq!(response.status(), 200, "creating brand {name}");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a vehicle through the API and return the response body.
pub async fn create_vehicle(pool: &DbPool, body: serde_json::Value) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/vehicles", body).await;
    assert_eq!(response.status(), 200, "creating vehicle");
    body_json(response).await
}
