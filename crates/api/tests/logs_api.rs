//! Integration tests for the `/logs` endpoint.

mod common;

use std::io::Write;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn missing_log_file_returns_404() {
    let pool = common::test_pool().await;
    let dir = tempfile::tempdir().unwrap();
    let mut config = common::test_config();
    config.log_file = dir.path().join("absent.log");

    let app = common::build_test_app_with_config(pool, config);
    let response = get(app, "/api/logs").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("absent.log"));
}

#[tokio::test]
async fn returns_requested_tail_of_log_file() {
    let pool = common::test_pool().await;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for i in 1..=5 {
        writeln!(file, "line {i}").unwrap();
    }
    let mut config = common::test_config();
    config.log_file = file.path().to_path_buf();

    let app = common::build_test_app_with_config(pool.clone(), config.clone());
    let response = get(app, "/api/logs?lines=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["logs"], "line 4\nline 5\n");

    let app = common::build_test_app_with_config(pool, config);
    let body = body_json(get(app, "/api/logs").await).await;
    assert_eq!(body["logs"].as_str().unwrap().lines().count(), 5);
}

#[tokio::test]
async fn negative_line_count_returns_422() {
    let pool = common::test_pool().await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/logs?lines=-3").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
