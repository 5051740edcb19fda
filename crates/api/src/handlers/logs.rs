//! Handler for tailing the server log file.

use std::io::ErrorKind;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use vehicle_manager_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::validation::ValidatedQuery;
use crate::query::LogParams;
use crate::state::AppState;

/// Number of lines returned when `?lines=` is omitted.
pub const DEFAULT_LOG_LINES: usize = 100;

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub logs: String,
}

/// GET /api/logs?lines=
pub async fn read_logs(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<LogParams>,
) -> AppResult<Json<LogsResponse>> {
    let lines = params.lines.unwrap_or(DEFAULT_LOG_LINES);
    let path = &state.config.log_file;

    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(AppError::Core(CoreError::NotFoundBy {
                entity: "Log file",
                field: "path",
                value: path.display().to_string(),
            }));
        }
        Err(err) => {
            return Err(AppError::InternalError(format!(
                "Failed to read log file {}: {err}",
                path.display()
            )));
        }
    };

    Ok(Json(LogsResponse {
        logs: tail_lines(&contents, lines),
    }))
}

/// Return the last `count` lines of `text`, keeping their line endings.
pub fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].concat()
}
