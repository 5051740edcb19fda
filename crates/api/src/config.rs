use std::path::PathBuf;

/// `EnvFilter` directive used when `RUST_LOG` is unset. Covers the HTTP layer
/// and the persistence crate, whose transaction rollbacks log at `error`.
pub const DEFAULT_LOG_FILTER: &str =
    "vehicle_manager_api=debug,vehicle_manager_db=debug,tower_http=debug";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8005`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Path prefix for the resource routes (default: `/api`).
    pub api_prefix: String,
    /// File the log layer appends to and `/logs` reads from.
    pub log_file: PathBuf,
    /// SQLite connection URL.
    pub database_url: String,
    /// Upper bound on pooled connections (default: `5`).
    pub db_max_connections: u32,
    /// Insert the default brand catalogue at startup (default: `false`).
    pub seed_on_startup: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `8005`                  |
    /// | `CORS_ORIGINS`         | (none)                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `API_PREFIX`           | `/api`                  |
    /// | `LOG_FILE`             | `app.log`               |
    /// | `DATABASE_URL`         | `sqlite://vehicles.db`  |
    /// | `DB_MAX_CONNECTIONS`   | `5`                     |
    /// | `SEED_ON_STARTUP`      | `false`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8005".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_cors_origins(&std::env::var("CORS_ORIGINS").unwrap_or_default());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let api_prefix =
            normalize_prefix(&std::env::var("API_PREFIX").unwrap_or_else(|_| "/api".into()));

        let log_file = std::env::var("LOG_FILE")
            .unwrap_or_else(|_| "app.log".into())
            .into();

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://vehicles.db".into());

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let seed_on_startup: bool = std::env::var("SEED_ON_STARTUP")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SEED_ON_STARTUP must be true or false");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            api_prefix,
            log_file,
            database_url,
            db_max_connections,
            seed_on_startup,
        }
    }

    /// Whether any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Split a comma-separated origin list. `*` is kept as-is; other entries
/// that do not look like an `http(s)` URL are dropped.
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
    if raw.trim() == "*" {
        return vec!["*".to_string()];
    }
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| s.starts_with("http"))
        .collect()
}

/// Ensure a leading `/` and strip trailing ones. `""` and `"/"` both map to
/// `""`, meaning routes are mounted at the root.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
