//! Request-scoped database session extractor.

use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};

use crate::error::AppError;
use crate::state::AppState;

/// A pooled connection held for the lifetime of one request.
///
/// Acquired before the handler runs and returned to the pool when the
/// extractor is dropped, on success and error paths alike. Repositories take
/// `&mut SqliteConnection`, which `&mut DbSession` derefs to:
///
/// ```ignore
/// async fn handler(mut db: DbSession) -> AppResult<Json<Vec<Brand>>> {
///     let brands = BrandRepo::list(&mut db, PageRequest::default()).await?;
///     Ok(Json(brands))
/// }
/// ```
pub struct DbSession(pub PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        Ok(DbSession(conn))
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
