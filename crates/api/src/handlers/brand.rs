//! Handlers for the `/brands` resource.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use vehicle_manager_core::error::CoreError;
use vehicle_manager_core::pagination::Page;
use vehicle_manager_core::types::DbId;
use vehicle_manager_db::models::brand::{Brand, CreateBrand};
use vehicle_manager_db::repositories::BrandRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::session::DbSession;
use crate::middleware::validation::{ValidatedJson, ValidatedQuery};
use crate::query::{PaginationParams, ResolveBrandParams};

/// GET /api/brands
pub async fn list(
    mut db: DbSession,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> AppResult<Json<Page<Brand>>> {
    let page = params.page_request()?;
    tracing::info!(page = page.page(), size = page.size(), "Fetching brands");

    let items = BrandRepo::list(&mut db, page).await?;
    let total = BrandRepo::count(&mut db).await?;
    Ok(Json(Page::new(items, total, page)))
}

/// GET /api/brands/resolve?name=
///
/// Case-insensitive exact match on the brand name.
pub async fn resolve(
    mut db: DbSession,
    ValidatedQuery(params): ValidatedQuery<ResolveBrandParams>,
) -> AppResult<Json<Brand>> {
    tracing::info!(name = %params.name, "Resolving brand by name");

    match BrandRepo::find_by_name_ci(&mut db, &params.name).await? {
        Some(brand) => Ok(Json(brand)),
        None => {
            tracing::warn!(name = %params.name, "Brand not found");
            Err(AppError::Core(CoreError::NotFoundBy {
                entity: "Brand",
                field: "name",
                value: params.name,
            }))
        }
    }
}

/// POST /api/brands
pub async fn create(
    mut db: DbSession,
    ValidatedJson(input): ValidatedJson<CreateBrand>,
) -> AppResult<Json<Brand>> {
    let brand = BrandRepo::create(&mut db, &input).await?;
    tracing::info!(brand_id = brand.id, name = %brand.name, "Brand created");
    Ok(Json(brand))
}

/// DELETE /api/brands/{id}
///
/// Removes the brand's vehicles as well.
pub async fn delete(mut db: DbSession, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if BrandRepo::find_by_id(&mut db, id).await?.is_none() {
        tracing::warn!(brand_id = id, "Brand not found");
        return Err(AppError::not_found("Brand", id));
    }

    if BrandRepo::delete(&mut db, id).await? {
        tracing::info!(brand_id = id, "Brand deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Brand", id))
    }
}
