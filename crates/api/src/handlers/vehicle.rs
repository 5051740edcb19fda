//! Handlers for the `/vehicles` resource.
//!
//! Every write that names a brand checks that the brand exists before
//! touching the `vehicles` table, so a dangling `brand_id` is reported as a
//! 404 rather than surfacing as a foreign-key failure.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use sqlx::SqliteConnection;
use vehicle_manager_core::pagination::Page;
use vehicle_manager_core::types::DbId;
use vehicle_manager_db::models::vehicle::{
    CreateVehicle, PatchVehicle, UpdateVehicle, VehicleWithBrand,
};
use vehicle_manager_db::repositories::{BrandRepo, VehicleRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::session::DbSession;
use crate::middleware::validation::{ValidatedJson, ValidatedQuery};
use crate::query::VehicleListParams;

/// GET /api/vehicles?year=&brand_id=&color=&is_sold=
pub async fn list(
    mut db: DbSession,
    ValidatedQuery(params): ValidatedQuery<VehicleListParams>,
) -> AppResult<Json<Page<VehicleWithBrand>>> {
    let page = params.page_request()?;
    let filter = params.filter();
    tracing::info!(?filter, page = page.page(), size = page.size(), "Fetching vehicles");

    if let Some(brand_id) = filter.brand_id {
        ensure_brand_exists(&mut db, brand_id).await?;
    }

    let items = VehicleRepo::list(&mut db, &filter, page).await?;
    let total = VehicleRepo::count(&mut db, &filter).await?;
    Ok(Json(Page::new(items, total, page)))
}

/// GET /api/vehicles/{id}
pub async fn get_by_id(
    mut db: DbSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<VehicleWithBrand>> {
    let vehicle = VehicleRepo::find_by_id(&mut db, id)
        .await?
        .ok_or(AppError::not_found("Vehicle", id))?;
    Ok(Json(vehicle))
}

/// POST /api/vehicles
pub async fn create(
    mut db: DbSession,
    ValidatedJson(input): ValidatedJson<CreateVehicle>,
) -> AppResult<Json<VehicleWithBrand>> {
    ensure_brand_exists(&mut db, input.brand_id).await?;

    let vehicle = VehicleRepo::create(&mut db, &input).await?;
    tracing::info!(
        vehicle_id = vehicle.vehicle.id,
        brand_id = vehicle.brand.id,
        "Vehicle created"
    );
    Ok(Json(vehicle))
}

/// PUT /api/vehicles/{id}
///
/// Full replace: fields omitted from the body are reset to their defaults.
pub async fn update(
    mut db: DbSession,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateVehicle>,
) -> AppResult<Json<VehicleWithBrand>> {
    ensure_vehicle_exists(&mut db, id).await?;
    ensure_brand_exists(&mut db, input.brand_id).await?;

    let vehicle = VehicleRepo::update(&mut db, id, &input)
        .await?
        .ok_or(AppError::not_found("Vehicle", id))?;
    tracing::info!(vehicle_id = id, "Vehicle updated");
    Ok(Json(vehicle))
}

/// PATCH /api/vehicles/{id}
///
/// Merge: only keys present in the body are written.
pub async fn patch(
    mut db: DbSession,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<PatchVehicle>,
) -> AppResult<Json<VehicleWithBrand>> {
    ensure_vehicle_exists(&mut db, id).await?;
    if let Some(&brand_id) = input.brand_id.as_option() {
        ensure_brand_exists(&mut db, brand_id).await?;
    }

    let vehicle = VehicleRepo::patch(&mut db, id, &input)
        .await?
        .ok_or(AppError::not_found("Vehicle", id))?;
    tracing::info!(vehicle_id = id, "Vehicle patched");
    Ok(Json(vehicle))
}

/// DELETE /api/vehicles/{id}
pub async fn delete(mut db: DbSession, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if VehicleRepo::delete(&mut db, id).await? {
        tracing::info!(vehicle_id = id, "Vehicle deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::warn!(vehicle_id = id, "Vehicle not found");
        Err(AppError::not_found("Vehicle", id))
    }
}

// ---------------------------------------------------------------------------
// Existence checks
// ---------------------------------------------------------------------------

async fn ensure_brand_exists(conn: &mut SqliteConnection, brand_id: DbId) -> AppResult<()> {
    if BrandRepo::exists(conn, brand_id).await? {
        Ok(())
    } else {
        tracing::warn!(brand_id, "Brand not found");
        Err(AppError::not_found("Brand", brand_id))
    }
}

async fn ensure_vehicle_exists(conn: &mut SqliteConnection, id: DbId) -> AppResult<()> {
    if VehicleRepo::exists(conn, id).await? {
        Ok(())
    } else {
        tracing::warn!(vehicle_id = id, "Vehicle not found");
        Err(AppError::not_found("Vehicle", id))
    }
}
