//! Vehicle entity model and DTOs.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use validator::{Validate, ValidationError, ValidationErrors};
use vehicle_manager_core::patch::Patch;
use vehicle_manager_core::types::{DbId, Timestamp};

use crate::models::brand::Brand;

const MODEL_MAX_LEN: usize = 100;
const COLOR_MAX_LEN: usize = 50;

/// A row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub model: String,
    pub brand_id: DbId,
    pub color: String,
    pub year: i32,
    pub description: Option<String>,
    pub is_sold: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A vehicle together with its owning brand.
///
/// Serializes flat, with the brand nested under `"brand"`.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleWithBrand {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub brand: Brand,
}

/// Decodes a `vehicles JOIN brands` row. The brand's columns are aliased
/// `brand_name` / `brand_created_at`; its id is the vehicle's `brand_id`.
impl<'r> FromRow<'r, SqliteRow> for VehicleWithBrand {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let vehicle = Vehicle::from_row(row)?;
        let brand = Brand {
            id: vehicle.brand_id,
            name: row.try_get("brand_name")?,
            created_at: row.try_get("brand_created_at")?,
        };
        Ok(Self { vehicle, brand })
    }
}

/// DTO for creating a new vehicle.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicle {
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    pub brand_id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub color: String,
    pub year: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_sold: bool,
}

/// DTO for a full replace (`PUT`).
///
/// Every mutable column is overwritten. Omitted `description` becomes `NULL`
/// and omitted `is_sold` becomes `false`; prior values are not kept.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVehicle {
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    pub brand_id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub color: String,
    pub year: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_sold: bool,
}

/// DTO for a partial update (`PATCH`). Only present keys are written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchVehicle {
    #[serde(default)]
    pub model: Patch<String>,
    #[serde(default)]
    pub brand_id: Patch<DbId>,
    #[serde(default)]
    pub color: Patch<String>,
    #[serde(default)]
    pub year: Patch<i32>,
    #[serde(default)]
    pub description: Patch<Option<String>>,
    #[serde(default)]
    pub is_sold: Patch<bool>,
}

impl Validate for PatchVehicle {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(model) = self.model.as_option() {
            if let Some(err) = length_error(model, MODEL_MAX_LEN) {
                errors.add("model", err);
            }
        }
        if let Some(color) = self.color.as_option() {
            if let Some(err) = length_error(color, COLOR_MAX_LEN) {
                errors.add("color", err);
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn length_error(value: &str, max: usize) -> Option<ValidationError> {
    let len = value.chars().count();
    if (1..=max).contains(&len) {
        return None;
    }
    let mut err = ValidationError::new("length");
    err.message = Some(Cow::Owned(format!(
        "must be between 1 and {max} characters, got {len}"
    )));
    Some(err)
}

/// Conjunctive filters for listing vehicles. `None` fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub brand_id: Option<DbId>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub is_sold: Option<bool>,
}
