//! Query parameter types for API handlers.

use serde::Deserialize;
use validator::Validate;
use vehicle_manager_core::error::CoreError;
use vehicle_manager_core::pagination::PageRequest;
use vehicle_manager_core::types::DbId;
use vehicle_manager_db::models::vehicle::VehicleFilter;

/// Page-number pagination parameters (`?page=&size=`).
///
/// Range checks happen in [`PageRequest::new`].
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PaginationParams {
    pub fn page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::new(self.page, self.size)
    }
}

/// `GET /brands/resolve?name=`
///
/// Only a missing key is rejected; an empty value is looked up like any
/// other and ends in not-found.
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveBrandParams {
    pub name: String,
}

/// `GET /vehicles?page=&size=&year=&brand_id=&color=&is_sold=`
///
/// Pagination fields are inlined: `serde(flatten)` does not work with
/// numeric query values.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct VehicleListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub year: Option<i32>,
    pub brand_id: Option<DbId>,
    pub color: Option<String>,
    pub is_sold: Option<bool>,
}

impl VehicleListParams {
    pub fn page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::new(self.page, self.size)
    }

    pub fn filter(&self) -> VehicleFilter {
        VehicleFilter {
            brand_id: self.brand_id,
            year: self.year,
            color: self.color.clone(),
            is_sold: self.is_sold,
        }
    }
}

/// `GET /logs?lines=`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LogParams {
    pub lines: Option<usize>,
}
