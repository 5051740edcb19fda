//! Repository for the `vehicles` table.
//!
//! Every read joins the owning brand so callers always receive a
//! [`VehicleWithBrand`].

use chrono::Utc;
use sqlx::sqlite::{SqliteArguments, SqliteConnection};
use sqlx::{Connection, Sqlite};
use vehicle_manager_core::pagination::PageRequest;
use vehicle_manager_core::patch::Patch;
use vehicle_manager_core::types::{DbId, Timestamp};

use crate::commit_or_rollback;
use crate::models::vehicle::{
    CreateVehicle, PatchVehicle, UpdateVehicle, VehicleFilter, VehicleWithBrand,
};

/// Vehicle columns plus the aliased brand columns decoded by
/// `VehicleWithBrand::from_row`.
const SELECT_WITH_BRAND: &str = "SELECT v.id, v.model, v.brand_id, v.color, v.year, \
     v.description, v.is_sold, v.created_at, v.updated_at, \
     b.name AS brand_name, b.created_at AS brand_created_at \
     FROM vehicles v JOIN brands b ON b.id = v.brand_id";

/// Provides CRUD operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// List one page of vehicles matching `filter`, oldest first.
    pub async fn list(
        conn: &mut SqliteConnection,
        filter: &VehicleFilter,
        page: PageRequest,
    ) -> Result<Vec<VehicleWithBrand>, sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_vehicle_filter(filter);

        let query = format!(
            "{SELECT_WITH_BRAND} {where_clause} \
             ORDER BY v.created_at ASC, v.id ASC \
             LIMIT ?{bind_idx} OFFSET ?{}",
            bind_idx + 1
        );

        let q = bind_vehicle_values(sqlx::query_as::<_, VehicleWithBrand>(&query), &bind_values);
        q.bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await
    }

    /// Count vehicles matching `filter` (for pagination metadata).
    pub async fn count(
        conn: &mut SqliteConnection,
        filter: &VehicleFilter,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_vehicle_filter(filter);

        let query = format!("SELECT COUNT(*) FROM vehicles v {where_clause}");

        let q = bind_vehicle_values_scalar(sqlx::query_scalar::<_, i64>(&query), &bind_values);
        q.fetch_one(&mut *conn).await
    }

    /// Find a vehicle by its internal ID, with its brand.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<VehicleWithBrand>, sqlx::Error> {
        let query = format!("{SELECT_WITH_BRAND} WHERE v.id = ?1");
        sqlx::query_as::<_, VehicleWithBrand>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Whether a vehicle with the given ID exists.
    pub async fn exists(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicles WHERE id = ?1")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(found > 0)
    }

    /// Insert a new vehicle, returning the created row with its brand.
    ///
    /// The caller is expected to have checked that `input.brand_id` exists;
    /// the foreign key rejects the insert otherwise.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateVehicle,
    ) -> Result<VehicleWithBrand, sqlx::Error> {
        let mut tx = conn.begin().await?;
        let result = Self::insert(&mut tx, input).await;
        commit_or_rollback(tx, result).await
    }

    /// Overwrite every mutable column of a vehicle.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<VehicleWithBrand>, sqlx::Error> {
        let mut tx = conn.begin().await?;
        let result = Self::replace(&mut tx, id, input).await;
        commit_or_rollback(tx, result).await
    }

    /// Overwrite only the columns present in `input`.
    ///
    /// `updated_at` is refreshed even when no other field is present.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn patch(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &PatchVehicle,
    ) -> Result<Option<VehicleWithBrand>, sqlx::Error> {
        let mut tx = conn.begin().await?;
        let result = Self::merge(&mut tx, id, input).await;
        commit_or_rollback(tx, result).await
    }

    /// Delete a vehicle by ID. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = conn.begin().await?;
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map(|done| done.rows_affected() > 0);
        commit_or_rollback(tx, result).await
    }

    async fn insert(
        conn: &mut SqliteConnection,
        input: &CreateVehicle,
    ) -> Result<VehicleWithBrand, sqlx::Error> {
        let now = Utc::now();
        let inserted = sqlx::query(
            "INSERT INTO vehicles
                (model, brand_id, color, year, description, is_sold, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        )
        .bind(&input.model)
        .bind(input.brand_id)
        .bind(&input.color)
        .bind(input.year)
        .bind(&input.description)
        .bind(input.is_sold)
        .bind(now)
        .execute(&mut *conn)
        .await?;

        Self::find_by_id(conn, inserted.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn replace(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<VehicleWithBrand>, sqlx::Error> {
        let updated = sqlx::query(
            "UPDATE vehicles SET
                model = ?2,
                brand_id = ?3,
                color = ?4,
                year = ?5,
                description = ?6,
                is_sold = ?7,
                updated_at = ?8
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&input.model)
        .bind(input.brand_id)
        .bind(&input.color)
        .bind(input.year)
        .bind(&input.description)
        .bind(input.is_sold)
        .bind(Utc::now())
        .execute(&mut *conn)
        .await?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(conn, id).await
    }

    async fn merge(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &PatchVehicle,
    ) -> Result<Option<VehicleWithBrand>, sqlx::Error> {
        let (set_clause, bind_values, bind_idx) = build_vehicle_patch(input, Utc::now());

        let query = format!("UPDATE vehicles SET {set_clause} WHERE id = ?{bind_idx}");

        let updated = bind_vehicle_values_plain(sqlx::query(&query), &bind_values)
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(conn, id).await
    }
}

// ---------------------------------------------------------------------------
// Dynamic query helpers
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built vehicle queries.
enum BindValue {
    BigInt(i64),
    Int(i32),
    Bool(bool),
    Text(String),
    NullableText(Option<String>),
    Timestamp(Timestamp),
}

/// Build a WHERE clause and bind values from `VehicleFilter`.
///
/// Returns `(where_clause, bind_values, next_bind_index)`.
/// The `where_clause` is empty if no filters are active, or starts with `WHERE `.
fn build_vehicle_filter(filter: &VehicleFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(brand_id) = filter.brand_id {
        conditions.push(format!("v.brand_id = ?{bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(brand_id));
    }

    if let Some(year) = filter.year {
        conditions.push(format!("v.year = ?{bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Int(year));
    }

    if let Some(ref color) = filter.color {
        conditions.push(format!("v.color = ?{bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(color.clone()));
    }

    if let Some(is_sold) = filter.is_sold {
        conditions.push(format!("v.is_sold = ?{bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Bool(is_sold));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Build a SET clause from the present fields of `PatchVehicle`.
///
/// `updated_at` is always set. Returns `(set_clause, bind_values,
/// next_bind_index)`.
fn build_vehicle_patch(input: &PatchVehicle, now: Timestamp) -> (String, Vec<BindValue>, u32) {
    let mut set_clauses: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    let mut push = |column: &str, value: BindValue| {
        set_clauses.push(format!("{column} = ?{bind_idx}"));
        bind_idx += 1;
        bind_values.push(value);
    };

    if let Patch::Present(ref model) = input.model {
        push("model", BindValue::Text(model.clone()));
    }
    if let Patch::Present(brand_id) = input.brand_id {
        push("brand_id", BindValue::BigInt(brand_id));
    }
    if let Patch::Present(ref color) = input.color {
        push("color", BindValue::Text(color.clone()));
    }
    if let Patch::Present(year) = input.year {
        push("year", BindValue::Int(year));
    }
    if let Patch::Present(ref description) = input.description {
        push("description", BindValue::NullableText(description.clone()));
    }
    if let Patch::Present(is_sold) = input.is_sold {
        push("is_sold", BindValue::Bool(is_sold));
    }
    push("updated_at", BindValue::Timestamp(now));

    (set_clauses.join(", "), bind_values, bind_idx)
}

type VehicleQueryAs<'q, O> = sqlx::query::QueryAs<'q, Sqlite, O, SqliteArguments<'q>>;
type VehicleQueryScalar<'q> = sqlx::query::QueryScalar<'q, Sqlite, i64, SqliteArguments<'q>>;
type VehicleQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_vehicle_values<'q, O>(
    mut q: VehicleQueryAs<'q, O>,
    bind_values: &'q [BindValue],
) -> VehicleQueryAs<'q, O> {
    for val in bind_values {
        q = match val {
            BindValue::BigInt(v) => q.bind(*v),
            BindValue::Int(v) => q.bind(*v),
            BindValue::Bool(v) => q.bind(*v),
            BindValue::Text(v) => q.bind(v.as_str()),
            BindValue::NullableText(v) => q.bind(v.as_deref()),
            BindValue::Timestamp(v) => q.bind(*v),
        };
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_vehicle_values_scalar<'q>(
    mut q: VehicleQueryScalar<'q>,
    bind_values: &'q [BindValue],
) -> VehicleQueryScalar<'q> {
    for val in bind_values {
        q = match val {
            BindValue::BigInt(v) => q.bind(*v),
            BindValue::Int(v) => q.bind(*v),
            BindValue::Bool(v) => q.bind(*v),
            BindValue::Text(v) => q.bind(v.as_str()),
            BindValue::NullableText(v) => q.bind(v.as_deref()),
            BindValue::Timestamp(v) => q.bind(*v),
        };
    }
    q
}

/// Bind a slice of `BindValue` to a plain sqlx `Query`.
fn bind_vehicle_values_plain<'q>(
    mut q: VehicleQuery<'q>,
    bind_values: &'q [BindValue],
) -> VehicleQuery<'q> {
    for val in bind_values {
        q = match val {
            BindValue::BigInt(v) => q.bind(*v),
            BindValue::Int(v) => q.bind(*v),
            BindValue::Bool(v) => q.bind(*v),
            BindValue::Text(v) => q.bind(v.as_str()),
            BindValue::NullableText(v) => q.bind(v.as_deref()),
            BindValue::Timestamp(v) => q.bind(*v),
        };
    }
    q
}
