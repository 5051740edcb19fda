//! Repository for the `brands` table.

use chrono::Utc;
use sqlx::{Connection, SqliteConnection};
use vehicle_manager_core::pagination::PageRequest;
use vehicle_manager_core::types::DbId;

use crate::commit_or_rollback;
use crate::models::brand::{Brand, CreateBrand};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for brands.
pub struct BrandRepo;

impl BrandRepo {
    /// List one page of brands, oldest first.
    pub async fn list(
        conn: &mut SqliteConnection,
        page: PageRequest,
    ) -> Result<Vec<Brand>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM brands
             ORDER BY created_at ASC, id ASC
             LIMIT ?1 OFFSET ?2"
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await
    }

    /// Count all brands (for pagination metadata).
    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM brands")
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a brand by its internal ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE id = ?1");
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Find a brand by name, ignoring case (Unicode-aware).
    ///
    /// Names are unique case-sensitively, so several rows may match; the
    /// oldest one wins.
    pub async fn find_by_name_ci(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM brands
             WHERE name_key = ?1
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(name_key(name))
            .fetch_optional(&mut *conn)
            .await
    }

    /// Whether a brand with the given ID exists.
    pub async fn exists(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM brands WHERE id = ?1")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(found > 0)
    }

    /// Insert a new brand, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateBrand,
    ) -> Result<Brand, sqlx::Error> {
        let mut tx = conn.begin().await?;
        let result = Self::insert(&mut tx, &input.name).await;
        commit_or_rollback(tx, result).await
    }

    /// Delete a brand and every vehicle that references it.
    ///
    /// Returns `true` if the brand row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = conn.begin().await?;
        let result = Self::delete_cascading(&mut tx, id).await;
        commit_or_rollback(tx, result).await
    }

    /// Insert each name that does not exist yet. Returns the number inserted.
    pub async fn seed(conn: &mut SqliteConnection, names: &[&str]) -> Result<u64, sqlx::Error> {
        let mut tx = conn.begin().await?;
        let result = Self::insert_missing(&mut tx, names).await;
        commit_or_rollback(tx, result).await
    }

    async fn insert(conn: &mut SqliteConnection, name: &str) -> Result<Brand, sqlx::Error> {
        let inserted =
            sqlx::query("INSERT INTO brands (name, name_key, created_at) VALUES (?1, ?2, ?3)")
                .bind(name)
                .bind(name_key(name))
                .bind(Utc::now())
                .execute(&mut *conn)
                .await?;

        Self::find_by_id(conn, inserted.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn delete_cascading(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let vehicles = sqlx::query("DELETE FROM vehicles WHERE brand_id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        let brands = sqlx::query("DELETE FROM brands WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        tracing::debug!(
            brand_id = id,
            vehicles_removed = vehicles.rows_affected(),
            "Cascaded brand delete"
        );
        Ok(brands.rows_affected() > 0)
    }

    async fn insert_missing(conn: &mut SqliteConnection, names: &[&str]) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for name in names {
            let result = sqlx::query(
                "INSERT INTO brands (name, name_key, created_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT (name) DO NOTHING",
            )
            .bind(*name)
            .bind(name_key(name))
            .bind(Utc::now())
            .execute(&mut *conn)
            .await?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }
}

/// Lookup key for case-insensitive name matching.
fn name_key(name: &str) -> String {
    name.to_lowercase()
}
