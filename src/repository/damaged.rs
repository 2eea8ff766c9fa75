//! Damaged (inspection) ledger repository

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::damaged::{CreateDamagedListing, DamagedListing, UpdateDamagedListing},
    repository::sql::UpdateBuilder,
};

const UPDATABLE_COLUMNS: &[&str] = &["status", "updated_by"];

#[derive(Clone)]
pub struct DamagedRepository {
    pool: Pool<Postgres>,
}

impl DamagedRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Record a damaged return inside the workflow transaction
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        listing_id: i32,
        created_by: i32,
    ) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO damaged_listings (listing_id, status, created_by, updated_by)
            VALUES ($1, 'Active', $2, $2)
            RETURNING id
            "#,
        )
        .bind(listing_id)
        .bind(created_by)
        .fetch_one(&mut *conn)
        .await?;
        Ok(id)
    }

    pub async fn list(&self) -> AppResult<Vec<DamagedListing>> {
        let listings =
            sqlx::query_as::<_, DamagedListing>("SELECT * FROM damaged_listings ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(listings)
    }

    pub async fn get(&self, id: i32) -> AppResult<DamagedListing> {
        sqlx::query_as::<_, DamagedListing>("SELECT * FROM damaged_listings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Damaged listing with id {} not found", id)))
    }

    /// Ledger administration insert, outside the workflow path
    pub async fn create(&self, listing: &CreateDamagedListing) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO damaged_listings (listing_id, status, created_by, updated_by)
            VALUES ($1, 'Active', $2, $2)
            RETURNING id
            "#,
        )
        .bind(listing.listing_id)
        .bind(listing.created_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: i32, update: &UpdateDamagedListing) -> AppResult<u64> {
        UpdateBuilder::new("damaged_listings", UPDATABLE_COLUMNS)
            .set("status", update.status.clone())
            .set_opt("updated_by", update.updated_by)
            .execute(&self.pool, id)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM damaged_listings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
