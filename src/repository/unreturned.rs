//! Unreturned (loss) ledger repository

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RecordStatus,
        unreturned::{CreateUnreturnedListing, UnreturnedListing, UpdateUnreturnedListing},
    },
};

#[derive(Clone)]
pub struct UnreturnedRepository {
    pool: Pool<Postgres>,
}

impl UnreturnedRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Checkout gate: does the employee have an outstanding loss?
    pub async fn has_active_for_employee(
        &self,
        conn: &mut PgConnection,
        employee_id: i32,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM unreturned_listings
                WHERE employee_id = $1 AND status = 'Active'
            )
            "#,
        )
        .bind(employee_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(exists)
    }

    pub async fn list(&self) -> AppResult<Vec<UnreturnedListing>> {
        let listings =
            sqlx::query_as::<_, UnreturnedListing>("SELECT * FROM unreturned_listings ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(listings)
    }

    pub async fn create(&self, listing: &CreateUnreturnedListing) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO unreturned_listings
                (listing_id, employee_id, status, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id
            "#,
        )
        .bind(listing.listing_id)
        .bind(listing.employee_id)
        .bind(listing.status.as_deref().unwrap_or(RecordStatus::Active.as_code()))
        .bind(listing.created_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Update rows referencing a checkout listing; returns affected rows
    pub async fn update_by_listing(
        &self,
        listing_id: i32,
        update: &UpdateUnreturnedListing,
    ) -> AppResult<u64> {
        if update.status.is_none() && update.updated_by.is_none() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }
        // Keyed by listing_id rather than row id: the escalation process
        // addresses losses by the checkout listing they refer to.
        let result = sqlx::query(
            "UPDATE unreturned_listings SET status = COALESCE($2, status), updated_by = COALESCE($3, updated_by), updated_at = NOW() WHERE listing_id = $1",
        )
        .bind(listing_id)
        .bind(update.status.as_deref())
        .bind(update.updated_by)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_by_listing(&self, listing_id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM unreturned_listings WHERE listing_id = $1")
            .bind(listing_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
