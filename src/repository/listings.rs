//! Checkout ledger repository

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{ListingStatus, REASON_LOST},
        listing::{CheckoutListing, CreateListing, HeldProduct, UpdateListing},
    },
    repository::sql::UpdateBuilder,
};

const UPDATABLE_COLUMNS: &[&str] = &["status", "reason", "is_damaged", "updated_by"];

#[derive(Clone)]
pub struct ListingsRepository {
    pool: Pool<Postgres>,
}

impl ListingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // -----------------------------------------------------------------
    // Ledger administration
    // -----------------------------------------------------------------

    pub async fn list(&self) -> AppResult<Vec<CheckoutListing>> {
        let listings =
            sqlx::query_as::<_, CheckoutListing>("SELECT * FROM checkout_listings ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(listings)
    }

    pub async fn get(&self, id: i32) -> AppResult<CheckoutListing> {
        sqlx::query_as::<_, CheckoutListing>("SELECT * FROM checkout_listings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Listing with id {} not found", id)))
    }

    pub async fn create(&self, listing: &CreateListing) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO checkout_listings
                (inventory_id, employee_id, status, reason, is_damaged, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING id
            "#,
        )
        .bind(listing.inventory_id)
        .bind(listing.employee_id)
        .bind(listing.status.as_deref().unwrap_or(ListingStatus::Active.as_code()))
        .bind(&listing.reason)
        .bind(listing.is_damaged)
        .bind(listing.created_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: i32, update: &UpdateListing) -> AppResult<u64> {
        UpdateBuilder::new("checkout_listings", UPDATABLE_COLUMNS)
            .set_opt("status", update.status.clone())
            .set_opt("reason", update.reason.clone())
            .set_opt("is_damaged", update.is_damaged)
            .set_opt("updated_by", update.updated_by)
            .execute(&self.pool, id)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM checkout_listings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // -----------------------------------------------------------------
    // Workflow queries. These take a connection so the checkout service
    // can run them inside a single transaction.
    // -----------------------------------------------------------------

    /// The employee's current Active listing, if any: (inventory_id, reason)
    pub async fn active_listing_for_employee(
        &self,
        conn: &mut PgConnection,
        employee_id: i32,
    ) -> AppResult<Option<(i32, Option<String>)>> {
        let row = sqlx::query(
            r#"
            SELECT inventory_id, reason FROM checkout_listings
            WHERE employee_id = $1 AND status = 'Active'
            LIMIT 1
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(|r| (r.get("inventory_id"), r.get("reason"))))
    }

    /// How often the employee has taken units of this product, over the
    /// whole ledger history
    pub async fn count_takes(
        &self,
        conn: &mut PgConnection,
        employee_id: i32,
        product_name: &str,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM checkout_listings
            WHERE employee_id = $1
              AND inventory_id IN (SELECT id FROM inventory_items WHERE name = $2)
            "#,
        )
        .bind(employee_id)
        .bind(product_name)
        .fetch_one(&mut *conn)
        .await?;
        Ok(count)
    }

    /// Whether the employee has a lost listing of this product
    pub async fn lost_before(
        &self,
        conn: &mut PgConnection,
        employee_id: i32,
        product_name: &str,
    ) -> AppResult<bool> {
        let lost: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM checkout_listings
                WHERE employee_id = $1
                  AND inventory_id IN (SELECT id FROM inventory_items WHERE name = $2)
                  AND reason = $3
            )
            "#,
        )
        .bind(employee_id)
        .bind(product_name)
        .bind(REASON_LOST)
        .fetch_one(&mut *conn)
        .await?;
        Ok(lost)
    }

    /// Record a take, returning the new listing id
    pub async fn insert_take(
        &self,
        conn: &mut PgConnection,
        inventory_id: i32,
        employee_id: i32,
        reason: &str,
    ) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO checkout_listings
                (inventory_id, employee_id, status, reason, created_by, updated_by)
            VALUES ($1, $2, 'Active', $3, $2, $2)
            RETURNING id
            "#,
        )
        .bind(inventory_id)
        .bind(employee_id)
        .bind(reason)
        .fetch_one(&mut *conn)
        .await?;
        Ok(id)
    }

    /// The Active listing linking an employee to a unit, if any
    pub async fn active_listing_linking(
        &self,
        conn: &mut PgConnection,
        inventory_id: i32,
        employee_id: i32,
    ) -> AppResult<Option<i32>> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id FROM checkout_listings
            WHERE inventory_id = $1 AND employee_id = $2 AND status = 'Active'
            "#,
        )
        .bind(inventory_id)
        .bind(employee_id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(id)
    }

    /// Close a listing. The Active predicate makes the Active -> Returned
    /// transition fire exactly once; a second return affects zero rows.
    pub async fn mark_returned(
        &self,
        conn: &mut PgConnection,
        listing_id: i32,
        employee_id: i32,
        reason: Option<&str>,
        is_damaged: bool,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE checkout_listings
            SET status = 'Returned', reason = $2, is_damaged = $3,
                updated_by = $4, updated_at = NOW()
            WHERE id = $1 AND status = 'Active'
            "#,
        )
        .bind(listing_id)
        .bind(reason)
        .bind(is_damaged)
        .bind(employee_id)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Everything the employee currently holds, projected for the kiosk
    /// return screens with hours held since checkout
    pub async fn held_products(&self, employee_id: i32) -> AppResult<Vec<HeldProduct>> {
        let rows = sqlx::query(
            r#"
            SELECT i.item_code, i.name AS product_name, i.category_id, i.price, i.picture,
                   c.name AS category_name, l.created_at AS taken_at
            FROM checkout_listings l
            JOIN inventory_items i ON l.inventory_id = i.id
            JOIN categories c ON i.category_id = c.id
            WHERE l.employee_id = $1 AND l.status = 'Active'
            ORDER BY l.created_at
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        let now = Utc::now();

        Ok(rows
            .into_iter()
            .map(|row| {
                let taken_at: DateTime<Utc> = row.get("taken_at");
                let picture: Option<Vec<u8>> = row.get("picture");
                HeldProduct {
                    item_code: row.get("item_code"),
                    product_name: row.get("product_name"),
                    category_id: row.get("category_id"),
                    category_name: row.get("category_name"),
                    price: row.get("price"),
                    product_image: picture.map(|p| BASE64.encode(p)),
                    product_taken_date: taken_at,
                    product_return_date: now,
                    hours_held: (now - taken_at).num_hours(),
                }
            })
            .collect())
    }
}
