//! Inventory catalog repository

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sqlx::{PgConnection, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::inventory::{CategoryProduct, InventoryItem, InventoryItemDetails, UniqueProduct},
    repository::sql::UpdateBuilder,
};

const UPDATABLE_COLUMNS: &[&str] = &[
    "name",
    "category_id",
    "price",
    "status",
    "picture",
    "updated_by",
];

#[derive(Clone)]
pub struct InventoryRepository {
    pool: Pool<Postgres>,
}

impl InventoryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a catalog row, returning its id
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        item_code: &str,
        name: &str,
        category_id: i32,
        price: i32,
        status: &str,
        picture: Option<Vec<u8>>,
        created_by: i32,
        updated_by: i32,
    ) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO inventory_items
                (item_code, name, category_id, price, status, picture, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(item_code)
        .bind(name)
        .bind(category_id)
        .bind(price)
        .bind(status)
        .bind(picture)
        .bind(created_by)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Insert one unit inside a bulk-load transaction
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_unit(
        &self,
        conn: &mut PgConnection,
        item_code: &str,
        name: &str,
        category_id: i32,
        price: i32,
        status: &str,
        created_by: i32,
        updated_by: i32,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO inventory_items
                (item_code, name, category_id, price, status, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item_code)
        .bind(name)
        .bind(category_id)
        .bind(price)
        .bind(status)
        .bind(created_by)
        .bind(updated_by)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Get item by ID
    pub async fn get(&self, id: i32) -> AppResult<InventoryItem> {
        sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inventory item with id {} not found", id)))
    }

    /// Get item by ID with resolved category and employee codes
    pub async fn get_details(&self, id: i32) -> AppResult<InventoryItemDetails> {
        let row = sqlx::query(
            r#"
            SELECT i.*, c.name AS category_name,
                   e1.emp_code AS created_by_code, e2.emp_code AS updated_by_code
            FROM inventory_items i
            JOIN categories c ON i.category_id = c.id
            LEFT JOIN employees e1 ON i.created_by = e1.id
            LEFT JOIN employees e2 ON i.updated_by = e2.id
            WHERE i.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inventory item with id {} not found", id)))?;

        Ok(Self::details_from_row(&row))
    }

    /// List all items with resolved category and employee codes
    pub async fn list_details(&self) -> AppResult<Vec<InventoryItemDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT i.*, c.name AS category_name,
                   e1.emp_code AS created_by_code, e2.emp_code AS updated_by_code
            FROM inventory_items i
            JOIN categories c ON i.category_id = c.id
            LEFT JOIN employees e1 ON i.created_by = e1.id
            LEFT JOIN employees e2 ON i.updated_by = e2.id
            ORDER BY i.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::details_from_row).collect())
    }

    /// Items of one category with resolved references
    pub async fn filter_by_category(&self, category_id: i32) -> AppResult<Vec<InventoryItemDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT i.*, c.name AS category_name,
                   e1.emp_code AS created_by_code, e2.emp_code AS updated_by_code
            FROM inventory_items i
            JOIN categories c ON i.category_id = c.id
            LEFT JOIN employees e1 ON i.created_by = e1.id
            LEFT JOIN employees e2 ON i.updated_by = e2.id
            WHERE i.category_id = $1
            ORDER BY i.id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::details_from_row).collect())
    }

    fn details_from_row(row: &sqlx::postgres::PgRow) -> InventoryItemDetails {
        let picture: Option<Vec<u8>> = row.get("picture");
        InventoryItemDetails {
            id: row.get("id"),
            item_code: row.get("item_code"),
            name: row.get("name"),
            category_id: row.get("category_id"),
            category_name: row.get("category_name"),
            price: row.get("price"),
            status: row.get("status"),
            picture: picture.map(|p| BASE64.encode(p)),
            created_by: row.get("created_by_code"),
            updated_by: row.get("updated_by_code"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    /// Apply a partial update; returns the number of affected rows
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        category_id: Option<i32>,
        price: Option<i32>,
        status: Option<String>,
        picture: Option<Vec<u8>>,
        updated_by: Option<i32>,
    ) -> AppResult<u64> {
        UpdateBuilder::new("inventory_items", UPDATABLE_COLUMNS)
            .set_opt("name", name)
            .set_opt("category_id", category_id)
            .set_opt("price", price)
            .set_opt("status", status)
            .set_opt("picture", picture)
            .set_opt("updated_by", updated_by)
            .execute(&self.pool, id)
            .await
    }

    /// Delete item by ID; returns the number of affected rows
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Resolve an item id from its unit code
    pub async fn id_by_item_code(&self, item_code: &str) -> AppResult<Option<i32>> {
        let id = sqlx::query_scalar::<_, i32>("SELECT id FROM inventory_items WHERE item_code = $1")
            .bind(item_code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    /// Kiosk take screen: product names with at least one Active unit that is
    /// not referenced by an Active checkout listing
    pub async fn unique_available_products(&self) -> AppResult<Vec<UniqueProduct>> {
        let rows = sqlx::query(
            r#"
            SELECT i.name,
                   MIN(i.category_id) AS category_id,
                   COALESCE(MAX(i.price), 0) AS price,
                   c.picture AS category_image
            FROM inventory_items i
            JOIN categories c ON i.category_id = c.id
            WHERE i.status = 'Active'
              AND i.id NOT IN (SELECT inventory_id FROM checkout_listings WHERE status = 'Active')
            GROUP BY i.name, c.picture
            ORDER BY i.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let image: Option<Vec<u8>> = row.get("category_image");
                UniqueProduct {
                    product_name: row.get("name"),
                    category_id: row.get("category_id"),
                    price: row.get("price"),
                    product_image: image.map(|p| BASE64.encode(p)),
                }
            })
            .collect())
    }

    /// Active products of one category for kiosk browse screens
    pub async fn products_by_category(&self, category_id: i32) -> AppResult<Vec<CategoryProduct>> {
        let rows = sqlx::query(
            r#"
            SELECT id, item_code, name, price, picture
            FROM inventory_items
            WHERE category_id = $1 AND status = 'Active'
            ORDER BY name
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let picture: Option<Vec<u8>> = row.get("picture");
                CategoryProduct {
                    product_id: row.get("id"),
                    item_code: row.get("item_code"),
                    product_name: row.get("name"),
                    price: row.get("price"),
                    product_image: picture.map(|p| BASE64.encode(p)),
                }
            })
            .collect())
    }

    /// Pick one available unit of a product. Ties are broken by whatever
    /// order the storage returns; callers only need some Active unit.
    pub async fn pick_available_unit(
        &self,
        conn: &mut PgConnection,
        product_name: &str,
    ) -> AppResult<Option<(i32, String)>> {
        let row = sqlx::query(
            r#"
            SELECT id, item_code FROM inventory_items
            WHERE name = $1 AND status = 'Active'
            LIMIT 1
            "#,
        )
        .bind(product_name)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(|r| (r.get("id"), r.get("item_code"))))
    }

    /// Flip a unit Active -> Inactive. The status predicate makes two
    /// concurrent checkouts of the same unit resolve to a single winner:
    /// the loser sees rows_affected == 0 and must roll back.
    pub async fn claim_unit(&self, conn: &mut PgConnection, id: i32) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE inventory_items SET status = 'Inactive', updated_at = NOW() WHERE id = $1 AND status = 'Active'",
        )
        .bind(id)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Put a returned unit back into circulation
    pub async fn release_unit(&self, conn: &mut PgConnection, id: i32) -> AppResult<()> {
        sqlx::query("UPDATE inventory_items SET status = 'Active', updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Keep a unit out of circulation pending inspection
    pub async fn hold_unit(&self, conn: &mut PgConnection, id: i32) -> AppResult<()> {
        sqlx::query("UPDATE inventory_items SET status = 'Inactive', updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
