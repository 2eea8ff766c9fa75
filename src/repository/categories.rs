//! Category repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::category::Category,
    repository::sql::UpdateBuilder,
};

const UPDATABLE_COLUMNS: &[&str] = &["name", "status", "picture", "updated_by"];

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i32) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))
    }

    pub async fn list_active(&self) -> AppResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE status = 'Active' ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    pub async fn id_by_name(&self, name: &str) -> AppResult<Option<i32>> {
        let id = sqlx::query_scalar::<_, i32>("SELECT id FROM categories WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    pub async fn create(
        &self,
        name: &str,
        status: &str,
        picture: Option<Vec<u8>>,
        created_by: Option<i32>,
    ) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO categories (name, status, picture, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(status)
        .bind(picture)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        status: Option<String>,
        picture: Option<Vec<u8>>,
        updated_by: Option<i32>,
    ) -> AppResult<u64> {
        UpdateBuilder::new("categories", UPDATABLE_COLUMNS)
            .set_opt("name", name)
            .set_opt("status", status)
            .set_opt("picture", picture)
            .set_opt("updated_by", updated_by)
            .execute(&self.pool, id)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
