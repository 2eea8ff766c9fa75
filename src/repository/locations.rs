//! Location repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RecordStatus,
        location::{CreateLocation, Location, UpdateLocation},
    },
    repository::sql::UpdateBuilder,
};

const UPDATABLE_COLUMNS: &[&str] = &["name", "status", "updated_by"];

#[derive(Clone)]
pub struct LocationsRepository {
    pool: Pool<Postgres>,
}

impl LocationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(locations)
    }

    pub async fn get(&self, id: i32) -> AppResult<Location> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Location with id {} not found", id)))
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM locations WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    pub async fn create(&self, location: &CreateLocation) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO locations (name, status, created_by, updated_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&location.name)
        .bind(location.status.as_deref().unwrap_or(RecordStatus::Active.as_code()))
        .bind(location.created_by)
        .bind(location.updated_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: i32, update: &UpdateLocation) -> AppResult<u64> {
        UpdateBuilder::new("locations", UPDATABLE_COLUMNS)
            .set_opt("name", update.name.clone())
            .set_opt("status", update.status.clone())
            .set_opt("updated_by", update.updated_by)
            .execute(&self.pool, id)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
