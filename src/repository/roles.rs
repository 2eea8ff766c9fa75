//! Role repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RecordStatus,
        role::{CreateRole, Role, UpdateRole},
    },
    repository::sql::UpdateBuilder,
};

const UPDATABLE_COLUMNS: &[&str] = &["name", "access", "status", "updated_by"];

#[derive(Clone)]
pub struct RolesRepository {
    pool: Pool<Postgres>,
}

impl RolesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Role>> {
        let roles = sqlx::query_as::<_, Role>("SELECT * FROM roles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(roles)
    }

    pub async fn get(&self, id: i32) -> AppResult<Role> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role with id {} not found", id)))
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM roles WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    pub async fn create(&self, role: &CreateRole) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO roles (name, access, status, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&role.name)
        .bind(&role.access)
        .bind(role.status.as_deref().unwrap_or(RecordStatus::Active.as_code()))
        .bind(&role.created_by)
        .bind(&role.updated_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: i32, update: &UpdateRole) -> AppResult<u64> {
        UpdateBuilder::new("roles", UPDATABLE_COLUMNS)
            .set_opt("name", update.name.clone())
            .set_opt("access", update.access.clone())
            .set_opt("status", update.status.clone())
            .set_opt("updated_by", update.updated_by.clone())
            .execute(&self.pool, id)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
