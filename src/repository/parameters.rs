//! Machine parameter repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RecordStatus,
        parameter::{CreateParameter, Parameter, UpdateParameter},
    },
    repository::sql::UpdateBuilder,
};

const UPDATABLE_COLUMNS: &[&str] = &[
    "category",
    "name",
    "value",
    "status",
    "machine_id",
    "updated_by",
];

#[derive(Clone)]
pub struct ParametersRepository {
    pool: Pool<Postgres>,
}

impl ParametersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Parameter>> {
        let parameters = sqlx::query_as::<_, Parameter>("SELECT * FROM parameters ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(parameters)
    }

    pub async fn get(&self, id: i32) -> AppResult<Parameter> {
        sqlx::query_as::<_, Parameter>("SELECT * FROM parameters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Parameter with id {} not found", id)))
    }

    pub async fn create(&self, parameter: &CreateParameter) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO parameters (category, name, value, status, machine_id, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&parameter.category)
        .bind(&parameter.name)
        .bind(&parameter.value)
        .bind(parameter.status.as_deref().unwrap_or(RecordStatus::Active.as_code()))
        .bind(parameter.machine_id)
        .bind(parameter.created_by)
        .bind(parameter.updated_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: i32, update: &UpdateParameter) -> AppResult<u64> {
        UpdateBuilder::new("parameters", UPDATABLE_COLUMNS)
            .set_opt("category", update.category.clone())
            .set_opt("name", update.name.clone())
            .set_opt("value", update.value.clone())
            .set_opt("status", update.status.clone())
            .set_opt("machine_id", update.machine_id)
            .set_opt("updated_by", update.updated_by)
            .execute(&self.pool, id)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM parameters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
