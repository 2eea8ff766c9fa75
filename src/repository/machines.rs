//! Kiosk machine repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RecordStatus,
        machine::{CreateMachine, Machine, UpdateMachine},
    },
    repository::sql::UpdateBuilder,
};

const UPDATABLE_COLUMNS: &[&str] = &["location_id", "name", "status", "updated_by"];

#[derive(Clone)]
pub struct MachinesRepository {
    pool: Pool<Postgres>,
}

impl MachinesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Machine>> {
        let machines = sqlx::query_as::<_, Machine>("SELECT * FROM machines ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(machines)
    }

    pub async fn get(&self, id: i32) -> AppResult<Machine> {
        sqlx::query_as::<_, Machine>("SELECT * FROM machines WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Machine with id {} not found", id)))
    }

    pub async fn create(&self, machine: &CreateMachine) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO machines (location_id, name, status, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(machine.location_id)
        .bind(&machine.name)
        .bind(machine.status.as_deref().unwrap_or(RecordStatus::Active.as_code()))
        .bind(machine.created_by)
        .bind(machine.updated_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: i32, update: &UpdateMachine) -> AppResult<u64> {
        UpdateBuilder::new("machines", UPDATABLE_COLUMNS)
            .set_opt("location_id", update.location_id)
            .set_opt("name", update.name.clone())
            .set_opt("status", update.status.clone())
            .set_opt("updated_by", update.updated_by)
            .execute(&self.pool, id)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM machines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
