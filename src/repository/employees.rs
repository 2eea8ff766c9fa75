//! Employee directory repository

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        employee::{CreateEmployee, Employee, UpdateEmployee},
        enums::RecordStatus,
    },
    repository::sql::UpdateBuilder,
};

const UPDATABLE_COLUMNS: &[&str] = &[
    "firstname",
    "lastname",
    "email",
    "emp_code",
    "role_id",
    "status",
    "updated_by",
];

#[derive(Clone)]
pub struct EmployeesRepository {
    pool: Pool<Postgres>,
}

impl EmployeesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i32) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee with id {} not found", id)))
    }

    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    /// Resolve an employee from their badge code
    pub async fn get_by_emp_code(&self, emp_code: &str) -> AppResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE emp_code = $1")
            .bind(emp_code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    /// Name and role for the kiosk action menu; Active employees only
    pub async fn name_and_role(&self, emp_code: &str) -> AppResult<Option<(String, String, String)>> {
        let row = sqlx::query(
            r#"
            SELECT e.firstname, e.lastname, r.name AS role_name
            FROM employees e
            JOIN roles r ON e.role_id = r.id
            WHERE e.emp_code = $1 AND e.status = 'Active'
            "#,
        )
        .bind(emp_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| (r.get("firstname"), r.get("lastname"), r.get("role_name"))))
    }

    pub async fn create(&self, employee: &CreateEmployee) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO employees
                (firstname, lastname, email, emp_code, role_id, status, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&employee.firstname)
        .bind(&employee.lastname)
        .bind(&employee.email)
        .bind(&employee.emp_code)
        .bind(employee.role_id)
        .bind(employee.status.as_deref().unwrap_or(RecordStatus::Active.as_code()))
        .bind(&employee.created_by)
        .bind(&employee.updated_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: i32, update: &UpdateEmployee) -> AppResult<u64> {
        UpdateBuilder::new("employees", UPDATABLE_COLUMNS)
            .set_opt("firstname", update.firstname.clone())
            .set_opt("lastname", update.lastname.clone())
            .set_opt("email", update.email.clone())
            .set_opt("emp_code", update.emp_code.clone())
            .set_opt("role_id", update.role_id)
            .set_opt("status", update.status.clone())
            .set_opt("updated_by", update.updated_by.clone())
            .execute(&self.pool, id)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
