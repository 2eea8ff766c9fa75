//! Outgoing SMTP account repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        email_account::{CreateEmailAccount, EmailAccount, UpdateEmailAccount},
        enums::RecordStatus,
    },
    repository::sql::UpdateBuilder,
};

const UPDATABLE_COLUMNS: &[&str] = &[
    "username",
    "password",
    "server",
    "port",
    "smtp_format",
    "status",
    "updated_by",
];

#[derive(Clone)]
pub struct EmailAccountsRepository {
    pool: Pool<Postgres>,
}

impl EmailAccountsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<EmailAccount>> {
        let accounts = sqlx::query_as::<_, EmailAccount>("SELECT * FROM email_accounts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(accounts)
    }

    pub async fn get(&self, id: i32) -> AppResult<EmailAccount> {
        sqlx::query_as::<_, EmailAccount>("SELECT * FROM email_accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Email account with id {} not found", id)))
    }

    /// The account used for outgoing notifications, if one is configured
    pub async fn active_account(&self) -> AppResult<Option<EmailAccount>> {
        let account = sqlx::query_as::<_, EmailAccount>(
            "SELECT * FROM email_accounts WHERE status = 'Active' ORDER BY id LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    pub async fn create(&self, account: &CreateEmailAccount) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO email_accounts
                (username, password, server, port, smtp_format, status, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id
            "#,
        )
        .bind(&account.username)
        .bind(&account.password)
        .bind(&account.server)
        .bind(account.port)
        .bind(&account.smtp_format)
        .bind(account.status.as_deref().unwrap_or(RecordStatus::Active.as_code()))
        .bind(account.created_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: i32, update: &UpdateEmailAccount) -> AppResult<u64> {
        UpdateBuilder::new("email_accounts", UPDATABLE_COLUMNS)
            .set_opt("username", update.username.clone())
            .set_opt("password", update.password.clone())
            .set_opt("server", update.server.clone())
            .set_opt("port", update.port)
            .set_opt("smtp_format", update.smtp_format.clone())
            .set_opt("status", update.status.clone())
            .set_opt("updated_by", update.updated_by)
            .execute(&self.pool, id)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM email_accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
