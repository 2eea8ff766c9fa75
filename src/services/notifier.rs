//! Outgoing email notifications.
//!
//! Transport settings come from the active row of the `email_accounts`
//! table; the sender identity comes from configuration. Notifications are
//! best-effort: callers log failures and move on.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use std::str::FromStr;

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
    models::employee::Employee,
    repository::Repository,
};

#[derive(Clone)]
pub struct NotifierService {
    repository: Repository,
    config: EmailConfig,
}

impl NotifierService {
    pub fn new(repository: Repository, config: EmailConfig) -> Self {
        Self { repository, config }
    }

    /// Notify an employee that their damaged return was recorded
    pub async fn send_damage_notice(
        &self,
        employee: &Employee,
        item_code: &str,
        damage_reason: Option<&str>,
    ) -> AppResult<()> {
        if !self.config.enabled {
            tracing::debug!("Email notifications disabled; skipping damage notice");
            return Ok(());
        }

        let Some(to) = employee.email.as_deref() else {
            tracing::info!(emp_code = %employee.emp_code, "No email address; skipping damage notice");
            return Ok(());
        };

        let subject = "Damaged Product Returned";
        let body = format!(
            "Employee {} has returned item {} flagged as damaged.\n\nReason: {}\n\nThe item is held for inspection and stays out of circulation until cleared.",
            employee.emp_code,
            item_code,
            damage_reason.unwrap_or("not specified"),
        );

        self.send(to, subject, &body).await
    }

    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let Some(account) = self.repository.email_accounts.active_account().await? else {
            tracing::warn!("No active email account configured; dropping notification");
            return Ok(());
        };

        let from_name = self.config.from_name.as_deref().unwrap_or("Kiosk Inventory");
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", from_name, self.config.from))
            .map_err(|e| AppError::Internal(format!("Invalid from address: {}", e)))?;

        let to_mailbox = Mailbox::from_str(to)
            .map_err(|e| AppError::Internal(format!("Invalid to address: {}", e)))?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to build email: {}", e)))?;

        let mailer = SmtpTransport::starttls_relay(&account.server)
            .map_err(|e| AppError::Internal(format!("Failed to create SMTP transport: {}", e)))?
            .port(account.port as u16)
            .credentials(Credentials::new(account.username, account.password))
            .build();

        mailer
            .send(&email)
            .map_err(|e| AppError::Internal(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}
