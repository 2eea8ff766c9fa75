//! Kiosk fleet settings service: locations, machines, machine parameters
//! and outgoing SMTP accounts.

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        email_account::{CreateEmailAccount, EmailAccountView, UpdateEmailAccount},
        location::{CreateLocation, Location, UpdateLocation},
        machine::{CreateMachine, Machine, UpdateMachine},
        parameter::{CreateParameter, Parameter, UpdateParameter},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // -----------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------

    pub async fn list_locations(&self) -> AppResult<Vec<Location>> {
        self.repository.locations.list().await
    }

    pub async fn get_location(&self, id: i32) -> AppResult<Location> {
        self.repository.locations.get(id).await
    }

    pub async fn create_location(&self, location: CreateLocation) -> AppResult<i32> {
        location.validate()?;
        self.repository.locations.create(&location).await
    }

    pub async fn update_location(&self, id: i32, update: UpdateLocation) -> AppResult<()> {
        let rows = self.repository.locations.update(id, &update).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Location with id {} not found",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_location(&self, id: i32) -> AppResult<()> {
        let rows = self.repository.locations.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Location with id {} not found",
                id
            )));
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Machines
    // -----------------------------------------------------------------

    pub async fn list_machines(&self) -> AppResult<Vec<Machine>> {
        let machines = self.repository.machines.list().await?;
        if machines.is_empty() {
            return Err(AppError::NotFound("Not Found".to_string()));
        }
        Ok(machines)
    }

    pub async fn get_machine(&self, id: i32) -> AppResult<Machine> {
        self.repository.machines.get(id).await
    }

    pub async fn create_machine(&self, machine: CreateMachine) -> AppResult<i32> {
        machine.validate()?;
        if !self.repository.locations.exists(machine.location_id).await? {
            return Err(AppError::Validation(
                "Invalid location_id. Location does not exist.".to_string(),
            ));
        }
        self.repository.machines.create(&machine).await
    }

    pub async fn update_machine(&self, id: i32, update: UpdateMachine) -> AppResult<()> {
        if let Some(location_id) = update.location_id {
            if !self.repository.locations.exists(location_id).await? {
                return Err(AppError::Validation(
                    "Invalid location_id. Location does not exist.".to_string(),
                ));
            }
        }
        let rows = self.repository.machines.update(id, &update).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Machine with id {} not found",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_machine(&self, id: i32) -> AppResult<()> {
        let rows = self.repository.machines.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Machine with id {} not found",
                id
            )));
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Parameters
    // -----------------------------------------------------------------

    pub async fn list_parameters(&self) -> AppResult<Vec<Parameter>> {
        self.repository.parameters.list().await
    }

    pub async fn get_parameter(&self, id: i32) -> AppResult<Parameter> {
        self.repository.parameters.get(id).await
    }

    pub async fn create_parameter(&self, parameter: CreateParameter) -> AppResult<i32> {
        parameter.validate()?;
        self.repository.parameters.create(&parameter).await
    }

    pub async fn update_parameter(&self, id: i32, update: UpdateParameter) -> AppResult<()> {
        let rows = self.repository.parameters.update(id, &update).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Parameter with id {} not found",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_parameter(&self, id: i32) -> AppResult<()> {
        let rows = self.repository.parameters.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Parameter with id {} not found",
                id
            )));
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Email accounts
    // -----------------------------------------------------------------

    pub async fn list_email_accounts(&self) -> AppResult<Vec<EmailAccountView>> {
        let accounts = self.repository.email_accounts.list().await?;
        Ok(accounts.into_iter().map(Into::into).collect())
    }

    pub async fn get_email_account(&self, id: i32) -> AppResult<EmailAccountView> {
        Ok(self.repository.email_accounts.get(id).await?.into())
    }

    pub async fn create_email_account(&self, account: CreateEmailAccount) -> AppResult<i32> {
        account.validate()?;
        self.repository.email_accounts.create(&account).await
    }

    pub async fn update_email_account(&self, id: i32, update: UpdateEmailAccount) -> AppResult<()> {
        let rows = self.repository.email_accounts.update(id, &update).await?;
        if rows == 0 {
            return Err(AppError::NotFound(
                "Email configuration not found".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn delete_email_account(&self, id: i32) -> AppResult<()> {
        let rows = self.repository.email_accounts.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(
                "Email configuration not found".to_string(),
            ));
        }
        Ok(())
    }
}
