//! Employee and role directory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        employee::{CreateEmployee, Employee, EmployeeActions, UpdateEmployee},
        role::{CreateRole, Role, UpdateRole},
    },
    repository::Repository,
};

/// Kiosk actions every active employee may perform
const BASE_ACTIONS: &[&str] = &["Take Product", "Return Product", "Return Damaged Product"];

#[derive(Clone)]
pub struct DirectoryService {
    repository: Repository,
}

impl DirectoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // -----------------------------------------------------------------
    // Employees
    // -----------------------------------------------------------------

    pub async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.repository.employees.list().await
    }

    pub async fn get_employee(&self, id: i32) -> AppResult<Employee> {
        self.repository.employees.get(id).await
    }

    pub async fn create_employee(&self, employee: CreateEmployee) -> AppResult<i32> {
        employee.validate()?;
        if !self.repository.roles.exists(employee.role_id).await? {
            return Err(AppError::Validation(
                "Invalid role_id. Role does not exist.".to_string(),
            ));
        }
        self.repository.employees.create(&employee).await
    }

    pub async fn update_employee(&self, id: i32, update: UpdateEmployee) -> AppResult<()> {
        update.validate()?;
        if let Some(role_id) = update.role_id {
            if !self.repository.roles.exists(role_id).await? {
                return Err(AppError::Validation(
                    "Invalid role_id. Role does not exist.".to_string(),
                ));
            }
        }
        let rows = self.repository.employees.update(id, &update).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Employee with id {} not found",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_employee(&self, id: i32) -> AppResult<()> {
        let rows = self.repository.employees.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Employee with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Name, role and permitted kiosk actions for an active employee
    pub async fn employee_actions(&self, emp_code: &str) -> AppResult<EmployeeActions> {
        let (firstname, lastname, role_name) = self
            .repository
            .employees
            .name_and_role(emp_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Employee not found or role not assigned".to_string())
            })?;

        let role = role_name.to_lowercase();
        let mut actions: Vec<String> = BASE_ACTIONS.iter().map(|a| a.to_string()).collect();
        if role.contains("admin") {
            actions.push("Admin Mode".to_string());
        }

        Ok(EmployeeActions {
            emp_code: emp_code.to_string(),
            name: format!("{} {}", firstname, lastname),
            role,
            actions,
        })
    }

    // -----------------------------------------------------------------
    // Roles
    // -----------------------------------------------------------------

    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let roles = self.repository.roles.list().await?;
        if roles.is_empty() {
            return Err(AppError::NotFound("Not Found".to_string()));
        }
        Ok(roles)
    }

    pub async fn get_role(&self, id: i32) -> AppResult<Role> {
        self.repository.roles.get(id).await
    }

    pub async fn create_role(&self, role: CreateRole) -> AppResult<i32> {
        role.validate()?;
        self.repository.roles.create(&role).await
    }

    pub async fn update_role(&self, id: i32, update: UpdateRole) -> AppResult<()> {
        let rows = self.repository.roles.update(id, &update).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!("Role with id {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete_role(&self, id: i32) -> AppResult<()> {
        let rows = self.repository.roles.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!("Role with id {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_actions_cover_the_three_kiosk_flows() {
        assert_eq!(
            BASE_ACTIONS,
            &["Take Product", "Return Product", "Return Damaged Product"]
        );
    }
}
