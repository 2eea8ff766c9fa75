//! Repository layer for database operations

pub mod categories;
pub mod damaged;
pub mod email_accounts;
pub mod employees;
pub mod inventory;
pub mod listings;
pub mod locations;
pub mod machines;
pub mod parameters;
pub mod roles;
pub mod sql;
pub mod unreturned;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub categories: categories::CategoriesRepository,
    pub inventory: inventory::InventoryRepository,
    pub listings: listings::ListingsRepository,
    pub unreturned: unreturned::UnreturnedRepository,
    pub damaged: damaged::DamagedRepository,
    pub employees: employees::EmployeesRepository,
    pub roles: roles::RolesRepository,
    pub locations: locations::LocationsRepository,
    pub machines: machines::MachinesRepository,
    pub parameters: parameters::ParametersRepository,
    pub email_accounts: email_accounts::EmailAccountsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            categories: categories::CategoriesRepository::new(pool.clone()),
            inventory: inventory::InventoryRepository::new(pool.clone()),
            listings: listings::ListingsRepository::new(pool.clone()),
            unreturned: unreturned::UnreturnedRepository::new(pool.clone()),
            damaged: damaged::DamagedRepository::new(pool.clone()),
            employees: employees::EmployeesRepository::new(pool.clone()),
            roles: roles::RolesRepository::new(pool.clone()),
            locations: locations::LocationsRepository::new(pool.clone()),
            machines: machines::MachinesRepository::new(pool.clone()),
            parameters: parameters::ParametersRepository::new(pool.clone()),
            email_accounts: email_accounts::EmailAccountsRepository::new(pool.clone()),
            pool,
        }
    }
}
