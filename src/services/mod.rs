//! Business logic services

pub mod catalog;
pub mod directory;
pub mod ledgers;
pub mod notifier;
pub mod settings;
pub mod workflow;

use crate::{config::EmailConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub workflow: workflow::WorkflowService,
    pub catalog: catalog::CatalogService,
    pub ledgers: ledgers::LedgersService,
    pub directory: directory::DirectoryService,
    pub settings: settings::SettingsService,
    pub notifier: notifier::NotifierService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, email_config: EmailConfig) -> Self {
        let notifier = notifier::NotifierService::new(repository.clone(), email_config);
        Self {
            workflow: workflow::WorkflowService::new(repository.clone(), notifier.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            ledgers: ledgers::LedgersService::new(repository.clone()),
            directory: directory::DirectoryService::new(repository.clone()),
            settings: settings::SettingsService::new(repository),
            notifier,
        }
    }
}
