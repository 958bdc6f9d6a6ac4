pub mod migration_service;
pub mod validation_service;

pub use migration_service::{MigrationService, MigrationStatus};
pub use validation_service::ValidationService;

#[cfg(test)]
pub(crate) mod test_support;
