pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::services::migration_service::{MigrationService, MigrationStatus};
pub use application::services::validation_service::ValidationService;
pub use domain::entities::migration::{
    MigratedCounts, MigrationOptions, MigrationReport, ValidationReport,
};
pub use shared::error::{AppError, Result};

/// Initialize tracing for binaries and integration tests.
///
/// Safe to call once per process; reads `RUST_LOG` when set.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hauler_migration=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
