use crate::shared::error::AppError;
use async_trait::async_trait;

/// Account provisioning backend. The protocol behind it is out of scope;
/// failures here are always survivable for the migration.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Register a credential pair and return the issued account id.
    async fn register(&self, email: &str, password: &str) -> Result<String, AppError>;
}
