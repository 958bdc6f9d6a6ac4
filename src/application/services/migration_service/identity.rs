use crate::application::ports::IdentityService;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Wraps account creation for migrated users. Every failure mode here is
/// non-fatal; the user migrator turns them into warnings.
#[derive(Clone)]
pub struct IdentityProvisioner {
    identity: Arc<dyn IdentityService>,
}

impl IdentityProvisioner {
    pub fn new(identity: Arc<dyn IdentityService>) -> Self {
        Self { identity }
    }

    /// Register an account for the given email and return the issued id.
    /// Migrated users get a one-time credential; they reset it on first login.
    pub async fn provision(&self, email: &str) -> Result<String, AppError> {
        let one_time_credential = format!("otc-{}", uuid::Uuid::new_v4());
        self.identity.register(email, &one_time_credential).await
    }
}
