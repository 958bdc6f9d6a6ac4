use super::existence::ExistenceChecker;
use super::identity::IdentityProvisioner;
use crate::application::ports::RemoteStore;
use crate::domain::entities::{MigrationOptions, RecordOutcome, User};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

/// Migrates the user record set. Runs first; the id map it produces is what
/// every other entity type resolves its owner foreign keys through.
pub(super) struct UserMigrator {
    remote: Arc<dyn RemoteStore>,
    existence: ExistenceChecker,
    provisioner: IdentityProvisioner,
    options: MigrationOptions,
    max_concurrent: usize,
}

impl UserMigrator {
    pub(super) fn new(
        remote: Arc<dyn RemoteStore>,
        existence: ExistenceChecker,
        provisioner: IdentityProvisioner,
        options: MigrationOptions,
        max_concurrent: usize,
    ) -> Self {
        Self {
            remote,
            existence,
            provisioner,
            options,
            max_concurrent,
        }
    }

    pub(super) async fn migrate(&self, users: &[User]) -> Vec<RecordOutcome> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let futures = users.iter().map(|user| {
            let semaphore = semaphore.clone();
            async move {
                let _permit = match semaphore.acquire().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        return RecordOutcome::Failed {
                            local_id: user.id.clone(),
                            error: format!("user {}: worker pool closed: {}", user.id, e),
                        };
                    }
                };
                self.migrate_one(user).await
            }
        });
        join_all(futures).await
    }

    async fn migrate_one(&self, user: &User) -> RecordOutcome {
        let existing = match self.existence.find(&user.natural_key()).await {
            Ok(existing) => existing,
            Err(e) => {
                return RecordOutcome::Failed {
                    local_id: user.id.clone(),
                    error: format!("user {}: existence check failed: {}", user.id, e),
                };
            }
        };

        if let Some(remote_id) = existing {
            if self.options.skip_existing {
                debug!(user_id = %user.id, %remote_id, "user already migrated, skipping");
                return RecordOutcome::SkippedExisting {
                    local_id: user.id.clone(),
                    remote_id,
                };
            }
        }

        let remote_id = if self.options.dry_run {
            user.id.clone()
        } else {
            match self.remote.create_user(user).await {
                Ok(id) => id,
                Err(e) => {
                    return RecordOutcome::Failed {
                        local_id: user.id.clone(),
                        error: format!("user {} ({}): write failed: {}", user.id, user.name, e),
                    };
                }
            }
        };

        let warning = if self.options.create_auth_accounts && !self.options.dry_run {
            self.provision_account(user, &remote_id).await
        } else {
            None
        };

        RecordOutcome::Migrated {
            local_id: user.id.clone(),
            remote_id,
            warning,
        }
    }

    /// Account creation runs after the row write succeeded. If it fails the
    /// row stays migrated and the user is left without a login (degraded
    /// mode); the same holds if the account cannot be linked to the row.
    async fn provision_account(&self, user: &User, remote_id: &str) -> Option<String> {
        match self.provisioner.provision(&user.email).await {
            Ok(account_id) => {
                match self.remote.attach_account(remote_id, &account_id).await {
                    Ok(()) => None,
                    Err(e) => Some(format!(
                        "user {}: account {} created but not linked to row: {}",
                        user.id, account_id, e
                    )),
                }
            }
            Err(e) => Some(format!(
                "user {}: account provisioning failed: {}",
                user.id, e
            )),
        }
    }
}
