use super::existence::ExistenceChecker;
use super::id_map::IdMap;
use crate::application::ports::RemoteStore;
use crate::domain::entities::{Address, MigrationOptions, RecordOutcome};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

pub(super) struct AddressMigrator {
    remote: Arc<dyn RemoteStore>,
    existence: ExistenceChecker,
    options: MigrationOptions,
    max_concurrent: usize,
}

impl AddressMigrator {
    pub(super) fn new(
        remote: Arc<dyn RemoteStore>,
        existence: ExistenceChecker,
        options: MigrationOptions,
        max_concurrent: usize,
    ) -> Self {
        Self {
            remote,
            existence,
            options,
            max_concurrent,
        }
    }

    pub(super) async fn migrate(&self, addresses: &[Address], users: &IdMap) -> Vec<RecordOutcome> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let futures = addresses.iter().map(|address| {
            let semaphore = semaphore.clone();
            async move {
                let _permit = match semaphore.acquire().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        return RecordOutcome::Failed {
                            local_id: address.id.clone(),
                            error: format!("address {}: worker pool closed: {}", address.id, e),
                        };
                    }
                };
                self.migrate_one(address, users).await
            }
        });
        join_all(futures).await
    }

    async fn migrate_one(&self, address: &Address, users: &IdMap) -> RecordOutcome {
        // An owner missing from the map means the user failed (and was
        // already reported) earlier in this run; skipping is a warning.
        let owner_id = match users.resolve(&address.user_id) {
            Some(owner_id) => owner_id.to_string(),
            None => {
                return RecordOutcome::SkippedDependency {
                    local_id: address.id.clone(),
                    warning: format!(
                        "address {} skipped: user {} not migrated",
                        address.id, address.user_id
                    ),
                };
            }
        };

        let mut candidate = address.clone();
        candidate.user_id = owner_id;

        let existing = match self.existence.find(&candidate.natural_key()).await {
            Ok(existing) => existing,
            Err(e) => {
                return RecordOutcome::Failed {
                    local_id: address.id.clone(),
                    error: format!("address {}: existence check failed: {}", address.id, e),
                };
            }
        };

        if let Some(remote_id) = existing {
            if self.options.skip_existing {
                debug!(address_id = %address.id, %remote_id, "address already migrated, skipping");
                return RecordOutcome::SkippedExisting {
                    local_id: address.id.clone(),
                    remote_id,
                };
            }
        }

        let remote_id = if self.options.dry_run {
            candidate.id.clone()
        } else {
            match self.remote.create_address(&candidate).await {
                Ok(id) => id,
                Err(e) => {
                    return RecordOutcome::Failed {
                        local_id: address.id.clone(),
                        error: format!(
                            "address {} ({}): write failed: {}",
                            address.id, address.label, e
                        ),
                    };
                }
            }
        };

        RecordOutcome::Migrated {
            local_id: address.id.clone(),
            remote_id,
            warning: None,
        }
    }
}
