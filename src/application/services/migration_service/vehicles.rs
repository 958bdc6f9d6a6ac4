use super::existence::ExistenceChecker;
use super::id_map::IdMap;
use crate::application::ports::RemoteStore;
use crate::domain::entities::{MigrationOptions, RecordOutcome, Vehicle};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

pub(super) struct VehicleMigrator {
    remote: Arc<dyn RemoteStore>,
    existence: ExistenceChecker,
    options: MigrationOptions,
    max_concurrent: usize,
}

impl VehicleMigrator {
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

    pub(super) async fn migrate(&self, vehicles: &[Vehicle], users: &IdMap) -> Vec<RecordOutcome> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let futures = vehicles.iter().map(|vehicle| {
            let semaphore = semaphore.clone();
            async move {
                let _permit = match semaphore.acquire().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        return RecordOutcome::Failed {
                            local_id: vehicle.id.clone(),
                            error: format!("vehicle {}: worker pool closed: {}", vehicle.id, e),
                        };
                    }
                };
                self.migrate_one(vehicle, users).await
            }
        });
        join_all(futures).await
    }

    async fn migrate_one(&self, vehicle: &Vehicle, users: &IdMap) -> RecordOutcome {
        let driver_id = match users.resolve(&vehicle.driver_id) {
            Some(driver_id) => driver_id.to_string(),
            None => {
                return RecordOutcome::SkippedDependency {
                    local_id: vehicle.id.clone(),
                    warning: format!(
                        "vehicle {} skipped: user {} not migrated",
                        vehicle.id, vehicle.driver_id
                    ),
                };
            }
        };

        let mut candidate = vehicle.clone();
        candidate.driver_id = driver_id;

        let existing = match self.existence.find(&candidate.natural_key()).await {
            Ok(existing) => existing,
            Err(e) => {
                return RecordOutcome::Failed {
                    local_id: vehicle.id.clone(),
                    error: format!("vehicle {}: existence check failed: {}", vehicle.id, e),
                };
            }
        };

        if let Some(remote_id) = existing {
            if self.options.skip_existing {
                debug!(vehicle_id = %vehicle.id, %remote_id, "vehicle already migrated, skipping");
                return RecordOutcome::SkippedExisting {
                    local_id: vehicle.id.clone(),
                    remote_id,
                };
            }
        }

        let remote_id = if self.options.dry_run {
            candidate.id.clone()
        } else {
            match self.remote.create_vehicle(&candidate).await {
                Ok(id) => id,
                Err(e) => {
                    return RecordOutcome::Failed {
                        local_id: vehicle.id.clone(),
                        error: format!(
                            "vehicle {} ({}): write failed: {}",
                            vehicle.id, vehicle.plate_number, e
                        ),
                    };
                }
            }
        };

        RecordOutcome::Migrated {
            local_id: vehicle.id.clone(),
            remote_id,
            warning: None,
        }
    }
}
