use super::existence::ExistenceChecker;
use super::id_map::IdMap;
use crate::application::ports::RemoteStore;
use crate::domain::entities::{Booking, MigrationOptions, RecordOutcome};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

/// Runs last: bookings resolve both a customer and a vehicle through the
/// maps built by the earlier phases.
pub(super) struct BookingMigrator {
    remote: Arc<dyn RemoteStore>,
    existence: ExistenceChecker,
    options: MigrationOptions,
    max_concurrent: usize,
}

impl BookingMigrator {
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

    pub(super) async fn migrate(
        &self,
        bookings: &[Booking],
        users: &IdMap,
        vehicles: &IdMap,
    ) -> Vec<RecordOutcome> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let futures = bookings.iter().map(|booking| {
            let semaphore = semaphore.clone();
            async move {
                let _permit = match semaphore.acquire().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        return RecordOutcome::Failed {
                            local_id: booking.id.clone(),
                            error: format!("booking {}: worker pool closed: {}", booking.id, e),
                        };
                    }
                };
                self.migrate_one(booking, users, vehicles).await
            }
        });
        join_all(futures).await
    }

    async fn migrate_one(
        &self,
        booking: &Booking,
        users: &IdMap,
        vehicles: &IdMap,
    ) -> RecordOutcome {
        let customer_id = match users.resolve(&booking.customer_id) {
            Some(customer_id) => customer_id.to_string(),
            None => {
                return RecordOutcome::SkippedDependency {
                    local_id: booking.id.clone(),
                    warning: format!(
                        "booking {} skipped: customer {} not migrated",
                        booking.id, booking.customer_id
                    ),
                };
            }
        };

        let vehicle_id = match vehicles.resolve(&booking.vehicle_id) {
            Some(vehicle_id) => vehicle_id.to_string(),
            None => {
                return RecordOutcome::SkippedDependency {
                    local_id: booking.id.clone(),
                    warning: format!(
                        "booking {} skipped: vehicle {} not migrated",
                        booking.id, booking.vehicle_id
                    ),
                };
            }
        };

        let mut candidate = booking.clone();
        candidate.customer_id = customer_id;
        candidate.vehicle_id = vehicle_id;

        let existing = match self.existence.find(&candidate.natural_key()).await {
            Ok(existing) => existing,
            Err(e) => {
                return RecordOutcome::Failed {
                    local_id: booking.id.clone(),
                    error: format!("booking {}: existence check failed: {}", booking.id, e),
                };
            }
        };

        if let Some(remote_id) = existing {
            if self.options.skip_existing {
                debug!(booking_id = %booking.id, %remote_id, "booking already migrated, skipping");
                return RecordOutcome::SkippedExisting {
                    local_id: booking.id.clone(),
                    remote_id,
                };
            }
        }

        let remote_id = if self.options.dry_run {
            candidate.id.clone()
        } else {
            match self.remote.create_booking(&candidate).await {
                Ok(id) => id,
                Err(e) => {
                    return RecordOutcome::Failed {
                        local_id: booking.id.clone(),
                        error: format!("booking {}: write failed: {}", booking.id, e),
                    };
                }
            }
        };

        RecordOutcome::Migrated {
            local_id: booking.id.clone(),
            remote_id,
            warning: None,
        }
    }
}
