use crate::application::ports::{LocalStore, RemoteStore};
use crate::domain::entities::ValidationReport;
use crate::domain::value_objects::EntityKind;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Post-hoc integrity check: local vs remote counts per entity type, plus a
/// walk of every dependent remote record's foreign keys. Callable at any
/// time and performs no writes.
pub struct ValidationService {
    local: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteStore>,
}

impl ValidationService {
    pub fn new(local: Arc<dyn LocalStore>, remote: Arc<dyn RemoteStore>) -> Self {
        Self { local, remote }
    }

    pub async fn validate(&self) -> ValidationReport {
        let mut issues = Vec::new();

        self.check_counts(&mut issues).await;
        self.check_references(&mut issues).await;

        info!(issues = issues.len(), "validation pass finished");
        ValidationReport {
            valid: issues.is_empty(),
            issues,
        }
    }

    async fn check_counts(&self, issues: &mut Vec<String>) {
        for kind in EntityKind::MIGRATION_ORDER {
            let local_count = match self.local_count(kind).await {
                Ok(count) => count,
                Err(e) => {
                    issues.push(format!("could not read local {} records: {}", kind, e));
                    continue;
                }
            };
            let remote_count = match self.remote.count(kind).await {
                Ok(count) => count,
                Err(e) => {
                    issues.push(format!("could not count remote {} records: {}", kind, e));
                    continue;
                }
            };
            if local_count != remote_count {
                issues.push(format!(
                    "{} count mismatch: {} local vs {} remote",
                    kind, local_count, remote_count
                ));
            }
        }
    }

    async fn local_count(&self, kind: EntityKind) -> Result<u64, AppError> {
        let count = match kind {
            EntityKind::User => self.local.list_users().await?.len(),
            EntityKind::Address => self.local.list_addresses().await?.len(),
            EntityKind::Vehicle => self.local.list_vehicles().await?.len(),
            EntityKind::Booking => self.local.list_bookings().await?.len(),
        };
        Ok(count as u64)
    }

    async fn check_references(&self, issues: &mut Vec<String>) {
        match self.remote.list_addresses().await {
            Ok(addresses) => {
                for address in addresses {
                    self.check_user_ref(issues, "address", &address.id, &address.user_id)
                        .await;
                }
            }
            Err(e) => issues.push(format!("could not list remote addresses: {}", e)),
        }

        match self.remote.list_vehicles().await {
            Ok(vehicles) => {
                for vehicle in vehicles {
                    self.check_user_ref(issues, "vehicle", &vehicle.id, &vehicle.driver_id)
                        .await;
                }
            }
            Err(e) => issues.push(format!("could not list remote vehicles: {}", e)),
        }

        match self.remote.list_bookings().await {
            Ok(bookings) => {
                for booking in bookings {
                    self.check_user_ref(issues, "booking", &booking.id, &booking.customer_id)
                        .await;
                    match self.remote.vehicle_exists(&booking.vehicle_id).await {
                        Ok(true) => {}
                        Ok(false) => issues.push(format!(
                            "remote booking {} references missing vehicle {}",
                            booking.id, booking.vehicle_id
                        )),
                        Err(e) => issues.push(format!(
                            "could not resolve vehicle {} for booking {}: {}",
                            booking.vehicle_id, booking.id, e
                        )),
                    }
                }
            }
            Err(e) => issues.push(format!("could not list remote bookings: {}", e)),
        }
    }

    async fn check_user_ref(
        &self,
        issues: &mut Vec<String>,
        record_kind: &str,
        record_id: &str,
        user_id: &str,
    ) {
        match self.remote.user_exists(user_id).await {
            Ok(true) => {}
            Ok(false) => issues.push(format!(
                "remote {} {} references missing user {}",
                record_kind, record_id, user_id
            )),
            Err(e) => issues.push(format!(
                "could not resolve user {} for {} {}: {}",
                user_id, record_kind, record_id, e
            )),
        }
    }
}
