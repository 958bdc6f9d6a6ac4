mod addresses;
mod bookings;
mod existence;
mod id_map;
mod identity;
mod report;
mod users;
mod vehicles;


pub use existence::ExistenceChecker;
pub use id_map::IdMap;
pub use identity::IdentityProvisioner;

use crate::application::ports::{IdentityService, LocalStore, RemoteStore};
use crate::domain::entities::{MigrationOptions, MigrationReport};
use crate::domain::value_objects::EntityKind;
use crate::shared::config::MigrationConfig;
use addresses::AddressMigrator;
use bookings::BookingMigrator;
use report::ReportBuilder;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use users::UserMigrator;
use vehicles::VehicleMigrator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationStatus {
    pub is_running: bool,
    pub last_run: Option<i64>,
    pub last_success: Option<bool>,
}

/// Top-level driver of one migration run. Owns the run lifecycle and the
/// fixed entity ordering: users first, then addresses and vehicles (both
/// only need the user map), bookings last.
///
/// One run at a time per instance; callers must serialize `migrate_all`.
pub struct MigrationService {
    local: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteStore>,
    identity: Arc<dyn IdentityService>,
    config: MigrationConfig,
    status: Arc<RwLock<MigrationStatus>>,
}

impl MigrationService {
    pub fn new(
        local: Arc<dyn LocalStore>,
        remote: Arc<dyn RemoteStore>,
        identity: Arc<dyn IdentityService>,
    ) -> Self {
        Self::with_config(local, remote, identity, MigrationConfig::default())
    }

    pub fn with_config(
        local: Arc<dyn LocalStore>,
        remote: Arc<dyn RemoteStore>,
        identity: Arc<dyn IdentityService>,
        config: MigrationConfig,
    ) -> Self {
        Self {
            local,
            remote,
            identity,
            config,
            status: Arc::new(RwLock::new(MigrationStatus {
                is_running: false,
                last_run: None,
                last_success: None,
            })),
        }
    }

    pub async fn status(&self) -> MigrationStatus {
        self.status.read().await.clone()
    }

    /// Migrate the entire local dataset. Always returns a complete report;
    /// per-record failures are collected, never propagated.
    pub async fn migrate_all(&self, options: MigrationOptions) -> MigrationReport {
        {
            let mut status = self.status.write().await;
            status.is_running = true;
        }

        let report = self.run(options).await;

        let mut status = self.status.write().await;
        status.is_running = false;
        status.last_run = Some(chrono::Utc::now().timestamp());
        status.last_success = Some(report.success);

        report
    }

    async fn run(&self, options: MigrationOptions) -> MigrationReport {
        let mut report = ReportBuilder::new();

        if let Err(e) = self.remote.health_check().await {
            warn!("migration aborted before start: {}", e);
            report.record_error(format!("remote store unreachable: {}", e));
            return report.finish();
        }

        // The whole dataset is loaded up front; a source read failure means
        // there is nothing meaningful to migrate.
        let users = match self.local.list_users().await {
            Ok(records) => records,
            Err(e) => {
                report.record_error(format!("failed to load local users: {}", e));
                return report.finish();
            }
        };
        let addresses = match self.local.list_addresses().await {
            Ok(records) => records,
            Err(e) => {
                report.record_error(format!("failed to load local addresses: {}", e));
                return report.finish();
            }
        };
        let vehicles = match self.local.list_vehicles().await {
            Ok(records) => records,
            Err(e) => {
                report.record_error(format!("failed to load local vehicles: {}", e));
                return report.finish();
            }
        };
        let bookings = match self.local.list_bookings().await {
            Ok(records) => records,
            Err(e) => {
                report.record_error(format!("failed to load local bookings: {}", e));
                return report.finish();
            }
        };

        info!(
            users = users.len(),
            addresses = addresses.len(),
            vehicles = vehicles.len(),
            bookings = bookings.len(),
            dry_run = options.dry_run,
            skip_existing = options.skip_existing,
            "starting migration run"
        );

        let limit = self.config.max_concurrent_writes.max(1);
        let existence = ExistenceChecker::new(self.remote.clone());

        let mut user_map = IdMap::new();
        let user_migrator = UserMigrator::new(
            self.remote.clone(),
            existence.clone(),
            IdentityProvisioner::new(self.identity.clone()),
            options,
            limit,
        );
        let outcomes = user_migrator.migrate(&users).await;
        report.absorb(EntityKind::User, outcomes, &mut user_map);

        let mut address_map = IdMap::new();
        let address_migrator =
            AddressMigrator::new(self.remote.clone(), existence.clone(), options, limit);
        let outcomes = address_migrator.migrate(&addresses, &user_map).await;
        report.absorb(EntityKind::Address, outcomes, &mut address_map);

        let mut vehicle_map = IdMap::new();
        let vehicle_migrator =
            VehicleMigrator::new(self.remote.clone(), existence.clone(), options, limit);
        let outcomes = vehicle_migrator.migrate(&vehicles, &user_map).await;
        report.absorb(EntityKind::Vehicle, outcomes, &mut vehicle_map);

        let mut booking_map = IdMap::new();
        let booking_migrator =
            BookingMigrator::new(self.remote.clone(), existence, options, limit);
        let outcomes = booking_migrator
            .migrate(&bookings, &user_map, &vehicle_map)
            .await;
        report.absorb(EntityKind::Booking, outcomes, &mut booking_map);

        let report = report.finish();
        info!(
            migrated = report.migrated.total(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            success = report.success,
            "migration run finished"
        );
        report
    }
}
