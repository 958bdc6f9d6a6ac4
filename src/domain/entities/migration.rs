use serde::{Deserialize, Serialize};

/// Caller-supplied switches for one migration run. Immutable for the run;
/// the engine assumes no defaults beyond what the caller passed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MigrationOptions {
    /// Skip records whose natural key already resolves remotely.
    pub skip_existing: bool,
    /// Provision a login account for each migrated user.
    pub create_auth_accounts: bool,
    /// Run the full algorithm but replace remote writes with no-ops.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigratedCounts {
    pub users: u32,
    pub addresses: u32,
    pub vehicles: u32,
    pub bookings: u32,
}

impl MigratedCounts {
    pub fn total(&self) -> u32 {
        self.users + self.addresses + self.vehicles + self.bookings
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationReport {
    pub success: bool,
    pub migrated: MigratedCounts,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<String>,
}

/// What happened to one record during a run. Migrators return these instead
/// of letting errors cross the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Migrated {
        local_id: String,
        remote_id: String,
        /// Non-fatal degradation, e.g. identity provisioning failed after the
        /// row write succeeded.
        warning: Option<String>,
    },
    SkippedExisting {
        local_id: String,
        /// Id of the equivalent record already present remotely. Recorded in
        /// the id map so dependents keep resolving on reruns.
        remote_id: String,
    },
    SkippedDependency {
        local_id: String,
        warning: String,
    },
    Failed {
        local_id: String,
        error: String,
    },
}
