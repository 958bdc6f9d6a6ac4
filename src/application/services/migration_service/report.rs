use super::id_map::IdMap;
use crate::domain::entities::{MigratedCounts, MigrationReport, RecordOutcome};
use crate::domain::value_objects::EntityKind;

/// Accumulates per-entity outcomes into the final run report. Errors and
/// warnings are append-only for the lifetime of the run.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    counts: MigratedCounts,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_error(&mut self, message: String) {
        self.errors.push(message);
    }

    /// Fold one entity type's outcomes into counts, errors, warnings and the
    /// type's id map. Only freshly written records are counted; records that
    /// already existed remotely still get an id-map entry so dependents
    /// resolve on reruns.
    pub fn absorb(&mut self, kind: EntityKind, outcomes: Vec<RecordOutcome>, id_map: &mut IdMap) {
        for outcome in outcomes {
            match outcome {
                RecordOutcome::Migrated {
                    local_id,
                    remote_id,
                    warning,
                } => {
                    self.bump(kind);
                    id_map.insert(local_id, remote_id);
                    if let Some(warning) = warning {
                        self.warnings.push(warning);
                    }
                }
                RecordOutcome::SkippedExisting {
                    local_id,
                    remote_id,
                } => {
                    id_map.insert(local_id, remote_id);
                }
                RecordOutcome::SkippedDependency { warning, .. } => {
                    self.warnings.push(warning);
                }
                RecordOutcome::Failed { error, .. } => {
                    self.errors.push(error);
                }
            }
        }
    }

    fn bump(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::User => self.counts.users += 1,
            EntityKind::Address => self.counts.addresses += 1,
            EntityKind::Vehicle => self.counts.vehicles += 1,
            EntityKind::Booking => self.counts.bookings += 1,
        }
    }

    pub fn finish(self) -> MigrationReport {
        MigrationReport {
            success: self.errors.is_empty(),
            migrated: self.counts,
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}
