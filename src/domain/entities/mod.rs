pub mod address;
pub mod booking;
pub mod migration;
pub mod user;
pub mod vehicle;

pub use address::Address;
pub use booking::Booking;
pub use migration::{
    MigratedCounts, MigrationOptions, MigrationReport, RecordOutcome, ValidationReport,
};
pub use user::User;
pub use vehicle::Vehicle;
