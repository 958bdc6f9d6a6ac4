use crate::domain::entities::{Address, Booking, User, Vehicle};
use crate::domain::value_objects::EntityKind;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Server-side target store. Creates are upserts keyed on the record id, so
/// re-writing an already-migrated record is safe.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Cheap reachability probe run before anything else in a migration.
    async fn health_check(&self) -> Result<(), AppError>;

    // Natural-key lookups used for idempotent skip detection.
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>, AppError>;
    async fn find_address_by_owner_label(
        &self,
        owner_id: &str,
        label: &str,
    ) -> Result<Option<Address>, AppError>;
    async fn find_vehicle_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, AppError>;
    async fn find_booking_by_customer_time(
        &self,
        customer_id: &str,
        scheduled_at_millis: i64,
    ) -> Result<Option<Booking>, AppError>;

    // Writes. Each returns the id the record was stored under.
    async fn create_user(&self, user: &User) -> Result<String, AppError>;
    async fn create_address(&self, address: &Address) -> Result<String, AppError>;
    async fn create_vehicle(&self, vehicle: &Vehicle) -> Result<String, AppError>;
    async fn create_booking(&self, booking: &Booking) -> Result<String, AppError>;

    /// Link an identity-service account to an already-written user row.
    async fn attach_account(&self, user_id: &str, account_id: &str) -> Result<(), AppError>;

    // Validation surface.
    async fn count(&self, kind: EntityKind) -> Result<u64, AppError>;
    async fn list_addresses(&self) -> Result<Vec<Address>, AppError>;
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError>;
    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError>;
    async fn user_exists(&self, id: &str) -> Result<bool, AppError>;
    async fn vehicle_exists(&self, id: &str) -> Result<bool, AppError>;
}
