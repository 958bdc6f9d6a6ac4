use crate::domain::entities::{Address, Booking, User, Vehicle};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Device-resident source store. Read-only for the engine; records are
/// loaded fresh at the start of every run.
#[async_trait]
pub trait LocalStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn list_addresses(&self) -> Result<Vec<Address>, AppError>;
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError>;
    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError>;
    async fn get_user(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn get_vehicle(&self, id: &str) -> Result<Option<Vehicle>, AppError>;
}
