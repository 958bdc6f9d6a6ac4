use crate::application::ports::RemoteStore;
use crate::domain::value_objects::NaturalKey;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Detects an equivalent remote record by natural key and returns its remote
/// id. The key must be built from a record whose foreign keys were already
/// rewritten through the id map, so composites match what an earlier run
/// would have written.
#[derive(Clone)]
pub struct ExistenceChecker {
    remote: Arc<dyn RemoteStore>,
}

impl ExistenceChecker {
    pub fn new(remote: Arc<dyn RemoteStore>) -> Self {
        Self { remote }
    }

    pub async fn find(&self, key: &NaturalKey) -> Result<Option<String>, AppError> {
        match key {
            NaturalKey::UserPhone(phone) => {
                let found = self.remote.find_user_by_phone(phone).await?;
                Ok(found.map(|u| u.id))
            }
            NaturalKey::VehiclePlate(plate) => {
                let found = self.remote.find_vehicle_by_plate(plate).await?;
                Ok(found.map(|v| v.id))
            }
            NaturalKey::AddressOwnerLabel { owner_id, label } => {
                let found = self
                    .remote
                    .find_address_by_owner_label(owner_id, label)
                    .await?;
                Ok(found.map(|a| a.id))
            }
            NaturalKey::BookingCustomerTime {
                customer_id,
                scheduled_at,
            } => {
                let found = self
                    .remote
                    .find_booking_by_customer_time(customer_id, *scheduled_at)
                    .await?;
                Ok(found.map(|b| b.id))
            }
        }
    }
}
