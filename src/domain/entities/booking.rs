use crate::domain::value_objects::{BookingStatus, NaturalKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    /// Customer who placed the booking.
    pub customer_id: String,
    /// Vehicle assigned to carry it out.
    pub vehicle_id: String,
    pub pickup: String,
    pub dropoff: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        customer_id: String,
        vehicle_id: String,
        pickup: String,
        dropoff: String,
        scheduled_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            customer_id,
            vehicle_id,
            pickup,
            dropoff,
            scheduled_at,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::BookingCustomerTime {
            customer_id: self.customer_id.clone(),
            scheduled_at: self.scheduled_at.timestamp_millis(),
        }
    }
}
