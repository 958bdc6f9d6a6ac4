use crate::domain::value_objects::NaturalKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: String,
    /// Driver the vehicle is assigned to.
    pub driver_id: String,
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub capacity_kg: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(
        driver_id: String,
        plate_number: String,
        make: String,
        model: String,
        capacity_kg: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            driver_id,
            plate_number,
            make,
            model,
            capacity_kg,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::VehiclePlate(self.plate_number.clone())
    }
}
