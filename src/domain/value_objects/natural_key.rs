use super::EntityKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-id field combination used to detect an equivalent record that was
/// already written remotely by an earlier run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaturalKey {
    UserPhone(String),
    VehiclePlate(String),
    AddressOwnerLabel { owner_id: String, label: String },
    BookingCustomerTime { customer_id: String, scheduled_at: i64 },
}

impl NaturalKey {
    pub fn entity_kind(&self) -> EntityKind {
        match self {
            NaturalKey::UserPhone(_) => EntityKind::User,
            NaturalKey::VehiclePlate(_) => EntityKind::Vehicle,
            NaturalKey::AddressOwnerLabel { .. } => EntityKind::Address,
            NaturalKey::BookingCustomerTime { .. } => EntityKind::Booking,
        }
    }

    /// Canonical string form, used in log lines and composite lookups.
    pub fn canonical(&self) -> String {
        match self {
            NaturalKey::UserPhone(phone) => phone.clone(),
            NaturalKey::VehiclePlate(plate) => plate.clone(),
            NaturalKey::AddressOwnerLabel { owner_id, label } => {
                format!("{}:{}", owner_id, label)
            }
            NaturalKey::BookingCustomerTime {
                customer_id,
                scheduled_at,
            } => format!("{}:{}", customer_id, scheduled_at),
        }
    }
}

impl fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}
