use crate::domain::value_objects::NaturalKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub id: String,
    /// Owning user.
    pub user_id: String,
    pub label: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Address {
    pub fn new(
        user_id: String,
        label: String,
        street: String,
        city: String,
        postal_code: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            label,
            street,
            city,
            postal_code,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::AddressOwnerLabel {
            owner_id: self.user_id.clone(),
            label: self.label.clone(),
        }
    }
}
