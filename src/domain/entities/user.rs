use crate::domain::value_objects::{NaturalKey, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub role: UserRole,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Identifier issued by the identity service; only ever populated on the
    /// remote side, and only when account provisioning succeeded.
    pub account_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(role: UserRole, name: String, email: String, phone: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            name,
            email,
            phone,
            account_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::UserPhone(self.phone.clone())
    }

    pub fn is_driver(&self) -> bool {
        self.role == UserRole::Driver
    }
}
