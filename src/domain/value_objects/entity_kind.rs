use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Address,
    Vehicle,
    Booking,
}

impl EntityKind {
    /// Dependency order of the migration run. Later kinds resolve foreign
    /// keys through the id map built by earlier ones.
    pub const MIGRATION_ORDER: [EntityKind; 4] = [
        EntityKind::User,
        EntityKind::Address,
        EntityKind::Vehicle,
        EntityKind::Booking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Address => "address",
            EntityKind::Vehicle => "vehicle",
            EntityKind::Booking => "booking",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
