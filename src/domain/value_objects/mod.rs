pub mod booking_status;
pub mod entity_kind;
pub mod natural_key;
pub mod user_role;

pub use booking_status::BookingStatus;
pub use entity_kind::EntityKind;
pub use natural_key::NaturalKey;
pub use user_role::UserRole;
