use crate::domain::entities::{Address, Booking, User, Vehicle};
use crate::domain::value_objects::{BookingStatus, UserRole};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};

fn timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, AppError> {
    let millis: i64 = row.try_get(column)?;
    Ok(DateTime::from_timestamp_millis(millis).unwrap_or_else(Utc::now))
}

pub(super) fn map_user_row(row: &SqliteRow) -> Result<User, AppError> {
    let role: String = row.try_get("role")?;
    Ok(User {
        id: row.try_get("id")?,
        role: UserRole::from(role.as_str()),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        account_id: None,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

pub(super) fn map_address_row(row: &SqliteRow) -> Result<Address, AppError> {
    Ok(Address {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        label: row.try_get("label")?,
        street: row.try_get("street")?,
        city: row.try_get("city")?,
        postal_code: row.try_get("postal_code")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

pub(super) fn map_vehicle_row(row: &SqliteRow) -> Result<Vehicle, AppError> {
    let capacity: i64 = row.try_get("capacity_kg")?;
    Ok(Vehicle {
        id: row.try_get("id")?,
        driver_id: row.try_get("driver_id")?,
        plate_number: row.try_get("plate_number")?,
        make: row.try_get("make")?,
        model: row.try_get("model")?,
        capacity_kg: capacity.max(0) as u32,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

pub(super) fn map_booking_row(row: &SqliteRow) -> Result<Booking, AppError> {
    let status: String = row.try_get("status")?;
    Ok(Booking {
        id: row.try_get("id")?,
        customer_id: row.try_get("customer_id")?,
        vehicle_id: row.try_get("vehicle_id")?,
        pickup: row.try_get("pickup")?,
        dropoff: row.try_get("dropoff")?,
        scheduled_at: timestamp(row, "scheduled_at")?,
        status: BookingStatus::from(status.as_str()),
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}
