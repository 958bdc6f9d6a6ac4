use super::connection_pool::ConnectionPool;
use super::mapper::{map_address_row, map_booking_row, map_user_row, map_vehicle_row};
use super::queries::{
    SELECT_ALL_ADDRESSES, SELECT_ALL_BOOKINGS, SELECT_ALL_USERS, SELECT_ALL_VEHICLES,
    SELECT_USER_BY_ID, SELECT_VEHICLE_BY_ID,
};
use crate::application::ports::LocalStore;
use crate::domain::entities::{Address, Booking, User, Vehicle};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// SQLite-backed view of the device-resident dataset. The engine only ever
/// reads through this adapter; the app owns the schema and the writes.
pub struct SqliteLocalStore {
    pool: ConnectionPool,
}

impl SqliteLocalStore {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocalStore for SqliteLocalStore {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(SELECT_ALL_USERS)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            users.push(map_user_row(&row)?);
        }
        Ok(users)
    }

    async fn list_addresses(&self) -> Result<Vec<Address>, AppError> {
        let rows = sqlx::query(SELECT_ALL_ADDRESSES)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut addresses = Vec::with_capacity(rows.len());
        for row in rows {
            addresses.push(map_address_row(&row)?);
        }
        Ok(addresses)
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        let rows = sqlx::query(SELECT_ALL_VEHICLES)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut vehicles = Vec::with_capacity(rows.len());
        for row in rows {
            vehicles.push(map_vehicle_row(&row)?);
        }
        Ok(vehicles)
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query(SELECT_ALL_BOOKINGS)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut bookings = Vec::with_capacity(rows.len());
        for row in rows {
            bookings.push(map_booking_row(&row)?);
        }
        Ok(bookings)
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(SELECT_USER_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_user_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_vehicle(&self, id: &str) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query(SELECT_VEHICLE_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_vehicle_row(&row)?)),
            None => Ok(None),
        }
    }
}
