//! Stateful in-memory collaborators for migration and validation tests.

use crate::application::ports::{IdentityService, LocalStore, RemoteStore};
use crate::domain::entities::{Address, Booking, User, Vehicle};
use crate::domain::value_objects::{EntityKind, UserRole};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub addresses: Vec<Address>,
    pub vehicles: Vec<Vehicle>,
    pub bookings: Vec<Booking>,
}

/// Three users (admin, driver, customer), two addresses, two vehicles and
/// two bookings, all with deterministic ids and consistent foreign keys.
pub fn sample_dataset() -> Dataset {
    let mut admin = User::new(
        UserRole::Admin,
        "Alice Admin".into(),
        "alice@hauler.test".into(),
        "+33600000001".into(),
    );
    admin.id = "user-admin".into();
    let mut driver = User::new(
        UserRole::Driver,
        "Dan Driver".into(),
        "dan@hauler.test".into(),
        "+33600000002".into(),
    );
    driver.id = "user-driver".into();
    let mut customer = User::new(
        UserRole::Customer,
        "Cleo Customer".into(),
        "cleo@hauler.test".into(),
        "+33600000003".into(),
    );
    customer.id = "user-customer".into();

    let mut home = Address::new(
        customer.id.clone(),
        "home".into(),
        "1 Rue de la Paix".into(),
        "Lyon".into(),
        "69001".into(),
    );
    home.id = "address-home".into();
    let mut work = Address::new(
        customer.id.clone(),
        "work".into(),
        "20 Quai Perrache".into(),
        "Lyon".into(),
        "69002".into(),
    );
    work.id = "address-work".into();

    let mut van = Vehicle::new(
        driver.id.clone(),
        "AB-123-CD".into(),
        "Renault".into(),
        "Master".into(),
        1200,
    );
    van.id = "vehicle-van".into();
    let mut truck = Vehicle::new(
        driver.id.clone(),
        "EF-456-GH".into(),
        "Iveco".into(),
        "Daily".into(),
        3500,
    );
    truck.id = "vehicle-truck".into();

    let mut first = Booking::new(
        customer.id.clone(),
        van.id.clone(),
        "1 Rue de la Paix, Lyon".into(),
        "20 Quai Perrache, Lyon".into(),
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
    );
    first.id = "booking-1".into();
    let mut second = Booking::new(
        customer.id.clone(),
        truck.id.clone(),
        "20 Quai Perrache, Lyon".into(),
        "1 Rue de la Paix, Lyon".into(),
        Utc.with_ymd_and_hms(2025, 6, 2, 14, 30, 0).unwrap(),
    );
    second.id = "booking-2".into();

    Dataset {
        users: vec![admin, driver, customer],
        addresses: vec![home, work],
        vehicles: vec![van, truck],
        bookings: vec![first, second],
    }
}

#[derive(Default)]
pub struct MemoryLocalStore {
    dataset: Dataset,
}

impl MemoryLocalStore {
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl LocalStore for MemoryLocalStore {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.dataset.users.clone())
    }

    async fn list_addresses(&self) -> Result<Vec<Address>, AppError> {
        Ok(self.dataset.addresses.clone())
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(self.dataset.vehicles.clone())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.dataset.bookings.clone())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.dataset.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_vehicle(&self, id: &str) -> Result<Option<Vehicle>, AppError> {
        Ok(self.dataset.vehicles.iter().find(|v| v.id == id).cloned())
    }
}

#[derive(Default)]
struct RemoteState {
    users: HashMap<String, User>,
    addresses: HashMap<String, Address>,
    vehicles: HashMap<String, Vehicle>,
    bookings: HashMap<String, Booking>,
}

pub struct MemoryRemoteStore {
    state: Mutex<RemoteState>,
    reachable: AtomicBool,
    fail_user_writes: Mutex<HashSet<String>>,
    fail_vehicle_writes: Mutex<HashSet<String>>,
}

impl Default for MemoryRemoteStore {
    fn default() -> Self {
        Self {
            state: Mutex::new(RemoteState::default()),
            reachable: AtomicBool::new(true),
            fail_user_writes: Mutex::new(HashSet::new()),
            fail_vehicle_writes: Mutex::new(HashSet::new()),
        }
    }
}

impl MemoryRemoteStore {
    pub fn set_unreachable(&self) {
        self.reachable.store(false, Ordering::SeqCst);
    }

    pub fn fail_user_write(&self, id: &str) {
        self.fail_user_writes.lock().unwrap().insert(id.to_string());
    }

    pub fn fail_vehicle_write(&self, id: &str) {
        self.fail_vehicle_writes
            .lock()
            .unwrap()
            .insert(id.to_string());
    }

    pub fn clear_write_failures(&self) {
        self.fail_user_writes.lock().unwrap().clear();
        self.fail_vehicle_writes.lock().unwrap().clear();
    }

    pub fn stored_user(&self, id: &str) -> Option<User> {
        self.state.lock().unwrap().users.get(id).cloned()
    }
}

#[async_trait]
impl RemoteStore for MemoryRemoteStore {
    async fn health_check(&self) -> Result<(), AppError> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::Network("connection refused".into()))
        }
    }

    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.users.values().find(|u| u.phone == phone).cloned())
    }

    async fn find_address_by_owner_label(
        &self,
        owner_id: &str,
        label: &str,
    ) -> Result<Option<Address>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .addresses
            .values()
            .find(|a| a.user_id == owner_id && a.label == label)
            .cloned())
    }

    async fn find_vehicle_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .vehicles
            .values()
            .find(|v| v.plate_number == plate)
            .cloned())
    }

    async fn find_booking_by_customer_time(
        &self,
        customer_id: &str,
        scheduled_at_millis: i64,
    ) -> Result<Option<Booking>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .bookings
            .values()
            .find(|b| {
                b.customer_id == customer_id
                    && b.scheduled_at.timestamp_millis() == scheduled_at_millis
            })
            .cloned())
    }

    async fn create_user(&self, user: &User) -> Result<String, AppError> {
        if self.fail_user_writes.lock().unwrap().contains(&user.id) {
            return Err(AppError::Network("simulated write failure".into()));
        }
        let mut state = self.state.lock().unwrap();
        state.users.insert(user.id.clone(), user.clone());
        Ok(user.id.clone())
    }

    async fn create_address(&self, address: &Address) -> Result<String, AppError> {
        let mut state = self.state.lock().unwrap();
        state.addresses.insert(address.id.clone(), address.clone());
        Ok(address.id.clone())
    }

    async fn create_vehicle(&self, vehicle: &Vehicle) -> Result<String, AppError> {
        if self
            .fail_vehicle_writes
            .lock()
            .unwrap()
            .contains(&vehicle.id)
        {
            return Err(AppError::Network("simulated write failure".into()));
        }
        let mut state = self.state.lock().unwrap();
        state.vehicles.insert(vehicle.id.clone(), vehicle.clone());
        Ok(vehicle.id.clone())
    }

    async fn create_booking(&self, booking: &Booking) -> Result<String, AppError> {
        let mut state = self.state.lock().unwrap();
        state.bookings.insert(booking.id.clone(), booking.clone());
        Ok(booking.id.clone())
    }

    async fn attach_account(&self, user_id: &str, account_id: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        match state.users.get_mut(user_id) {
            Some(user) => {
                user.account_id = Some(account_id.to_string());
                Ok(())
            }
            None => Err(AppError::NotFound(format!("remote user {}", user_id))),
        }
    }

    async fn count(&self, kind: EntityKind) -> Result<u64, AppError> {
        let state = self.state.lock().unwrap();
        let count = match kind {
            EntityKind::User => state.users.len(),
            EntityKind::Address => state.addresses.len(),
            EntityKind::Vehicle => state.vehicles.len(),
            EntityKind::Booking => state.bookings.len(),
        };
        Ok(count as u64)
    }

    async fn list_addresses(&self) -> Result<Vec<Address>, AppError> {
        Ok(self.state.lock().unwrap().addresses.values().cloned().collect())
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(self.state.lock().unwrap().vehicles.values().cloned().collect())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.state.lock().unwrap().bookings.values().cloned().collect())
    }

    async fn user_exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.state.lock().unwrap().users.contains_key(id))
    }

    async fn vehicle_exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.state.lock().unwrap().vehicles.contains_key(id))
    }
}

#[derive(Default)]
pub struct MemoryIdentityService {
    registered: Mutex<HashMap<String, String>>,
    fail_emails: Mutex<HashSet<String>>,
}

impl MemoryIdentityService {
    pub fn fail_for(&self, email: &str) {
        self.fail_emails.lock().unwrap().insert(email.to_string());
    }

    pub fn account_for(&self, email: &str) -> Option<String> {
        self.registered.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl IdentityService for MemoryIdentityService {
    async fn register(&self, email: &str, _password: &str) -> Result<String, AppError> {
        if self.fail_emails.lock().unwrap().contains(email) {
            return Err(AppError::Auth("provisioning rejected".into()));
        }
        let mut registered = self.registered.lock().unwrap();
        if registered.contains_key(email) {
            return Err(AppError::Auth(format!("email already registered: {}", email)));
        }
        let account_id = format!("acct-{}", registered.len() + 1);
        registered.insert(email.to_string(), account_id.clone());
        Ok(account_id)
    }
}
