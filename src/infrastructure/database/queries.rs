pub(super) const SELECT_ALL_USERS: &str = r#"
    SELECT id, role, name, email, phone, created_at, updated_at
    FROM users
    ORDER BY created_at ASC
"#;

pub(super) const SELECT_USER_BY_ID: &str = r#"
    SELECT id, role, name, email, phone, created_at, updated_at
    FROM users
    WHERE id = ?1
"#;

pub(super) const SELECT_ALL_ADDRESSES: &str = r#"
    SELECT id, user_id, label, street, city, postal_code, created_at, updated_at
    FROM addresses
    ORDER BY created_at ASC
"#;

pub(super) const SELECT_ALL_VEHICLES: &str = r#"
    SELECT id, driver_id, plate_number, make, model, capacity_kg, created_at, updated_at
    FROM vehicles
    ORDER BY created_at ASC
"#;

pub(super) const SELECT_VEHICLE_BY_ID: &str = r#"
    SELECT id, driver_id, plate_number, make, model, capacity_kg, created_at, updated_at
    FROM vehicles
    WHERE id = ?1
"#;

pub(super) const SELECT_ALL_BOOKINGS: &str = r#"
    SELECT id, customer_id, vehicle_id, pickup, dropoff, scheduled_at, status,
           created_at, updated_at
    FROM bookings
    ORDER BY scheduled_at ASC
"#;
