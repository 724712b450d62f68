#![allow(dead_code)]
use chrono::NaiveDate;
use rentadrive::domain::entities::{
    AdminUser, BookingFormInput, BookingRecord, BookingStatus, CustomerIdentity, UserRole, Vehicle,
};

/// Date the test clock is pinned to
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 20).expect("valid date")
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
}

/// A three-day booking a few weeks after `today()`
pub fn valid_booking_input() -> BookingFormInput {
    BookingFormInput {
        vehicle_id: "car-1".to_string(),
        pickup_date: "2025-06-01".to_string(),
        return_date: "2025-06-04".to_string(),
        pickup_time: "10:00".to_string(),
        return_time: "10:00".to_string(),
        pickup_location: "Casablanca Airport".to_string(),
        return_location: "Casablanca Airport".to_string(),
    }
}

pub fn guest_identity() -> CustomerIdentity {
    CustomerIdentity {
        first_name: "Youssef".to_string(),
        last_name: "Amrani".to_string(),
        email: "youssef@example.com".to_string(),
        phone: "+212 611 223 344".to_string(),
    }
}

pub fn vehicle(id: &str, daily_price: f64, available: bool) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        brand: "Dacia".to_string(),
        model: "Logan".to_string(),
        year: Some(2023),
        category: Some("economy".to_string()),
        daily_price,
        transmission: Some("manual".to_string()),
        fuel_type: Some("diesel".to_string()),
        seats: Some(5),
        images: vec![],
        available,
    }
}

pub fn admin_user(id: &str) -> AdminUser {
    AdminUser {
        id: id.to_string(),
        first_name: "Salma".to_string(),
        last_name: "Idrissi".to_string(),
        email: format!("{}@example.com", id),
        phone: None,
        role: UserRole::Customer,
    }
}

pub fn booking_record(
    id: &str,
    number: Option<&str>,
    status: Option<BookingStatus>,
    total: Option<f64>,
) -> BookingRecord {
    BookingRecord {
        id: id.to_string(),
        booking_number: number.map(str::to_string),
        status,
        total_amount: total,
    }
}
