//! Shared scenario fixtures.
//!
//! Constructors rather than statics: each scenario gets a fresh owned value,
//! so mutating one copy cannot leak into another scenario.

use crate::models::{BookingDates, BookingRecord, Credentials};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Booking used by the create, get and delete scenarios.
pub fn booking_data() -> BookingRecord {
    BookingRecord {
        firstname: "Dafne".to_string(),
        lastname: "Casero".to_string(),
        totalprice: 175,
        depositpaid: false,
        bookingdates: BookingDates {
            checkin: date(2025, 12, 24),
            checkout: date(2025, 12, 26),
        },
        additionalneeds: "Breakfast".to_string(),
    }
}

/// Full replacement record for the update scenario.
pub fn updated_booking_data() -> BookingRecord {
    BookingRecord {
        firstname: "Maria".to_string(),
        lastname: "Rodriguez".to_string(),
        totalprice: 250,
        depositpaid: true,
        bookingdates: BookingDates {
            checkin: date(2026, 1, 10),
            checkout: date(2026, 1, 15),
        },
        additionalneeds: "Lunch".to_string(),
    }
}

/// Credentials the auth endpoint accepts.
pub fn auth_credentials() -> Credentials {
    Credentials::new("admin", "password123")
}
