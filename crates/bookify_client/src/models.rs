// --- File: crates/bookify_client/src/models.rs ---

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// --- Data Structures ---

/// Credentials sent to the auth endpoint.
#[derive(Serialize, Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Body of a successful `POST /auth` response.
#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
}

/// Check-in / check-out pair. The API exchanges these as `YYYY-MM-DD`
/// strings, which is chrono's serde format for `NaiveDate`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BookingDates {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

/// A booking record as the API stores it.
///
/// Sent verbatim on create and update; the API assigns the id separately
/// (see [`CreateBookingResponse`]).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: u32,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    pub additionalneeds: String,
}

/// Body of a successful `POST /booking` response.
///
/// The assigned `bookingid` is only valid between a successful create and a
/// successful delete for that id.
#[derive(Deserialize, Debug)]
pub struct CreateBookingResponse {
    pub bookingid: i64,
    pub booking: BookingRecord,
}
