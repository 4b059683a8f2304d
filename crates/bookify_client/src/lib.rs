// --- File: crates/bookify_client/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod booking;
#[cfg(test)]
mod booking_test;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod models;

// Re-export the client types and error for easier access
pub use auth::AuthClient;
pub use booking::BookingClient;
pub use error::BookingApiError;
