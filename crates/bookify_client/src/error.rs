//! Error types for the booking API clients

use thiserror::Error;

/// Errors that can occur when talking to the booking API
#[derive(Debug, Error)]
pub enum BookingApiError {
    /// Transport-level failure, propagated unmodified from reqwest
    #[error("Booking API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A response body could not be decoded
    #[error("Failed to parse booking API response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The auth endpoint answered without a usable token
    #[error("Auth response contained no token")]
    MissingToken,
}
