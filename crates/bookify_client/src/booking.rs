//! Client for the booking CRUD endpoints.

use crate::error::BookingApiError;
use crate::http::{build_client, HTTP_CLIENT};
use crate::models::BookingRecord;
use bookify_config::AppConfig;
use reqwest::header::COOKIE;
use reqwest::{Client, Response};
use tracing::debug;

/// Wrapper around the `/booking` collection.
///
/// Every operation is a single network round trip returning the raw
/// response; status and body interpretation belong to the caller. Mutating
/// operations attach a previously obtained token as a session cookie; the
/// client does not validate the token's shape. No operation retries.
#[derive(Debug, Clone)]
pub struct BookingClient {
    client: Client,
    base_url: String,
}

impl BookingClient {
    /// Create a client for the booking collection rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HTTP_CLIENT.clone(), base_url)
    }

    /// Create a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be built with the
    /// configured timeout.
    pub fn from_config(config: &AppConfig) -> Result<Self, BookingApiError> {
        let client = build_client(config.http.timeout_seconds)?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Create a client that issues its requests through `client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        BookingClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn booking_url(&self, id: i64) -> String {
        format!("{}/booking/{}", self.base_url, id)
    }

    /// POST a new booking record. The response body carries the assigned id.
    pub async fn create_booking(
        &self,
        record: &BookingRecord,
    ) -> Result<Response, BookingApiError> {
        let url = format!("{}/booking", self.base_url);
        debug!(%url, "POST booking");
        let response = self.client.post(&url).json(record).send().await?;
        Ok(response)
    }

    /// GET a booking by id. 200 with the record, or 404 when absent.
    pub async fn get_booking(&self, id: i64) -> Result<Response, BookingApiError> {
        let url = self.booking_url(id);
        debug!(%url, "GET booking");
        let response = self.client.get(&url).send().await?;
        Ok(response)
    }

    /// PUT a full replacement record. Partial updates are not supported.
    pub async fn update_booking(
        &self,
        id: i64,
        record: &BookingRecord,
        token: &str,
    ) -> Result<Response, BookingApiError> {
        let url = self.booking_url(id);
        debug!(%url, "PUT booking");
        let response = self
            .client
            .put(&url)
            .header(COOKIE, session_cookie(token))
            .json(record)
            .send()
            .await?;
        Ok(response)
    }

    /// DELETE a booking by id.
    ///
    /// The live API answers 201 on success, not the 200 its documentation
    /// claims; the observed status is the contract.
    pub async fn delete_booking(
        &self,
        id: i64,
        token: &str,
    ) -> Result<Response, BookingApiError> {
        let url = self.booking_url(id);
        debug!(%url, "DELETE booking");
        let response = self
            .client
            .delete(&url)
            .header(COOKIE, session_cookie(token))
            .send()
            .await?;
        Ok(response)
    }
}

/// Formats a token the way the API expects it: a `token=<value>` cookie.
pub(crate) fn session_cookie(token: &str) -> String {
    format!("token={token}")
}
