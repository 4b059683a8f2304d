//! Client for the booking API's token endpoint.

use crate::error::BookingApiError;
use crate::http::{build_client, HTTP_CLIENT};
use crate::models::Credentials;
use bookify_config::AppConfig;
use reqwest::{Client, Response};
use tracing::debug;

/// Thin wrapper around `POST /auth`.
///
/// [`AuthClient::get_token`] hands back the transport's raw response;
/// interpreting status and body is the caller's job. Transport errors
/// propagate unmodified and nothing is retried.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client for the auth endpoint rooted at `base_url`.
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
        AuthClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST the credentials to `/auth` and return the raw response.
    pub async fn get_token(&self, credentials: &Credentials) -> Result<Response, BookingApiError> {
        let url = format!("{}/auth", self.base_url);
        debug!(%url, "POST auth");
        let response = self.client.post(&url).json(credentials).send().await?;
        Ok(response)
    }

    /// Fetch and decode a token in one step.
    ///
    /// The live API reports bad credentials as a 200 with a `reason` body
    /// instead of a `token`, so a body without a non-empty `token` field
    /// surfaces as [`BookingApiError::MissingToken`]. A body that is not
    /// JSON at all surfaces as [`BookingApiError::Parse`].
    pub async fn token(&self, credentials: &Credentials) -> Result<String, BookingApiError> {
        let response = self.get_token(credentials).await?;
        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        match body.get("token").and_then(serde_json::Value::as_str) {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => Err(BookingApiError::MissingToken),
        }
    }
}
