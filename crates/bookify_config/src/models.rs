// --- File: crates/bookify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Top-level Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Root of the booking API, without a trailing slash.
    pub base_url: String,
    pub auth: AuthConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

// --- Auth Config ---
// Holds the credentials the token endpoint accepts. The password can be
// overridden via BOOKIFY_AUTH__PASSWORD.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

// --- HTTP Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    /// Request timeout applied to every call against the API.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_timeout_seconds() -> u64 {
    30
}
