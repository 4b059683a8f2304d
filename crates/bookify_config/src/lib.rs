use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::*;

/// Default root of the booking API under test.
const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";

/// Loads the application configuration.
///
/// Sources are layered: built-in defaults, then an optional
/// `config/default.toml` file, then `BOOKIFY`-prefixed environment
/// variables (separator `__`, e.g. `BOOKIFY_AUTH__PASSWORD`).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_dir = env::var("BOOKIFY_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let default_path = format!("{config_dir}/default");

    let builder = Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL)?
        .set_default("auth.username", "admin")?
        .set_default("auth.password", "password123")?
        .set_default("http.timeout_seconds", 30_i64)?
        .add_source(File::with_name(&default_path).required(false))
        .add_source(Environment::with_prefix("BOOKIFY").separator("__"));

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures `.env` is loaded into the environment variables exactly once.
///
/// A missing `.env` file is not an error; the environment simply stays
/// as the process received it.
pub fn ensure_dotenv_loaded() {
    INIT_DOTENV.get_or_init(|| {
        dotenv::dotenv().ok();
    });
}
