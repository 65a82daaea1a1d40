use crate::constants::DEFAULT_REST_TIMEOUT;
use crate::error::{AppError, SparkResult};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for a Spark account
pub struct Credentials {
    /// Username for the Spark account
    pub username: String,
    /// Password for the Spark account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration a gateway implementation needs to reach a broker's Spark system
///
/// The parsing and balancing core never reads this. It exists for the
/// gateway collaborator that owns transport and authentication; core
/// functions take all data they need as explicit arguments.
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Broker whose Spark system to address (e.g. `nesua`, `meitav`, `psagot`)
    pub broker: String,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Explicit base URL override; derived from the broker name when empty
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables, loading `.env` first
    ///
    /// # Returns
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("SPARK_USERNAME", String::new());
        let password = get_env_or_default("SPARK_PASSWORD", String::new());
        let broker = get_env_or_default("SPARK_BROKER", String::new());

        // Check if environment variables are configured
        if username.is_empty() {
            error!("SPARK_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("SPARK_PASSWORD not found in environment variables or .env file");
        }
        if broker.is_empty() {
            error!("SPARK_BROKER not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            broker,
            rest_api: RestApiConfig {
                base_url: get_env_or_default("SPARK_REST_BASE_URL", String::new()),
                timeout: get_env_or_default("SPARK_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
        }
    }

    /// Resolves the API base URL for this configuration.
    ///
    /// The explicit `base_url` override wins when set; otherwise the URL is
    /// derived from the broker name as
    /// `https://spark<broker>.ordernet.co.il/api`.
    ///
    /// # Returns
    /// * `Ok(String)` - The resolved base URL
    /// * `Err(AppError::InvalidInput)` - If neither a broker nor an override is configured
    pub fn api_url(&self) -> SparkResult<String> {
        if !self.rest_api.base_url.is_empty() {
            return Ok(self.rest_api.base_url.clone());
        }
        if self.broker.is_empty() {
            return Err(AppError::InvalidInput(
                "no broker configured and no base URL override set".to_string(),
            ));
        }
        Ok(format!("https://spark{}.ordernet.co.il/api", self.broker))
    }
}

/// Gets an environment variable or returns a default value if not found or
/// it cannot be parsed
fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {env_var}: {val}, using default");
            default
        }),
        Err(_) => default,
    }
}
