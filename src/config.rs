use std::env;
use std::time::Duration;

/// Pool checkout is bounded by a fixed, short acquire timeout rather than
/// whatever the driver defaults to; a saturated or unreachable store is
/// reported as a connection failure instead of blocking the request.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Process configuration, read once at startup and passed explicitly to the
/// connection provider and server. No ambient globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidVar("DATABASE_MAX_CONNECTIONS", raw))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            port,
            max_connections,
            acquire_timeout: ACQUIRE_TIMEOUT,
        })
    }
}
