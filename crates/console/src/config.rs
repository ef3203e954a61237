//! # Console Configuration
//!
//! Loads settings for the Shiftboard console from environment variables
//! (after `dotenv` has read any `.env` file) and provides defaults where
//! appropriate.
//!
//! ## Environment Variables
//!
//! - `SHIFTBOARD_API_URL`: Base URL of the shift API (default: "http://localhost:8080/api")
//! - `SHIFTBOARD_SESSION`: Session cookie value printed by `shiftboard login`
//! - `LOG_LEVEL`: Logging level (default: "warn")
//! - `SHIFTBOARD_REQUEST_TIMEOUT_SECONDS`: HTTP timeout (default: 30)

use std::{env, time::Duration};

use eyre::{Result, WrapErr};
use tracing::Level;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Configuration for the Shiftboard console
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use shiftboard_console::config::ConsoleConfig;
///
/// fn example() -> Result<()> {
///     let config = ConsoleConfig::from_env()?;
///     println!("Talking to {}", config.api_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL every API path is appended to
    pub api_url: String,

    /// Session cookie value, if the user has logged in
    pub session: Option<String>,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ConsoleConfig {
    /// Creates a new ConsoleConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `SHIFTBOARD_REQUEST_TIMEOUT_SECONDS` is set but
    /// is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("SHIFTBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let session = env::var("SHIFTBOARD_SESSION")
            .ok()
            .filter(|value| !value.trim().is_empty());

        let log_level = parse_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()));

        let request_timeout = match env::var("SHIFTBOARD_REQUEST_TIMEOUT_SECONDS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => 30,
        };

        Ok(Self {
            api_url,
            session,
            log_level,
            request_timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

/// Unknown names fall back to `warn`.
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

fn parse_timeout(value: &str) -> Result<u64> {
    let seconds: u64 = value
        .trim()
        .parse()
        .wrap_err("Invalid SHIFTBOARD_REQUEST_TIMEOUT_SECONDS value")?;
    if seconds == 0 {
        eyre::bail!("SHIFTBOARD_REQUEST_TIMEOUT_SECONDS must be greater than zero");
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", Level::TRACE)]
    #[case("DEBUG", Level::DEBUG)]
    #[case(" info ", Level::INFO)]
    #[case("error", Level::ERROR)]
    #[case("verbose", Level::WARN)]
    fn log_levels(#[case] raw: &str, #[case] expected: Level) {
        assert_eq!(parse_level(raw), expected);
    }

    #[test]
    fn timeout_values() {
        assert_eq!(parse_timeout("15").unwrap(), 15);
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
    }
}
