//! Configuration module for the trivia backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Seed the default categories into an empty database
    pub seed_categories: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("TRIVIA_DB_PATH")
            .unwrap_or_else(|_| "./data/trivia.sqlite".to_string())
            .into();

        let bind_addr = env::var("TRIVIA_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()?;

        let log_level = env::var("TRIVIA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("TRIVIA_LOG_JSON")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let seed_categories = env::var("TRIVIA_SEED_CATEGORIES")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            log_json,
            seed_categories,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("TRIVIA_DB_PATH");
        env::remove_var("TRIVIA_BIND_ADDR");
        env::remove_var("TRIVIA_LOG_LEVEL");
        env::remove_var("TRIVIA_LOG_JSON");
        env::remove_var("TRIVIA_SEED_CATEGORIES");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/trivia.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert!(config.seed_categories);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("OFF"));
        assert!(!parse_flag(" false "));
        assert!(!parse_flag("0"));
    }
}
