//! Connection Configuration
//!
//! Resolves the database connection parameters used for the single long-lived
//! connection acquired at startup.
//!
//! # Resolution Precedence
//! 1. CLI flags / `ROSTER_DB_*` environment variables (highest priority)
//! 2. Config file (`~/.config/roster/config.json`, or `--config` override)
//! 3. Built-in defaults (localhost:5432, user `postgres`, database `employees`)
//!
//! The stored password may be indirected through `password_env` so the config
//! file never has to contain a credential.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RosterError};

/// Fully resolved connection parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    /// WARNING: sensitive, do not log or include in error messages
    pub password: Option<String>,
    pub database: String,
}

impl ConnectionConfig {
    /// Build a `tokio_postgres::Config` from the resolved parameters
    pub fn pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config.host(&self.host).port(self.port).user(&self.user).dbname(&self.database);
        if let Some(password) = &self.password {
            config.password(password);
        }
        config
    }
}

/// Partial connection parameters from the config file
///
/// Every field is optional; anything absent falls through to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Password stored directly (prefer `password_env`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Environment variable name to read the password from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

/// Partial connection parameters from CLI flags and environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

/// Default path of the config file (`~/.config/roster/config.json`)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| RosterError::config_error("Could not determine user config directory"))?;

    Ok(config_dir.join("roster").join("config.json"))
}

/// Load the stored config, returning defaults if the file does not exist
pub fn load_stored(path: &Path) -> Result<StoredConfig> {
    if !path.exists() {
        return Ok(StoredConfig::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| RosterError::config_error(format!("Could not read config file: {e}")))?;

    serde_json::from_str(&contents)
        .map_err(|e| RosterError::config_error(format!("Invalid config file format: {e}")))
}

/// Merge stored config and overrides into a resolved `ConnectionConfig`
///
/// Overrides win over the file; the file wins over defaults. A `password_env`
/// indirection is resolved here and must name an existing variable.
pub fn resolve(stored: StoredConfig, overrides: Overrides) -> Result<ConnectionConfig> {
    let stored_password = match (&stored.password_env, stored.password) {
        (Some(env_var), _) => Some(std::env::var(env_var).map_err(|_| {
            RosterError::config_error(format!(
                "Environment variable {env_var} not found for password"
            ))
        })?),
        (None, direct) => direct,
    };

    Ok(ConnectionConfig {
        host: overrides.host.or(stored.host).unwrap_or_else(|| "localhost".to_string()),
        port: overrides.port.or(stored.port).unwrap_or(5432),
        user: overrides.user.or(stored.user).unwrap_or_else(|| "postgres".to_string()),
        password: overrides.password.or(stored_password),
        database: overrides.database.or(stored.database).unwrap_or_else(|| "employees".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve(StoredConfig::default(), Overrides::default()).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.user, "postgres");
        assert_eq!(config.password, None);
        assert_eq!(config.database, "employees");
    }

    #[test]
    fn test_overrides_win_over_stored() {
        let stored = StoredConfig {
            host: Some("db.internal".to_string()),
            port: Some(5433),
            ..Default::default()
        };
        let overrides = Overrides { host: Some("127.0.0.1".to_string()), ..Default::default() };

        let config = resolve(stored, overrides).unwrap();
        assert_eq!(config.host, "127.0.0.1"); // override wins
        assert_eq!(config.port, 5433); // stored wins over default
    }

    #[test]
    fn test_password_env_resolution() {
        std::env::set_var("ROSTER_TEST_PASSWORD", "secret");

        let stored = StoredConfig {
            password_env: Some("ROSTER_TEST_PASSWORD".to_string()),
            ..Default::default()
        };
        let config = resolve(stored, Overrides::default()).unwrap();
        assert_eq!(config.password, Some("secret".to_string()));

        std::env::remove_var("ROSTER_TEST_PASSWORD");
    }

    #[test]
    fn test_password_env_missing_is_an_error() {
        let stored = StoredConfig {
            password_env: Some("ROSTER_NONEXISTENT_VAR".to_string()),
            ..Default::default()
        };
        let result = resolve(stored, Overrides::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ROSTER_NONEXISTENT_VAR"));
    }

    #[test]
    fn test_load_stored_missing_file_returns_defaults() {
        let stored = load_stored(Path::new("/nonexistent/roster/config.json")).unwrap();
        assert!(stored.host.is_none());
        assert!(stored.password_env.is_none());
    }

    #[test]
    fn test_stored_config_round_trip() {
        let stored = StoredConfig {
            host: Some("db.internal".to_string()),
            port: Some(5433),
            user: Some("hr".to_string()),
            password: None,
            password_env: Some("HR_DB_PASSWORD".to_string()),
            database: Some("employees".to_string()),
        };

        let json = serde_json::to_string_pretty(&stored).unwrap();
        assert!(!json.contains("\"password\"")); // omitted when None
        let parsed: StoredConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.host.as_deref(), Some("db.internal"));
        assert_eq!(parsed.password_env.as_deref(), Some("HR_DB_PASSWORD"));
    }
}
