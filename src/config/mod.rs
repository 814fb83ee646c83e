//! Service configuration
//!
//! Configuration is loaded from a YAML file and overridden by environment
//! variables, so a local SQLite setup and a remote managed database can share
//! one config file.

use crate::utils::error::{Result, VaultError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Record store settings
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL. `sqlite:` URLs select the local file backend,
    /// `postgres:` URLs the remote managed backend.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum pool connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Fall back to the local SQLite file when the remote store is unreachable
    #[serde(default = "default_true")]
    pub fallback_to_sqlite: bool,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
    /// Session cookie name
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Password hashing cost parameters
    #[serde(default)]
    pub argon2: Argon2Config,
}

/// Argon2 cost parameters. The hash is deliberately slow; these bound the
/// work factor rather than letting it float with the crate defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KiB
    #[serde(default = "default_argon2_memory")]
    pub memory_kib: u32,
    /// Number of iterations
    #[serde(default = "default_argon2_iterations")]
    pub iterations: u32,
    /// Lanes of parallelism
    #[serde(default = "default_argon2_parallelism")]
    pub parallelism: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            fallback_to_sqlite: true,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: default_session_ttl(),
            cookie_name: default_cookie_name(),
            argon2: Argon2Config::default(),
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: default_argon2_memory(),
            iterations: default_argon2_iterations(),
            parallelism: default_argon2_parallelism(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&raw)?
        } else {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply `GAMEVAULT_*` environment variable overrides
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("GAMEVAULT_DATABASE_URL") {
            self.database.url = url;
        }
        if let Ok(host) = std::env::var("GAMEVAULT_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("GAMEVAULT_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("ignoring unparseable GAMEVAULT_PORT: {}", port),
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(VaultError::Config("server port must be non-zero".into()));
        }
        if self.database.url.is_empty() {
            return Err(VaultError::Config("database url must be set".into()));
        }
        if self.auth.session_ttl_secs < 60 {
            return Err(VaultError::Config(
                "session TTL must be at least 60 seconds".into(),
            ));
        }
        self.auth.argon2.validate()
    }
}

impl Argon2Config {
    /// Validate the cost parameters against sane bounds
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 || self.parallelism == 0 {
            return Err(VaultError::Config(
                "argon2 iterations and parallelism must be non-zero".into(),
            ));
        }
        // Argon2 requires at least 8 KiB per lane.
        if self.memory_kib < 8 * self.parallelism {
            return Err(VaultError::Config(
                "argon2 memory must be at least 8 KiB per lane".into(),
            ));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite://data/gamevault.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connection_timeout() -> u64 {
    10
}

fn default_session_ttl() -> u64 {
    // 12 hours
    43_200
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_argon2_memory() -> u32 {
    19_456
}

fn default_argon2_iterations() -> u32 {
    2
}

fn default_argon2_parallelism() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.database.url.starts_with("sqlite:"));
        assert_eq!(config.auth.cookie_name, "session");
    }

    #[test]
    fn zero_port_is_rejected() {
        let config: Config = serde_yaml::from_str("server:\n  port: 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn undersized_argon2_memory_is_rejected() {
        let argon2 = Argon2Config {
            memory_kib: 4,
            iterations: 2,
            parallelism: 1,
        };
        assert!(argon2.validate().is_err());
    }
}
