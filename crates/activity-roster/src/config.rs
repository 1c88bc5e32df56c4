//! Configuration for the roster service.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Roster seed configuration
    #[serde(default)]
    pub roster: RosterConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterConfig {
    /// JSON seed file replacing the built-in catalog
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Global requests per minute
    #[serde(default = "default_global_rpm")]
    pub global_per_minute: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind. An unparseable listen address is an error.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address {}", self.listen_addr))?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            global_per_minute: default_global_rpm(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

fn default_global_rpm() -> u32 {
    600
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(config::Environment::default().separator("__"))
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(source)
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        config::Environment::default()
            .separator("__")
            .source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_source(env(&[])).unwrap();

        assert_eq!(config.server.listen_addr, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.roster.seed_path.is_none());
        assert_eq!(config.rate_limit.global_per_minute, 600);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_source(env(&[
            ("SERVER__PORT", "9090"),
            ("ROSTER__SEED_PATH", "/etc/roster/seed.json"),
            ("LOG__LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(
            config.roster.seed_path,
            Some(PathBuf::from("/etc/roster/seed.json"))
        );
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::from_source(env(&[
            ("SERVER__LISTEN_ADDR", "127.0.0.1"),
            ("SERVER__PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:9090".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_listen_addr_rejected() {
        let config = Config::from_source(env(&[("SERVER__LISTEN_ADDR", "127.0.0.l")])).unwrap();

        let err = config.server.socket_addr().unwrap_err();
        assert!(err.to_string().contains("127.0.0.l"));
    }
}
