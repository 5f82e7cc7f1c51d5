use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::responder::ResponderConfig;
use super::scope::ScopeConfig;
use crate::host::RegisteredHost;

/// Main configuration structure for Ferrous mDNS.
///
/// Constructed once at startup and read-only afterwards; a change means
/// building a new value and publishing it atomically. Resolution reads it
/// concurrently without locking.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Responder identity and query cadence
    #[serde(default)]
    pub responder: ResponderConfig,

    /// Interface participation rules
    #[serde(default)]
    pub scope: ScopeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Names this instance generates answers for
    #[serde(default)]
    pub hosts: Vec<RegisteredHost>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-mdns.toml in current directory
    /// 3. /etc/ferrous-mdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("ferrous-mdns.toml").exists() {
            Self::from_file("ferrous-mdns.toml")?
        } else if std::path::Path::new("/etc/ferrous-mdns/config.toml").exists() {
            Self::from_file("/etc/ferrous-mdns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Programmatic construction with validation. Never yields a partially
    /// valid value: either every invariant holds or an error names the
    /// violating host/binding.
    pub fn build(
        name: impl Into<String>,
        query_interval: Duration,
        hosts: Vec<RegisteredHost>,
        include_loopback: bool,
        interfaces: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            responder: ResponderConfig {
                name: name.into(),
                query_interval_ms: query_interval.as_millis() as u64,
                ..ResponderConfig::default()
            },
            scope: ScopeConfig {
                include_loopback,
                interfaces,
            },
            logging: LoggingConfig::default(),
            hosts,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(name) = overrides.name {
            self.responder.name = name;
        }
        if let Some(interval) = overrides.query_interval_ms {
            self.responder.query_interval_ms = interval;
        }
        if let Some(include_loopback) = overrides.include_loopback {
            self.scope.include_loopback = include_loopback;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.responder.query_interval_ms == 0 {
            return Err(ConfigError::NonPositiveInterval);
        }

        let mut names: HashSet<&str> = HashSet::new();
        for host in &self.hosts {
            host.validate()?;
            if !names.insert(host.name.as_str()) {
                return Err(ConfigError::DuplicateHostName(host.name.clone()));
            }
        }

        Ok(())
    }

    /// The registered host answering for `name`, if any. mDNS names are
    /// matched case-insensitively.
    pub fn host(&self, name: &str) -> Option<&RegisteredHost> {
        self.hosts.iter().find(|h| h.name.eq_ignore_ascii_case(name))
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("ferrous-mdns.toml").exists() {
            Some("ferrous-mdns.toml".to_string())
        } else if std::path::Path::new("/etc/ferrous-mdns/config.toml").exists() {
            Some("/etc/ferrous-mdns/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub name: Option<String>,
    pub query_interval_ms: Option<u64>,
    pub include_loopback: Option<bool>,
    pub log_level: Option<String>,
}
