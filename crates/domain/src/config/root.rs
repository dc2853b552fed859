use serde::{Deserialize, Serialize};

use super::capture::CaptureConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

/// Main configuration structure for packtrace
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Capture session configuration (device, filter, session options)
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. packtrace.toml in current directory
    /// 3. /etc/packtrace/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("packtrace.toml").exists() {
            Self::from_file("packtrace.toml")?
        } else if std::path::Path::new("/etc/packtrace/config.toml").exists() {
            Self::from_file("/etc/packtrace/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(device) = overrides.device {
            self.capture.device = Some(device);
        }
        if let Some(bpf) = overrides.bpf {
            self.capture.bpf = Some(bpf);
        }
        if let Some(strict) = overrides.strict {
            self.capture.strict = strict;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capture.snaplen <= 0 {
            return Err(ConfigError::Validation(
                "Capture snaplen must be positive".to_string(),
            ));
        }
        if self.database.path.is_empty() {
            return Err(ConfigError::Validation(
                "Database path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub device: Option<String>,
    pub bpf: Option<String>,
    pub strict: Option<bool>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
