use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, ShellError};

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "APPSHELL_CONFIG";

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "appshell.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Server configuration for the application shell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Overrides the listen address from the Leptos options when set
    pub site_addr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ShellConfig {
    /// Load configuration from file, falling back to defaults when the file is missing
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path(),
        };

        if !path.exists() {
            info!("No configuration file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        let config: ShellConfig = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Resolve the config path from `APPSHELL_CONFIG` or the working directory
    pub fn default_config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Parsed listen address override, if configured
    pub fn site_addr(&self) -> Result<Option<SocketAddr>> {
        self.server
            .site_addr
            .as_deref()
            .map(|addr| {
                addr.parse::<SocketAddr>()
                    .map_err(|e| ShellError::config(format!("Invalid site_addr '{}': {}", addr, e)))
            })
            .transpose()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.site_addr()?;

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ShellError::config(format!(
                "Unknown log level '{}', expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.server.site_addr, None);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
site_addr = "0.0.0.0:8080"

[logging]
level = "debug"
json = true
"#
        )
        .unwrap();

        let config = ShellConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(
            config.site_addr().unwrap(),
            Some("0.0.0.0:8080".parse().unwrap())
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\njson = true").unwrap();

        let config = ShellConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.site_addr, None);
    }

    #[test]
    fn test_invalid_site_addr_rejected() {
        let config = ShellConfig {
            server: ServerSettings {
                site_addr: Some("not-an-address".to_string()),
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ShellError::Config(_))));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut config = ShellConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "WARN".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging\nlevel = ").unwrap();

        let result = ShellConfig::load(Some(file.path()));
        assert!(matches!(result, Err(ShellError::Parse(_))));
    }
}
