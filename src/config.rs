//! Configuration management for Snooze
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{Result, SnoozeError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base URL of the public Hack-or-Snooze service
pub const DEFAULT_BASE_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

/// Main configuration structure for Snooze
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Session persistence settings
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("snooze/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where the token/username record is kept
    ///
    /// When unset, `session.json` in the platform data directory is used.
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// A missing file is not an error: defaults are used instead.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &Path, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    /// Default location of the configuration file
    ///
    /// Falls back to `snooze.yaml` in the working directory when the
    /// platform config directory cannot be determined.
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("com", "snooze", "snooze")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from("snooze.yaml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SnoozeError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| SnoozeError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("SNOOZE_BASE_URL") {
            self.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("SNOOZE_TIMEOUT_SECONDS") {
            match timeout.parse() {
                Ok(t) => self.api.timeout_seconds = t,
                Err(_) => tracing::warn!("Ignoring invalid SNOOZE_TIMEOUT_SECONDS: {}", timeout),
            }
        }

        if let Ok(session_path) = std::env::var("SNOOZE_SESSION_FILE") {
            self.session.path = Some(session_path);
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(base_url) = &cli.base_url {
            tracing::debug!("Using base URL override from CLI: {}", base_url);
            self.api.base_url = base_url.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api.base_url).map_err(|e| {
            SnoozeError::Config(format!("Invalid base_url {}: {}", self.api.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SnoozeError::Config(format!(
                "base_url must use http or https, got: {}",
                url.scheme()
            ))
            .into());
        }

        if self.api.timeout_seconds == 0 || self.api.timeout_seconds > 300 {
            return Err(SnoozeError::Config(
                "timeout_seconds must be between 1 and 300".to_string(),
            )
            .into());
        }

        if self.api.user_agent.trim().is_empty() {
            return Err(SnoozeError::Config("user_agent cannot be empty".to_string()).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    fn cli(args: &[&str]) -> crate::cli::Cli {
        let mut argv = vec!["snooze"];
        argv.extend_from_slice(args);
        crate::cli::Cli::parse_from(argv)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.api.user_agent.starts_with("snooze/"));
        assert!(config.session.path.is_none());
    }

    #[test]
    fn test_config_validation_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_non_http_scheme() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_user_agent() {
        let mut config = Config::default();
        config.api.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
api:
  base_url: http://localhost:5000
  timeout_seconds: 10
session:
  path: /tmp/snooze-session.json
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_seconds, 10);
        assert!(config.api.user_agent.starts_with("snooze/"));
        assert_eq!(
            config.session.path.as_deref(),
            Some("/tmp/snooze-session.json")
        );
    }

    #[test]
    #[serial]
    fn test_load_nonexistent_file_uses_defaults() {
        std::env::remove_var("SNOOZE_BASE_URL");
        let config = Config::load(Path::new("nonexistent.yaml"), &cli(&["logout"])).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_env_and_cli_overrides() {
        std::env::set_var("SNOOZE_BASE_URL", "http://env.example");
        std::env::set_var("SNOOZE_TIMEOUT_SECONDS", "7");

        let config = Config::load(Path::new("nonexistent.yaml"), &cli(&["logout"])).unwrap();
        assert_eq!(config.api.base_url, "http://env.example");
        assert_eq!(config.api.timeout_seconds, 7);

        let config = Config::load(
            Path::new("nonexistent.yaml"),
            &cli(&["--base-url", "http://cli.example", "logout"]),
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://cli.example");

        std::env::remove_var("SNOOZE_BASE_URL");
        std::env::remove_var("SNOOZE_TIMEOUT_SECONDS");
    }

    #[test]
    #[serial]
    fn test_invalid_env_timeout_is_ignored() {
        std::env::set_var("SNOOZE_TIMEOUT_SECONDS", "soon");
        let config = Config::load(Path::new("nonexistent.yaml"), &cli(&["logout"])).unwrap();
        assert_eq!(config.api.timeout_seconds, 30);
        std::env::remove_var("SNOOZE_TIMEOUT_SECONDS");
    }

    #[test]
    fn test_load_unparseable_file_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api: [not, a, map]").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(
            SnoozeError::classify(&err),
            Some(SnoozeError::Config(_))
        ));
    }
}
