//! # Application Configuration
//!
//! This module defines the configuration structure for the `txt2sql` CLI and
//! provides the logic for loading it from a YAML file. The file is read once
//! per process; repeated calls return the cached configuration.

use serde::Deserialize;
use std::path::Path;
use std::process;
use std::sync::OnceLock;
use tracing::{debug, error, info};

/// Default path of the YAML configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/cfg.yml";

/// Process exit code when the configuration file does not exist.
pub const EXIT_CONFIG_MISSING: i32 = 2;
/// Process exit code when the configuration file cannot be read or parsed.
pub const EXIT_CONFIG_UNREADABLE: i32 = 1;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file was not found.
    NotFound(String),
    /// The configuration file could not be read or parsed.
    Unreadable(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
            ConfigError::Unreadable(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// The root configuration structure, mapping directly to `cfg.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
}

/// Settings for the chat-completion API.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URI of the API, without the `/chat/completions` suffix.
    pub llm_api_uri: String,
    pub llm_api_key: String,
    pub llm_model_name: String,
}

impl ApiConfig {
    /// The full chat-completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.llm_api_uri)
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Reads and parses the configuration file at `path`.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(format!(
            "Configuration file {path} does not exist. Copy {path}.template, fill in your settings, and rename the copy to {path}",
            path = path.display()
        )));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::Unreadable(format!("failed to read {}: {e}", path.display()))
    })?;

    serde_yaml::from_str(&contents).map_err(|e| {
        ConfigError::Unreadable(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Returns the process-wide configuration, loading it from `path` on first
/// use.
///
/// Exits the process when the file is missing ([`EXIT_CONFIG_MISSING`]) or
/// unreadable ([`EXIT_CONFIG_UNREADABLE`]).
pub fn load(path: &Path) -> &'static AppConfig {
    if let Some(config) = CONFIG.get() {
        info!("configuration already loaded, returning cached value");
        return config;
    }

    match read_config(path) {
        Ok(config) => {
            debug!(?config, "configuration loaded from {}", path.display());
            CONFIG.get_or_init(|| config)
        }
        Err(err @ ConfigError::NotFound(_)) => {
            error!("{err}");
            process::exit(EXIT_CONFIG_MISSING);
        }
        Err(err) => {
            error!("{err}");
            process::exit(EXIT_CONFIG_UNREADABLE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VALID_CFG: &str = r#"
api:
  llm_api_uri: "https://api.deepseek.com/v1"
  llm_api_key: "sk-test"
  llm_model_name: "deepseek-chat"
"#;

    #[test]
    fn test_read_config_parses_api_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.yml");
        fs::write(&path, VALID_CFG).unwrap();

        let config = read_config(&path).expect("valid config should parse");
        assert_eq!(config.api.llm_api_uri, "https://api.deepseek.com/v1");
        assert_eq!(config.api.llm_api_key, "sk-test");
        assert_eq!(config.api.llm_model_name, "deepseek-chat");
        assert_eq!(
            config.api.chat_completions_url(),
            "https://api.deepseek.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_read_config_missing_file_mentions_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.yml");

        let err = read_config(&path).expect_err("missing file must fail");
        match err {
            ConfigError::NotFound(msg) => assert!(msg.contains("cfg.yml.template")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_config_rejects_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.yml");
        fs::write(&path, "api: [not, a, mapping]").unwrap();

        let err = read_config(&path).expect_err("invalid yaml must fail");
        assert!(matches!(err, ConfigError::Unreadable(_)));
    }

    /// `load` must not touch the filesystem after the first successful read.
    /// The file is deleted between the two calls; the second still succeeds
    /// and returns the same cached instance.
    #[test]
    fn test_load_is_idempotent_per_process() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.yml");
        fs::write(&path, VALID_CFG).unwrap();

        let first = load(&path);
        fs::remove_file(&path).unwrap();
        let second = load(&path);

        assert!(std::ptr::eq(first, second));
        assert_eq!(second.api.llm_model_name, "deepseek-chat");
    }
}
