// src/infrastructure/config.rs
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INTERNAL_URL, DEFAULT_PUBLIC_PATH};
use crate::domain::DomainError;

/// TOML configuration for noteview
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Explicit base URL; overrides mode-based resolution when set
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_internal_url")]
    pub internal_url: String,
    #[serde(default = "default_public_path")]
    pub public_path: String,
    /// Scheme and host that `public_path` is joined to in interactive mode
    #[serde(default)]
    pub origin: Option<String>,
}

/// Where the process is running, as far as API routing is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExecutionMode {
    /// Public deployment; requests go through the site's own `/api` route
    Interactive,
    /// No interactive environment (server-side or command line)
    #[default]
    Prerender,
    /// Local development
    Development,
}

fn default_internal_url() -> String { DEFAULT_INTERNAL_URL.to_string() }
fn default_public_path() -> String { DEFAULT_PUBLIC_PATH.to_string() }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            internal_url: default_internal_url(),
            public_path: default_public_path(),
            origin: None,
        }
    }
}

impl ApiConfig {
    /// Pick the base URL once, at startup. The client never branches on mode itself.
    pub fn resolve_base_url(&self, mode: ExecutionMode) -> Result<String, DomainError> {
        if let Some(base_url) = &self.base_url {
            return Ok(base_url.clone());
        }
        match mode {
            ExecutionMode::Prerender | ExecutionMode::Development => Ok(self.internal_url.clone()),
            ExecutionMode::Interactive => match &self.origin {
                Some(origin) => Ok(format!(
                    "{}/{}",
                    origin.trim_end_matches('/'),
                    self.public_path.trim_start_matches('/')
                )),
                None => Err(DomainError::ConfigError(format!(
                    "interactive mode uses the relative path '{}' and needs an origin to resolve it",
                    self.public_path
                ))),
            },
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load from `path` when given, else from the user config file if one exists, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case(ExecutionMode::Prerender, "http://publisher-api:8080")]
    #[case(ExecutionMode::Development, "http://publisher-api:8080")]
    fn given_non_interactive_mode_when_resolving_then_uses_internal_address(
        #[case] mode: ExecutionMode,
        #[case] expected: &str,
    ) {
        let api = ApiConfig::default();

        assert_eq!(api.resolve_base_url(mode).unwrap(), expected);
    }

    #[test]
    fn given_interactive_mode_with_origin_when_resolving_then_joins_public_path() {
        let api = ApiConfig {
            origin: Some("https://notes.example.com/".to_string()),
            ..Default::default()
        };

        let url = api.resolve_base_url(ExecutionMode::Interactive).unwrap();

        assert_eq!(url, "https://notes.example.com/api");
    }

    #[test]
    fn given_interactive_mode_without_origin_when_resolving_then_returns_config_error() {
        let api = ApiConfig::default();

        let result = api.resolve_base_url(ExecutionMode::Interactive);

        assert!(matches!(result, Err(DomainError::ConfigError(_))));
    }

    #[rstest]
    #[case(ExecutionMode::Interactive)]
    #[case(ExecutionMode::Prerender)]
    #[case(ExecutionMode::Development)]
    fn given_explicit_base_url_when_resolving_then_it_wins_in_every_mode(#[case] mode: ExecutionMode) {
        let api = ApiConfig {
            base_url: Some("http://localhost:9999".to_string()),
            ..Default::default()
        };

        assert_eq!(api.resolve_base_url(mode).unwrap(), "http://localhost:9999");
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[api]\norigin = \"https://notes.example.com\"\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.api.origin.as_deref(), Some("https://notes.example.com"));
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.api.internal_url, "http://publisher-api:8080");
        assert_eq!(config.api.public_path, "/api");
    }

    #[test]
    fn given_empty_file_when_loading_then_returns_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty.toml");
        fs::write(&config_path, "").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn given_explicit_path_when_discovering_then_loads_that_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("noteview.toml");
        fs::write(&config_path, "[api]\nbase_url = \"http://127.0.0.1:8080\"\n").unwrap();

        let loaded = Config::discover(Some(&config_path)).unwrap();

        let expected = Config {
            api: ApiConfig {
                base_url: Some("http://127.0.0.1:8080".to_string()),
                ..Default::default()
            },
        };
        assert_eq!(loaded, expected);
    }

    #[test]
    fn given_nonexistent_file_when_loading_then_returns_error() {
        let result = Config::load("/nonexistent/path/config.toml");

        assert!(result.is_err());
    }
}
