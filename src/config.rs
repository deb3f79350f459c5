/// Startup configuration
///
/// The API key comes from the process environment. Model, endpoint and
/// timeout may be tuned through an optional JSON file in the user's config
/// directory, and the model/endpoint can be overridden again from the
/// environment:
/// - Linux: ~/.config/prompt-image-editor/config.json
/// - macOS: ~/Library/Application Support/prompt-image-editor/config.json
/// - Windows: %APPDATA%\prompt-image-editor\config.json

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variables holding the credential, checked in order
const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];
const MODEL_VAR: &str = "IMAGE_EDITOR_MODEL";
const ENDPOINT_VAR: &str = "IMAGE_EDITOR_ENDPOINT";

/// Resolved configuration used to build the Gemini client
#[derive(Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub request_timeout: Duration,
}

/// Optional settings read from `config.json`
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Read the config file, or return defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Load configuration from the default file location and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::config_path() {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };

        Self::resolve(file, |name| std::env::var(name).ok())
    }

    /// Merge file settings with environment lookups
    ///
    /// `env` is injected so resolution can be tested without touching the
    /// real process environment.
    pub fn resolve<F>(file: FileConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| env(name).filter(|v| !v.trim().is_empty());

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| non_empty(*name))
            .ok_or(ConfigError::MissingApiKey)?;

        let model = non_empty(MODEL_VAR)
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let endpoint = non_empty(ENDPOINT_VAR)
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        // A zero timeout would fail every request before it is sent
        let request_timeout = Duration::from_secs(
            file.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS).max(1),
        );

        Ok(Config {
            api_key,
            model,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            request_timeout,
        })
    }

    /// Where the optional config file lives
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("prompt-image-editor");
        path.push("config.json");
        Some(path)
    }
}

// Keep the key out of logs and panics
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = Config::resolve(FileConfig::default(), env_from(&[]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let result = Config::resolve(FileConfig::default(), env_from(&[("API_KEY", "   ")]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(FileConfig::default(), env_from(&[("API_KEY", "k")])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_gemini_api_key_fallback() {
        let config =
            Config::resolve(FileConfig::default(), env_from(&[("GEMINI_API_KEY", "g")])).unwrap();
        assert_eq!(config.api_key, "g");

        let config = Config::resolve(
            FileConfig::default(),
            env_from(&[("API_KEY", "a"), ("GEMINI_API_KEY", "g")]),
        )
        .unwrap();
        assert_eq!(config.api_key, "a");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = FileConfig {
            model: Some("from-file".into()),
            endpoint: Some("http://file.local/models/".into()),
            request_timeout_secs: Some(30),
        };

        let config = Config::resolve(
            file.clone(),
            env_from(&[("API_KEY", "k"), ("IMAGE_EDITOR_MODEL", "from-env")]),
        )
        .unwrap();

        assert_eq!(config.model, "from-env");
        // Trailing slash is trimmed so URLs join cleanly
        assert_eq!(config.endpoint, "http://file.local/models");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let file = FileConfig {
            request_timeout_secs: Some(0),
            ..FileConfig::default()
        };
        let config = Config::resolve(file, env_from(&[("API_KEY", "k")])).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_file_config_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_file_config_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "model": "gemini-test" }"#).unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.model.as_deref(), Some("gemini-test"));
        assert_eq!(config.endpoint, None);
    }

    #[test]
    fn test_file_config_malformed_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(FileConfig::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::resolve(FileConfig::default(), env_from(&[("API_KEY", "secret")])).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
    }
}
