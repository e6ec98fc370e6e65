use crate::cli::Args;
use crate::core::error::ProbeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Contents of `~/.gemprobe/config.yaml`. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    fn config_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join(".gemprobe").join("config.yaml")
    }

    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Config, ProbeError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| ProbeError::Config(format!("Read {}: {}", path.display(), e)))?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_yml::from_str::<Config>(&contents)
            .map_err(|e| ProbeError::Config(format!("Parse {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}

/// Fully resolved settings for one probe run.
#[derive(Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Settings {
    /// Merge CLI arguments, the API key environment value and the config file.
    ///
    /// Precedence is CLI, then environment, then file, then built-in defaults.
    pub fn resolve(
        args: &Args,
        env_api_key: Option<String>,
        config: Config,
    ) -> Result<Settings, ProbeError> {
        let api_key = non_empty(args.api_key.clone())
            .or_else(|| non_empty(env_api_key))
            .or_else(|| non_empty(config.api_key))
            .ok_or_else(|| {
                ProbeError::Config(format!(
                    "No API key: pass --api-key, set {} or add api_key to {}",
                    API_KEY_ENV,
                    args.config
                        .clone()
                        .unwrap_or_else(Config::default_path)
                        .display()
                ))
            })?;

        let base_url = non_empty(args.base_url.clone())
            .or_else(|| non_empty(config.base_url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = non_empty(args.model.clone())
            .or_else(|| non_empty(config.model))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout = args
            .timeout
            .or(config.timeout_secs)
            .map(Duration::from_secs);

        Ok(Settings {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            timeout,
        })
    }
}
