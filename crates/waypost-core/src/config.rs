//! TOML-backed configuration.
//!
//! Configuration resolves in three layers: built-in defaults, then the TOML
//! file (explicit path or the platform config directory), then environment
//! variables (`WAYPOST_API_URL`, `WAYPOST_MEDIA_URL`). Credentials are never
//! written into source; the media key, when required, comes from the file or
//! the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment override for the API base URL.
pub const ENV_API_URL: &str = "WAYPOST_API_URL";

/// Environment override for the media upload URL.
pub const ENV_MEDIA_URL: &str = "WAYPOST_MEDIA_URL";

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_MEDIA_URL: &str = "http://localhost:5000/api/Upload";

/// Loading and path resolution for a project configuration type.
///
/// Implement this for each configuration struct; the CLI's generic config
/// subcommands (`path`, `get`, `set`, `init`) are parameterized over it.
pub trait ConfigManager: Serialize + Sized {
    /// Short project name, used for the config directory and CLI hints.
    fn project_name() -> &'static str;

    /// Resolve the config file path: the explicit override when given,
    /// otherwise `<platform config dir>/<project>/config.toml`.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::config_dir().map(|dir| {
                dir.join(Self::project_name()).join("config.toml")
            }),
        }
    }

    /// Load the configuration, falling back to defaults when no file exists.
    fn load(explicit: Option<&str>) -> Result<Self>;

    /// Render the default configuration as TOML (for `config init`).
    fn default_toml() -> Result<String>;
}

/// Waypost client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WaypostConfig {
    /// Backend API settings.
    pub api: ApiConfig,

    /// Media upload proxy settings.
    pub media: MediaConfig,
}

/// Backend API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL all resource paths are joined onto.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Media upload proxy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// POST-only upload route that proxies to the media host.
    pub upload_url: String,

    /// Credential for the media host, when the proxy requires one.
    pub api_key: Option<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            upload_url: DEFAULT_MEDIA_URL.to_string(),
            api_key: None,
        }
    }
}

impl WaypostConfig {
    /// Apply environment overrides on top of the loaded values.
    fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Ok(url) = std::env::var(ENV_MEDIA_URL) {
            self.media.upload_url = url;
        }
        self
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }
}

impl ConfigManager for WaypostConfig {
    fn project_name() -> &'static str {
        "waypost"
    }

    fn load(explicit: Option<&str>) -> Result<Self> {
        let config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                log::debug!("Loaded config from {}", path.display());
                Self::from_toml(&content)?
            }
            Some(_) | None => Self::default(),
        };
        Ok(config.apply_env())
    }

    fn default_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| Error::config(format!("Failed to render default config: {e}")))
    }
}
