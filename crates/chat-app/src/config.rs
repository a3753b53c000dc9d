//! Application configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV: &str = "WECHAT_UI_CONFIG";

/// Errors that can occur while loading the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid window size {width}x{height}, minimum is {min_width}x{min_height}")]
    WindowSize {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },
}

/// Native window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub min_width: f32,
    pub min_height: f32,
    pub width: f32,
    pub height: f32,
    /// Native title bar and borders. The drawer drags undecorated windows.
    pub decorated: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "wechat".to_string(),
            min_width: 800.0,
            min_height: 600.0,
            width: 960.0,
            height: 640.0,
            decorated: false,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// Default tracing filter, `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the file named by [`CONFIG_ENV`], or defaults when it is unset
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.width < window.min_width || window.height < window.min_height {
            return Err(ConfigError::WindowSize {
                width: window.width,
                height: window.height,
                min_width: window.min_width,
                min_height: window.min_height,
            });
        }
        Ok(())
    }
}
