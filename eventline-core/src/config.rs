//! Eventline configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. Command-line overrides (`--events-url`, `--api-url`, `--timeout`)
//! 2. `config.yaml` in the platform config directory (or `--config PATH`)
//! 3. Built-in defaults
//!
//! ```yaml
//! api:
//!   events_url: https://grmobile.onrender.com
//!   registration_url: https://grmoviev2.onrender.com
//!   timeout_seconds: 10
//! settings:
//!   dark_mode: false
//!   text_scale: 1.0
//!   volume: 0.5
//! ```
//!
//! Settings are handed to the rendering layer by reference; the catalog and
//! registration components never write to them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Default catalog host
pub const DEFAULT_EVENTS_URL: &str = "https://grmobile.onrender.com";

/// Default host for `/users` and `/registrations`
pub const DEFAULT_REGISTRATION_URL: &str = "https://grmoviev2.onrender.com";

/// Lower bound applied to `timeout_seconds`
pub const MIN_TIMEOUT_SECONDS: u64 = 1;

pub const TEXT_SCALE_RANGE: (f64, f64) = (0.8, 1.8);
pub const VOLUME_RANGE: (f64, f64) = (0.0, 1.0);

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventlineConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub settings: Settings,
}

/// Remote service endpoints and request bounds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL serving `GET /events`
    #[serde(default = "default_events_url")]
    pub events_url: String,

    /// Base URL serving `POST /users` and `POST /registrations`
    #[serde(default = "default_registration_url")]
    pub registration_url: String,

    /// Timeout for each remote call in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            events_url: default_events_url(),
            registration_url: default_registration_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_events_url() -> String {
    DEFAULT_EVENTS_URL.to_string()
}

fn default_registration_url() -> String {
    DEFAULT_REGISTRATION_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

impl ApiConfig {
    /// Per-call timeout, never below [`MIN_TIMEOUT_SECONDS`]
    pub fn timeout(&self) -> Duration {
        if self.timeout_seconds < MIN_TIMEOUT_SECONDS {
            warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                self.timeout_seconds, MIN_TIMEOUT_SECONDS
            );
            Duration::from_secs(MIN_TIMEOUT_SECONDS)
        } else {
            Duration::from_secs(self.timeout_seconds)
        }
    }
}

/// Display preferences read by the rendering layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub dark_mode: bool,

    /// Clamped to [0.8, 1.8]
    #[serde(default = "default_text_scale")]
    pub text_scale: f64,

    /// Clamped to [0.0, 1.0]
    #[serde(default = "default_volume")]
    pub volume: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            text_scale: default_text_scale(),
            volume: default_volume(),
        }
    }
}

fn default_text_scale() -> f64 {
    1.0
}

fn default_volume() -> f64 {
    0.5
}

fn clamp(value: f64, (min, max): (f64, f64), fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

impl Settings {
    pub fn new(dark_mode: bool, text_scale: f64, volume: f64) -> Self {
        Self {
            dark_mode,
            text_scale: clamp(text_scale, TEXT_SCALE_RANGE, default_text_scale()),
            volume: clamp(volume, VOLUME_RANGE, default_volume()),
        }
    }

    /// Re-apply the numeric ranges (after deserialization)
    pub fn clamped(self) -> Self {
        Self::new(self.dark_mode, self.text_scale, self.volume)
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
    }

    pub fn set_text_scale(&mut self, scale: f64) {
        self.text_scale = clamp(scale, TEXT_SCALE_RANGE, self.text_scale);
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = clamp(volume, VOLUME_RANGE, self.volume);
    }
}

impl EventlineConfig {
    /// Load from a specific path; a missing file yields defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parse from YAML, clamping settings into range
    pub fn from_yaml(content: &str) -> Result<Self> {
        let mut config: Self =
            serde_yaml_ng::from_str(content).context("Failed to parse config YAML")?;
        config.settings = config.settings.clamped();
        Ok(config)
    }

    /// Write the configuration to `path`, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = serde_yaml_ng::to_string(self).context("Failed to serialize config")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = directories::ProjectDirs::from("org", "eventline", "eventline")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("eventline")))
            .context("Could not determine config directory")?;

        Ok(config_dir.join("config.yaml"))
    }
}

/// Shared HTTP client construction for all remote calls
pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("eventline/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .context("Failed to create HTTP client")
}
