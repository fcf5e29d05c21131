//! Runtime settings for the scraper.
//!
//! Provides TOML-based settings with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main runtime settings.
///
/// This is loaded from `~/.config/pubchem-scraper/settings.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Browser automation settings
    pub browser: BrowserConfig,
    /// Element resolution settings
    pub resolver: ResolverConfig,
}

impl Settings {
    /// Load settings from the default location, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let settings_path = Self::settings_path()?;

        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            tracing::debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load settings from an explicit file.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or not valid TOML.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }
        tracing::debug!("Loading settings from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let settings = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Apply environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `PUBCHEM_HEADLESS`: Override browser headless mode (true/false)
    /// - `PUBCHEM_ELEMENT_TIMEOUT_SECS`: Override the element wait timeout
    /// - `PUBCHEM_POLL_INTERVAL_MS`: Override the element poll interval
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("PUBCHEM_HEADLESS") {
            if let Ok(headless) = val.parse() {
                self.browser.headless = headless;
                tracing::debug!("Override browser.headless from env: {}", headless);
            }
        }

        if let Ok(val) = std::env::var("PUBCHEM_ELEMENT_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.resolver.element_timeout_secs = secs;
                tracing::debug!("Override resolver.element_timeout_secs from env: {}", secs);
            }
        }

        if let Ok(val) = std::env::var("PUBCHEM_POLL_INTERVAL_MS") {
            if let Ok(ms) = val.parse() {
                self.resolver.poll_interval_ms = ms;
                tracing::debug!("Override resolver.poll_interval_ms from env: {}", ms);
            }
        }

        self
    }

    /// Get the path to the settings file.
    ///
    /// Uses XDG base directories: `~/.config/pubchem-scraper/settings.toml`
    pub fn settings_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("org", "pubchem-scraper", "pubchem-scraper")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("settings.toml"))
    }
}

/// Browser automation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,
    /// Page load timeout in seconds
    pub navigation_timeout_secs: u64,
    /// How long to wait for the driver executable to accept connections
    pub driver_start_timeout_secs: u64,
}

impl BrowserConfig {
    /// Page load timeout.
    #[must_use]
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    /// Driver startup timeout.
    #[must_use]
    pub fn driver_start_timeout(&self) -> Duration {
        Duration::from_secs(self.driver_start_timeout_secs)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: false,
            navigation_timeout_secs: 30,
            driver_start_timeout_secs: 10,
        }
    }
}

/// Element resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum time to wait for a selector, in seconds
    pub element_timeout_secs: u64,
    /// Delay between selector lookups, in milliseconds
    pub poll_interval_ms: u64,
}

impl ResolverConfig {
    /// Maximum wait per selector attempt.
    #[must_use]
    pub fn element_timeout(&self) -> Duration {
        Duration::from_secs(self.element_timeout_secs)
    }

    /// Delay between lookups.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            element_timeout_secs: 10,
            poll_interval_ms: 250,
        }
    }
}
