//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/walletbar/config.json`
//! - macOS: `~/Library/Application Support/walletbar/config.json`
//! - Windows: `%APPDATA%/walletbar/config.json`
//!
//! # Example
//!
//! ```ignore
//! use walletbar::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.show_local_balance = false;
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::constants::{DEFAULT_REFRESH_INTERVAL_SECS, TOO_MUCH_BALANCE_COINS};
use crate::domain::Coin;
use crate::reconcile::{LockPrecedence, PolicyConfig};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
pub const APP_NAME: &str = "walletbar";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Persistent toolbar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Whether to show the local (fiat) amount under the balance.
    pub show_local_balance: bool,
    /// Balances above this many whole coins raise the warning.
    pub too_much_threshold_coins: u64,
    /// Seconds between periodic recomputations; `0` disables them.
    pub refresh_interval_secs: u64,
    /// Whether a locked wallet also hides sync progress.
    pub lock_precedence: LockPrecedence,
    /// Preferred fiat currency for the demo rate feed.
    pub currency_code: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_local_balance: true,
            too_much_threshold_coins: TOO_MUCH_BALANCE_COINS,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            lock_precedence: LockPrecedence::default(),
            currency_code: None,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration, falling back to defaults on any failure.
    ///
    /// A missing file is the normal first-run case and is not reported.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!("No config file, using defaults");
                Self::default()
            }
            Err(err) => {
                warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk; a missing file yields
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or the JSON cannot be parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Ok(Self::load_from(&path)?.unwrap_or_default())
    }

    /// Reads the configuration at `path`, or `None` if there is no file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Parses configuration JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, serialization fails,
    /// or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The presentation policy settings.
    #[must_use]
    pub fn policy(&self) -> PolicyConfig {
        PolicyConfig {
            show_local_balance: self.show_local_balance,
            too_much_threshold: Coin::from_coins(self.too_much_threshold_coins),
            lock_precedence: self.lock_precedence,
        }
    }

    /// The periodic recomputation interval, if enabled.
    #[must_use]
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_interval_secs > 0).then(|| Duration::from_secs(self.refresh_interval_secs))
    }
}

// ============================================================================
// Tests
// ============================================================================
