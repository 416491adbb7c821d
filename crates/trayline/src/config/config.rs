//! Startup configuration for trayline.
//!
//! Defaults come from an optional TOML file in the platform config directory
//! and are overridden by command-line flags. The file is never written.

use crate::{
    AppError, AppResult,
    config::{CONFIG_FILE_NAME, TrayConfig},
};

use std::{fs, panic::Location, path::PathBuf};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use trayline_core::StartupOptions;

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Initial tray appearance.
    #[serde(default)]
    pub tray: TrayConfig,
}

impl Config {
    /// Load the config file (if any), then apply command-line `args`.
    ///
    /// Never fails: a missing or broken config file falls back to defaults
    /// so the helper always comes up.
    #[instrument(skip(args))]
    pub fn load<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut config = match Self::from_file() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Ignoring config file");
                Self::default()
            }
        };
        config.apply_args(args);
        config
    }

    /// Parse a TOML document.
    #[track_caller]
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Override values with `--icon <path>` and `--tooltip <text>`.
    ///
    /// Unknown arguments and flags missing their value are ignored.
    pub fn apply_args<I: IntoIterator<Item = String>>(&mut self, args: I) {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--icon" => {
                    if let Some(path) = args.next() {
                        self.tray.icon = Some(PathBuf::from(path));
                    }
                }
                "--tooltip" => {
                    if let Some(text) = args.next() {
                        self.tray.tooltip = text;
                    }
                }
                other => debug!(arg = other, "Ignoring unknown argument"),
            }
        }
    }

    /// Resolve the startup options, reading the icon file if one is set.
    ///
    /// An unreadable icon file is logged and leaves the default icon in place.
    pub fn startup_options(&self) -> StartupOptions {
        let icon = self.tray.icon.as_ref().and_then(|path| match fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(path = ?path, error = %e, "Failed to read startup icon");
                None
            }
        });

        StartupOptions {
            icon,
            tooltip: self.tray.tooltip.clone(),
        }
    }

    #[track_caller]
    fn from_file() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            debug!(config_path = ?config_path, "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = Self::from_toml_str(&contents)?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "trayline", "Trayline").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
