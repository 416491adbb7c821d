use crate::config::default_tooltip;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Initial tray appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayConfig {
    /// Tooltip shown until the parent sets one.
    #[serde(default = "default_tooltip")]
    pub tooltip: String,
    /// PNG or ICO file used as the initial icon.
    #[serde(default)]
    pub icon: Option<PathBuf>,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            tooltip: default_tooltip(),
            icon: None,
        }
    }
}
