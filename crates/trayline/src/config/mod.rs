#[allow(clippy::module_inception)]
mod config;
mod tray_config;

pub(crate) use {config::Config, tray_config::TrayConfig};

pub(crate) const CONFIG_FILE_NAME: &str = "config.toml";

pub(crate) fn default_tooltip() -> String {
    trayline_core::DEFAULT_TOOLTIP.to_string()
}
