mod backend;
mod icon;
#[allow(clippy::module_inception)]
mod session;
mod startup;

pub use {
    backend::TrayBackend,
    icon::IconAsset,
    session::{Flow, SessionState, ShutdownReason, TraySession},
    startup::{DEFAULT_TOOLTIP, MAX_TOOLTIP_UTF16_UNITS, StartupOptions, truncate_tooltip},
};
