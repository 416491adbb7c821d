use serde::{Deserialize, Serialize};

/// Outbound notifications written to the parent process.
///
/// Serializes as `{"method":"clicked","params":{"id":"..."}}`; variants
/// without a payload omit `params` entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "camelCase")]
pub enum Event {
    /// Initial tray setup finished; commands may now be sent.
    Ready,
    /// The user opened the tray menu. Sent before the menu is shown.
    MenuRequested,
    /// The user activated a leaf menu entry.
    Clicked {
        /// Protocol id of the activated entry.
        id: String,
    },
}
