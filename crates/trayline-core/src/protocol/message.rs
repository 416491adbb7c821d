use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One inbound line of the protocol.
///
/// `params` is kept as raw JSON until the method is known; see
/// [`Command::from_message`](crate::Command::from_message).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Operation name, e.g. `setMenu`.
    pub method: String,
    /// Method-specific payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl Message {
    /// Create a message with the given method and optional params.
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}
