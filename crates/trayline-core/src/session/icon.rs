use crate::{CoreError, CoreResult, codec};

use std::panic::Location;

use error_location::ErrorLocation;

/// Encoded icon image owned by the session until a newer icon replaces it or
/// the session shuts down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAsset {
    sequence: u64,
    bytes: Vec<u8>,
}

impl IconAsset {
    /// Wrap already decoded image bytes.
    #[track_caller]
    pub fn new(sequence: u64, bytes: Vec<u8>) -> CoreResult<Self> {
        if bytes.is_empty() {
            return Err(CoreError::EmptyPayload {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self { sequence, bytes })
    }

    /// Decode a base64 payload from a `setIcon` command.
    #[track_caller]
    pub fn from_base64(sequence: u64, text: &str) -> CoreResult<Self> {
        Self::new(sequence, codec::decode(text)?)
    }

    /// Encoded image bytes (PNG or ICO).
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Position of this icon among all icons the session has received.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Stable name for this asset, e.g. `trayline-icon-3`.
    pub fn name(&self) -> String {
        format!("trayline-icon-{}", self.sequence)
    }
}
