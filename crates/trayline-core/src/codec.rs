//! Base64 transport for inline icon payloads.
//!
//! Only the standard alphabet with `=` padding is accepted. Unused bits in
//! the final symbol are ignored rather than rejected. The whole payload is
//! decoded in one call.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use base64::{
    Engine, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};
use error_location::ErrorLocation;

const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a standard base64 string into raw bytes.
///
/// Rejects input whose length is not a multiple of four, any symbol outside
/// the 64-character alphabet, and padding anywhere but the last two positions.
#[track_caller]
pub fn decode(text: &str) -> CoreResult<Vec<u8>> {
    if text.len() % 4 != 0 {
        return Err(CoreError::InvalidBase64 {
            reason: format!("length {} is not a multiple of 4", text.len()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    ENGINE
        .decode(text.as_bytes())
        .map_err(|e| CoreError::InvalidBase64 {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Encode raw bytes as padded standard base64.
pub fn encode(bytes: &[u8]) -> String {
    ENGINE.encode(bytes)
}
