use error_location::ErrorLocation;
use thiserror::Error;

/// Protocol engine errors with source location tracking.
///
/// None of these are fatal to the helper process. The session logs them and
/// treats the offending command as a no-op.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Icon payload is not valid standard base64.
    #[error("Invalid base64 payload: {reason} {location}")]
    InvalidBase64 {
        /// Description of the decode failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Icon payload decoded to zero bytes.
    #[error("Empty icon payload {location}")]
    EmptyPayload {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A recognized method carried missing or malformed params.
    #[error("Invalid params for {method}: {reason} {location}")]
    InvalidParams {
        /// Method the params belonged to.
        method: String,
        /// Description of what was wrong.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Method name the helper does not understand.
    #[error("Unknown method: {method} {location}")]
    UnknownMethod {
        /// The unrecognized method name.
        method: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The native tray backend rejected an operation.
    #[error("Tray backend error: {reason} {location}")]
    Backend {
        /// Description of the backend failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
