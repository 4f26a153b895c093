//! Photo Acquisition Errors
//!
//! Failures from the file and camera paths, surfaced to the form instead of
//! being swallowed at the browser boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Camera permission was denied")]
    PermissionDenied,

    #[error("No camera available")]
    NoDevice,

    #[error("Camera produced an empty frame")]
    EmptyFrame,

    #[error("Camera capture is not supported here")]
    Unavailable,

    #[error("Camera error: {0}")]
    Device(String),

    #[error("Could not encode snapshot: {0}")]
    Encode(String),
}

impl CaptureError {
    /// Classify a `getUserMedia`/playback rejection by its `DOMException` name
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" => Self::PermissionDenied,
            "NotFoundError" | "OverconstrainedError" => Self::NoDevice,
            "NotSupportedError" | "TypeError" => Self::Unavailable,
            _ if message.is_empty() => Self::Device(name.to_string()),
            _ => Self::Device(format!("{}: {}", name, message)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("Could not read file: {0}")]
    Read(String),

    #[error("Not an encoded image: {0}")]
    Malformed(String),
}
