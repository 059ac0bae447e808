//! Error types for the fingerprint pipeline
//!
//! Probe failures are not errors: every missing capability degrades to the
//! `unavailable` sentinel inside the probe itself. The error taxonomy only
//! covers serialization of the assembled record and the not-yet-captured
//! export state.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, FingerprintError>;

#[derive(Error, Debug, Clone)]
pub enum FingerprintError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("No fingerprint captured yet")]
    NoCapture,
}

impl FingerprintError {
    /// User-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            FingerprintError::Serialization(_) => {
                "Failed to encode the fingerprint. Please try again.".into()
            }
            FingerprintError::NoCapture => {
                "Run an analysis before exporting the fingerprint.".into()
            }
        }
    }
}

impl From<serde_json::Error> for FingerprintError {
    fn from(err: serde_json::Error) -> Self {
        FingerprintError::Serialization(err.to_string())
    }
}

impl From<FingerprintError> for JsValue {
    fn from(err: FingerprintError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
