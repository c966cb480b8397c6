//! Error type for the synthesis engine
//!
//! Prompt interpretation and rendering are total and never fail. Errors only
//! arise when consuming external payloads (uploaded images), validating
//! numeric parameters, or encoding output.

use thiserror::Error;

/// Errors produced by payload-consuming and encoding operations.
#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("No {0} provided")]
    MissingInput(&'static str),

    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Invalid image payload: {0}")]
    InvalidImage(#[from] image::ImageError),

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ForgeError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ForgeError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True for errors caused by bad caller input rather than an internal fault.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ForgeError::MissingInput(_)
                | ForgeError::InvalidBase64(_)
                | ForgeError::InvalidImage(_)
                | ForgeError::InvalidParameter { .. }
                | ForgeError::Config(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ForgeError>;
