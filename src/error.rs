//! Error types for the waveform renderer

use std::fmt;

/// Errors that can occur while turning an audio file into an image
#[derive(Debug, Clone)]
pub enum RenderError {
    /// Mode name did not match any registered alias
    UnknownMode(String),

    /// Pixel buffer allocation failed
    Allocation(String),

    /// Audio decoding error
    Decode(String),

    /// Image encoding error
    Encode(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownMode(name) => write!(f, "unsupported mode `{}`", name),
            RenderError::Allocation(msg) => write!(f, "allocation failed: {}", msg),
            RenderError::Decode(msg) => write!(f, "decoding error: {}", msg),
            RenderError::Encode(msg) => write!(f, "encoding error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}
