use crate::config::output::ConfigViolation;

/// Convenience result type used across rtxloop.
pub type RtxResult<T> = Result<T, RtxError>;

/// Top-level error taxonomy used by the public APIs.
#[derive(thiserror::Error, Debug)]
pub enum RtxError {
    /// Invalid user-provided data (warp text, pixel buffers, sink parameters).
    #[error("validation error: {0}")]
    Validation(String),

    /// An output configuration failed validation.
    #[error("config error: {0}")]
    Config(#[from] ConfigViolation),

    /// Errors while advancing a render session.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors while opening or writing a frame sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RtxError {
    /// Build a [`RtxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RtxError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`RtxError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`RtxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
