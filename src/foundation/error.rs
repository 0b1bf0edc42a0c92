/// Convenience result type used across easel.
pub type EaselResult<T> = Result<T, EaselError>;

/// Error taxonomy for editor operations.
#[derive(thiserror::Error, Debug)]
pub enum EaselError {
    /// A source image could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The current image could not be encoded or written.
    #[error("encode error: {0}")]
    Encode(String),

    /// An annotation color string is malformed.
    #[error("color decode error: {0}")]
    ColorDecode(String),

    /// Undo was requested while only the initial state remains.
    #[error("undo underflow: history holds a single state")]
    UndoUnderflow,

    /// Invalid caller-provided data (sizes, parameters, stroke widths).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EaselError {
    /// Build an [`EaselError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build an [`EaselError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`EaselError::ColorDecode`] value.
    pub fn color_decode(msg: impl Into<String>) -> Self {
        Self::ColorDecode(msg.into())
    }

    /// Build an [`EaselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EaselError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
