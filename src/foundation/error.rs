/// Convenience result type used across wedgecut.
pub type WedgeResult<T> = Result<T, WedgeError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum WedgeError {
    /// Invalid user-provided, script or config data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a frame or preparing raster assets.
    #[error("render error: {0}")]
    Render(String),

    /// Errors raised by frame sinks (PNG writer, ffmpeg).
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing scripts and configs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WedgeError {
    /// Build a [`WedgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WedgeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WedgeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`WedgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
