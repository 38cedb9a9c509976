/// Convenience result type used across signscale.
pub type SignscaleResult<T> = Result<T, SignscaleError>;

/// Top-level error taxonomy used by the calibration, rendering and compositing APIs.
///
/// Every variant is recoverable at the point of the user action: a failed call leaves previously
/// computed session state untouched.
#[derive(thiserror::Error, Debug)]
pub enum SignscaleError {
    /// Degenerate reference measurement (the two points coincide).
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// A sign was requested before any scale ratio was calibrated.
    #[error("missing calibration: calibrate the photo scale before rendering a sign")]
    MissingCalibration,

    /// No sign text was provided.
    #[error("empty text: enter sign text before rendering")]
    EmptyText,

    /// The uploaded bytes could not be decoded as a raster image.
    #[error("unreadable image: {0}")]
    UnreadableImage(String),

    /// Out-of-range or malformed user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing job descriptions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Font resources that could not be read or registered.
    #[error("font error: {0}")]
    Font(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SignscaleError {
    /// Build a [`SignscaleError::InvalidReference`] value.
    pub fn invalid_reference(msg: impl Into<String>) -> Self {
        Self::InvalidReference(msg.into())
    }

    /// Build a [`SignscaleError::UnreadableImage`] value.
    pub fn unreadable_image(msg: impl Into<String>) -> Self {
        Self::UnreadableImage(msg.into())
    }

    /// Build a [`SignscaleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SignscaleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SignscaleError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
