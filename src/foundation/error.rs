/// Convenience result type used across Choyen.
pub type ChoyenResult<T> = Result<T, ChoyenError>;

/// Top-level error taxonomy used by the rendering APIs.
///
/// Every stage aborts the whole render on error; there is no partial output.
#[derive(thiserror::Error, Debug)]
pub enum ChoyenError {
    /// Invalid caller-provided data (stop tables, settings, text lines).
    #[error("validation error: {0}")]
    Validation(String),

    /// A font resource could not be loaded or shaped.
    #[error("font error: {0}")]
    Font(String),

    /// Width probing grew past the hard limit without fitting the text.
    #[error("text does not fit within {limit_px}px probe canvas")]
    TextTooWide {
        /// Largest probe width that was attempted.
        limit_px: u32,
    },

    /// The composed banner has no visible pixels to crop to.
    #[error("render produced no visible content")]
    EmptyRender,

    /// Errors raised while rasterizing or compositing.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChoyenError {
    /// Build a [`ChoyenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChoyenError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`ChoyenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
