/// Convenience result type used across Scribble.
pub type ScribbleResult<T> = Result<T, ScribbleError>;

/// Top-level error taxonomy used by crate APIs.
///
/// The scheduler core itself has no fatal errors (anomalous inputs degrade to
/// safe no-ops); `ScribbleError` only appears on genuinely fallible edges such
/// as palette registration, palette-file parsing, and surface construction.
#[derive(thiserror::Error, Debug)]
pub enum ScribbleError {
    /// Invalid user-provided data (empty palette, malformed color, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors constructing or reading back a drawing surface.
    #[error("surface error: {0}")]
    Surface(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScribbleError {
    /// Build a [`ScribbleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScribbleError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
