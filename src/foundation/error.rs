/// Convenience result type used across vreel.
pub type VreelResult<T> = Result<T, VreelError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum VreelError {
    /// A required input collection was empty (no visuals, no transcript words).
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A computed composition or clip duration was not positive.
    #[error("invalid composition: {0}")]
    InvalidComposition(String),

    /// Invalid user-provided or timeline data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Asset resolver failure, surfaced unchanged from the collaborator.
    #[error("retrieval error: {0}")]
    Retrieval(String),

    /// Renderer/encoder failure, surfaced unchanged from the collaborator.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VreelError {
    /// Build a [`VreelError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build a [`VreelError::InvalidComposition`] value.
    pub fn invalid_composition(msg: impl Into<String>) -> Self {
        Self::InvalidComposition(msg.into())
    }

    /// Build a [`VreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VreelError::Retrieval`] value.
    pub fn retrieval(msg: impl Into<String>) -> Self {
        Self::Retrieval(msg.into())
    }

    /// Build a [`VreelError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
