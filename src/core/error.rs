use thiserror::Error;

/// Result type for classifier operations.
pub type Result<T> = std::result::Result<T, SaxError>;

/// Errors raised by the discretizer, word-bag builder and classifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaxError {
    /// A configuration parameter is out of range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A series is shorter than the sliding window.
    #[error("series of length {len} is shorter than the window length {window}")]
    SeriesTooShort { len: usize, window: usize },

    /// Sample, model or dataset dimension counts disagree.
    #[error("expected {expected} dimensions, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A dimension is missing a sample that dimension 0 has.
    #[error("class '{label}' has no sample {index} in dimension {dimension}")]
    MissingSample {
        label: String,
        index: usize,
        dimension: usize,
    },

    /// Classification was requested against an empty model set.
    #[error("no class models to classify against")]
    NoClasses,
}

impl SaxError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SaxError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
