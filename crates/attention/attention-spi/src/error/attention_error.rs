//! Attention-scale error types.

use thiserror::Error;

/// Broad class an [`AttentionError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an argument the transform cannot work with.
    InvalidArgument,
    /// The input is well-formed but the statistic is undefined for it.
    DegenerateInput,
}

/// Errors that can occur during attention selection, coarse-graining or
/// entropy computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttentionError {
    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Unrecognised attention model tag
    #[error("Unknown attention model: '{0}'")]
    UnknownModel(String),

    /// Separator selection left nothing to segment
    #[error("Degenerate separators: {count} separator(s) cannot bound a segment")]
    DegenerateSeparators { count: usize },

    /// Attention index does not address an observation of the series
    #[error("Attention index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// Entropy requested on an empty sequence
    #[error("Entropy is undefined for an empty sequence")]
    EmptySequence,
}

impl AttentionError {
    /// Shorthand for [`AttentionError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Error class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySequence => ErrorKind::DegenerateInput,
            Self::InvalidParameter { .. }
            | Self::InsufficientData { .. }
            | Self::UnknownModel(_)
            | Self::DegenerateSeparators { .. }
            | Self::IndexOutOfRange { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Whether this error is an invalid-argument condition.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

/// Result type for attention-scale operations.
pub type Result<T> = std::result::Result<T, AttentionError>;
