//! Entropy estimator trait definition.

use crate::error::Result;

/// Estimates the entropy of a sequence of observations.
pub trait EntropyEstimator: Send + Sync {
    /// Entropy of `sequence`, in bits.
    fn entropy(&self, sequence: &[f64]) -> Result<f64>;
}
