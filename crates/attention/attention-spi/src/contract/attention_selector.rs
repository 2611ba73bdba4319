//! Attention selector trait definition.

use crate::error::Result;
use crate::model::{AttentionIndices, AttentionModel};

/// Picks the attention observations of a series.
///
/// Implementations must return ascending indices that include the first and
/// last observation (or, for the sentinel model, every observation).
pub trait AttentionSelector: Send + Sync {
    /// Select attention indices from `series`.
    fn select(&self, series: &[f64]) -> Result<AttentionIndices>;

    /// Model implemented by this selector.
    fn model(&self) -> AttentionModel;
}
