//! Attention-index sequence.

use serde::{Deserialize, Serialize};

use super::AttentionModel;

/// Pre-start boundary placed before index 0 by [`AttentionModel::All`].
pub const SENTINEL_INDEX: isize = -1;

/// Ordered indices of the attention observations of a series.
///
/// Indices are signed so the pre-start [`SENTINEL_INDEX`] can lead the
/// sequence; every other entry addresses an observation of the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttentionIndices {
    /// Model that produced the indices.
    pub model: AttentionModel,
    /// Indices in ascending order.
    pub indices: Vec<isize>,
}

impl AttentionIndices {
    /// Create a new attention-index sequence.
    pub fn new(model: AttentionModel, indices: Vec<isize>) -> Self {
        Self { model, indices }
    }

    pub fn as_slice(&self) -> &[isize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Final attention index, if any.
    pub fn last(&self) -> Option<isize> {
        self.indices.last().copied()
    }

    /// Indices that address real observations (the sentinel excluded).
    pub fn observations(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices
            .iter()
            .filter(|&&i| i >= 0)
            .map(|&i| i as usize)
    }

    pub fn into_vec(self) -> Vec<isize> {
        self.indices
    }
}
