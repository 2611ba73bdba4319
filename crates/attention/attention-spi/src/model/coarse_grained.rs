//! Coarse-graining result types.

use serde::{Deserialize, Serialize};

use super::AttentionModel;

/// Contiguous, inclusive range of observations averaged into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// First observation (inclusive).
    pub start: usize,
    /// Last observation (inclusive).
    pub end: usize,
}

impl Segment {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of observations covered.
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Always `false`: a segment covers at least its `end` observation.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Slice of `series` covered by this segment.
    pub fn slice<'a>(&self, series: &'a [f64]) -> &'a [f64] {
        &series[self.start..=self.end]
    }
}

/// Full output of one coarse-graining pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoarseGrained {
    /// Attention model used.
    pub model: AttentionModel,
    /// Stride applied to the attention indices.
    pub scale_factor: usize,
    /// Separator indices, tail included.
    pub separators: Vec<isize>,
    /// Retained segments, in order.
    pub segments: Vec<Segment>,
    /// Mean of each segment (the coarse-grained series).
    pub values: Vec<f64>,
}

impl CoarseGrained {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total number of observations averaged.
    pub fn covered(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
