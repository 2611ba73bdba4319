//! Data models for attention-scale analysis.
//!
//! This module contains the data structures passed between selectors,
//! reducers and entropy estimators.

mod attention_indices;
mod attention_model;
mod coarse_grained;
mod entropy_profile;

pub use attention_indices::{AttentionIndices, SENTINEL_INDEX};
pub use attention_model::AttentionModel;
pub use coarse_grained::{CoarseGrained, Segment};
pub use entropy_profile::{EntropyProfile, ScalePoint};
