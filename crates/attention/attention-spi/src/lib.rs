//! Attention-Scale Service Provider Interface
//!
//! Defines traits and types for attention-guided multiscale coarse-graining
//! and Shannon entropy over the coarse-grained series.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AttentionSelector, EntropyEstimator, ScaleReducer};
pub use error::{AttentionError, ErrorKind, Result};
pub use model::{
    AttentionIndices, AttentionModel, CoarseGrained, EntropyProfile, ScalePoint, Segment,
    SENTINEL_INDEX,
};
