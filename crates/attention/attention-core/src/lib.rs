//! Attention-Scale Core
//!
//! Implementations for attention selection, coarse-graining, Shannon entropy
//! and multiscale entropy profiles.
//!
//! The pipeline is `select_attention` -> `MeanReducer` -> `shannon_entropy`;
//! [`coarse_grain`] runs the first two steps and [`entropy_profile`] runs all
//! three for a range of scale factors.

pub mod entropy;
pub mod profile;
pub mod reducer;
pub mod selectors;

// Re-export SPI traits for implementations
pub use attention_spi::{
    AttentionError, AttentionIndices, AttentionModel, AttentionSelector, CoarseGrained,
    EntropyEstimator, EntropyProfile, ErrorKind, Result, ScalePoint, ScaleReducer, Segment,
    SENTINEL_INDEX,
};

// Re-export main types
pub use entropy::{round_to, shannon_entropy, shannon_entropy_of, ShannonEntropy};
pub use profile::{entropy_profile, Profiler};
pub use reducer::{
    coarse_grain, coarse_grain_detailed, segments, separators, CoarseGrainer, MeanReducer,
};
pub use selectors::{
    distinct_median, most_frequent_value, select_attention, selector_for, AllObservations,
    MedianValue, MostFrequent, PeakPoints, MIN_SERIES_LEN,
};
