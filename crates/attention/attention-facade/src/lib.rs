//! Attention-Scale Facade
//!
//! Unified re-exports for attention-scale coarse-graining.
//!
//! This facade provides a single entry point to the whole stack:
//! - `AttentionSelector`, `ScaleReducer` and `EntropyEstimator` traits, models and errors from SPI
//! - Configuration types and builders from API
//! - Selectors, `MeanReducer`, `ShannonEntropy` and `Profiler` from Core

// Re-export everything from SPI
pub use attention_spi::*;

// Re-export everything from API
pub use attention_api::*;

// Re-export everything from Core
pub use attention_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use attention_core::{
        coarse_grain, coarse_grain_detailed, entropy_profile, select_attention, shannon_entropy,
        CoarseGrainer, Profiler,
    };
    pub use attention_spi::{
        AttentionError, AttentionModel, AttentionSelector, EntropyEstimator, Result, ScaleReducer,
    };
    pub use attention_api::{CoarseGrainConfig, ProfileConfig};
}
