//! Contract definitions for attention-scale analysis.
//!
//! This module contains trait definitions that providers must implement.

mod attention_selector;
mod entropy_estimator;
mod scale_reducer;

pub use attention_selector::AttentionSelector;
pub use entropy_estimator::EntropyEstimator;
pub use scale_reducer::ScaleReducer;
