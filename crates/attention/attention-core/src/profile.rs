//! Entropy of the coarse-grained series across scale factors.

use attention_api::ProfileConfig;
use attention_spi::{
    AttentionIndices, AttentionModel, EntropyEstimator, EntropyProfile, Result, ScalePoint,
    ScaleReducer,
};
use rayon::prelude::*;

use crate::entropy::{round_to, ShannonEntropy};
use crate::reducer::MeanReducer;
use crate::selectors::select_attention;

/// Entropy profile of `series` for scale factors `1..=max_scale`.
pub fn entropy_profile(
    series: &[f64],
    model: AttentionModel,
    max_scale: usize,
) -> Result<EntropyProfile> {
    Profiler::from_config(ProfileConfig::new(model, max_scale))?.run(series)
}

/// Computes entropy profiles; scales are evaluated in parallel.
///
/// Attention indices are selected once and shared by every scale.
#[derive(Debug, Clone)]
pub struct Profiler {
    config: ProfileConfig,
    reducer: MeanReducer,
    estimator: ShannonEntropy,
}

impl Profiler {
    /// Create from configuration.
    pub fn from_config(config: ProfileConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            reducer: MeanReducer::new(),
            estimator: ShannonEntropy::new(),
        })
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Run across scales with rayon.
    pub fn run(&self, series: &[f64]) -> Result<EntropyProfile> {
        let indices = select_attention(series, self.config.model)?;
        let points = (1..=self.config.max_scale)
            .into_par_iter()
            .map(|scale| self.point(&indices, series, scale))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            model = %self.config.model,
            max_scale = self.config.max_scale,
            series_len = series.len(),
            "computed entropy profile"
        );
        Ok(EntropyProfile::new(self.config.model, points))
    }

    /// Run across scales on the calling thread.
    pub fn run_sequential(&self, series: &[f64]) -> Result<EntropyProfile> {
        let indices = select_attention(series, self.config.model)?;
        let points = (1..=self.config.max_scale)
            .map(|scale| self.point(&indices, series, scale))
            .collect::<Result<Vec<_>>>()?;
        Ok(EntropyProfile::new(self.config.model, points))
    }

    fn point(&self, indices: &AttentionIndices, series: &[f64], scale: usize) -> Result<ScalePoint> {
        let values = self.reducer.reduce(indices, series, scale)?;
        let values = match self.config.decimals {
            Some(decimals) => round_to(&values, decimals)?,
            None => values,
        };
        let entropy = self.estimator.entropy(&values)?;

        tracing::trace!(scale, length = values.len(), entropy, "profile point");
        Ok(ScalePoint {
            scale_factor: scale,
            length: values.len(),
            entropy,
        })
    }
}
