//! Separator selection, segmentation and mean reduction.

use attention_api::CoarseGrainConfig;
use attention_spi::{
    AttentionError, AttentionIndices, AttentionModel, CoarseGrained, Result, ScaleReducer,
    Segment, SENTINEL_INDEX,
};

use crate::selectors::select_attention;

fn check_scale_factor(scale_factor: usize) -> Result<()> {
    if scale_factor == 0 {
        return Err(AttentionError::invalid_parameter(
            "scale_factor",
            "must be positive",
        ));
    }
    Ok(())
}

/// Every `scale_factor`-th attention index, terminated by the last observation.
///
/// The last observation (`series_len - 1`) is appended when the stride stops
/// short of the final attention index.
pub fn separators(indices: &[isize], series_len: usize, scale_factor: usize) -> Result<Vec<isize>> {
    check_scale_factor(scale_factor)?;

    let mut separators: Vec<isize> = indices.iter().step_by(scale_factor).copied().collect();
    if let (Some(&chosen), Some(&last)) = (separators.last(), indices.last()) {
        if chosen < last {
            separators.push(series_len as isize - 1);
        }
    }
    Ok(separators)
}

/// Segments bounded by consecutive separators.
///
/// Segment `i` covers `separators[i] + 1 ..= separators[i + 1]`; pairs that
/// do not advance are dropped.
pub fn segments(separators: &[isize], series_len: usize) -> Result<Vec<Segment>> {
    if separators.len() < 2 {
        return Err(AttentionError::DegenerateSeparators {
            count: separators.len(),
        });
    }
    if let Some(&index) = separators
        .iter()
        .find(|&&s| s < SENTINEL_INDEX || s >= series_len as isize)
    {
        return Err(AttentionError::IndexOutOfRange {
            index,
            len: series_len,
        });
    }

    Ok(separators
        .windows(2)
        .filter(|pair| pair[1] - pair[0] > 0)
        .map(|pair| Segment::new((pair[0] + 1) as usize, pair[1] as usize))
        .collect())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Reduces each segment to its arithmetic mean.
///
/// Non-finite observations are not rejected: NaN and infinities propagate
/// into the mean of the segment holding them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanReducer;

impl MeanReducer {
    pub fn new() -> Self {
        Self
    }

    /// Coarse-grain and keep separators and segments alongside the means.
    pub fn reduce_detailed(
        &self,
        indices: &AttentionIndices,
        series: &[f64],
        scale_factor: usize,
    ) -> Result<CoarseGrained> {
        let separators = separators(indices.as_slice(), series.len(), scale_factor)?;
        let segments = segments(&separators, series.len())?;
        let values: Vec<f64> = segments.iter().map(|s| mean(s.slice(series))).collect();

        tracing::trace!(
            model = %indices.model,
            scale_factor,
            separators = separators.len(),
            segments = segments.len(),
            "reduced series"
        );

        Ok(CoarseGrained {
            model: indices.model,
            scale_factor,
            separators,
            segments,
            values,
        })
    }
}

impl ScaleReducer for MeanReducer {
    fn reduce(
        &self,
        indices: &AttentionIndices,
        series: &[f64],
        scale_factor: usize,
    ) -> Result<Vec<f64>> {
        self.reduce_detailed(indices, series, scale_factor)
            .map(CoarseGrained::into_values)
    }
}

// ============================================================================
// Coarse-graining entry points
// ============================================================================

/// Coarse-grain `series` at `scale_factor` using `model` attention.
pub fn coarse_grain(series: &[f64], scale_factor: usize, model: AttentionModel) -> Result<Vec<f64>> {
    coarse_grain_detailed(series, scale_factor, model).map(CoarseGrained::into_values)
}

/// Like [`coarse_grain`], keeping separators and segments.
pub fn coarse_grain_detailed(
    series: &[f64],
    scale_factor: usize,
    model: AttentionModel,
) -> Result<CoarseGrained> {
    check_scale_factor(scale_factor)?;

    if series.iter().any(|x| !x.is_finite()) {
        tracing::warn!(%model, "series holds non-finite values; they propagate into the means");
    }

    let indices = select_attention(series, model)?;
    let grained = MeanReducer.reduce_detailed(&indices, series, scale_factor)?;

    tracing::debug!(
        %model,
        scale_factor,
        series_len = series.len(),
        output_len = grained.len(),
        "coarse-grained series"
    );
    Ok(grained)
}

/// Coarse-graining runner bound to a validated configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoarseGrainer {
    config: CoarseGrainConfig,
}

impl CoarseGrainer {
    /// Create from configuration.
    pub fn from_config(config: CoarseGrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CoarseGrainConfig {
        &self.config
    }

    pub fn run(&self, series: &[f64]) -> Result<Vec<f64>> {
        coarse_grain(series, self.config.scale_factor, self.config.model)
    }

    pub fn run_detailed(&self, series: &[f64]) -> Result<CoarseGrained> {
        coarse_grain_detailed(series, self.config.scale_factor, self.config.model)
    }
}
