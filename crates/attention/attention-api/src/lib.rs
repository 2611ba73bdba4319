//! Attention-Scale API
//!
//! Configuration types and builders for attention-scale coarse-graining.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use attention_spi::{
    AttentionError, AttentionIndices, AttentionModel, CoarseGrained, EntropyProfile, ErrorKind,
    Result, ScalePoint, Segment, SENTINEL_INDEX,
};

// ============================================================================
// Coarse-Graining Configuration
// ============================================================================

/// Coarse-graining configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoarseGrainConfig {
    /// Attention model used to pick separators (default: all).
    pub model: AttentionModel,
    /// Stride over the attention indices (default: 1).
    pub scale_factor: usize,
}

impl Default for CoarseGrainConfig {
    fn default() -> Self {
        Self {
            model: AttentionModel::All,
            scale_factor: 1,
        }
    }
}

impl CoarseGrainConfig {
    pub fn new(model: AttentionModel, scale_factor: usize) -> Self {
        Self {
            model,
            scale_factor,
        }
    }

    /// Classical multiscale coarse-graining at `scale_factor`.
    pub fn multiscale(scale_factor: usize) -> Self {
        Self::new(AttentionModel::All, scale_factor)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scale_factor == 0 {
            return Err(AttentionError::invalid_parameter(
                "scale_factor",
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Builder for CoarseGrainConfig.
#[derive(Debug, Default)]
pub struct CoarseGrainConfigBuilder {
    model: Option<AttentionModel>,
    scale_factor: Option<usize>,
}

impl CoarseGrainConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: AttentionModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn scale_factor(mut self, scale_factor: usize) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<CoarseGrainConfig> {
        let defaults = CoarseGrainConfig::default();
        let config = CoarseGrainConfig {
            model: self.model.unwrap_or(defaults.model),
            scale_factor: self.scale_factor.unwrap_or(defaults.scale_factor),
        };
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Profile Configuration
// ============================================================================

/// Largest rounding precision accepted; `10^decimals` stays finite and exact
/// up to here.
pub const MAX_DECIMALS: u32 = 15;

/// Reject rounding precisions above [`MAX_DECIMALS`].
pub fn validate_decimals(decimals: u32) -> Result<()> {
    if decimals > MAX_DECIMALS {
        return Err(AttentionError::invalid_parameter(
            "decimals",
            &format!("must be at most {MAX_DECIMALS}, got {decimals}"),
        ));
    }
    Ok(())
}

/// Multiscale entropy profile configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Attention model used at every scale (default: all).
    pub model: AttentionModel,
    /// Largest scale factor evaluated, inclusive (default: 10).
    pub max_scale: usize,
    /// Round coarse-grained values to this many decimals before grouping.
    #[serde(default)]
    pub decimals: Option<u32>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            model: AttentionModel::All,
            max_scale: 10,
            decimals: None,
        }
    }
}

impl ProfileConfig {
    pub fn new(model: AttentionModel, max_scale: usize) -> Self {
        Self {
            model,
            max_scale,
            decimals: None,
        }
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_scale == 0 {
            return Err(AttentionError::invalid_parameter(
                "max_scale",
                "must be positive",
            ));
        }
        if let Some(decimals) = self.decimals {
            validate_decimals(decimals)?;
        }
        Ok(())
    }
}

/// Builder for ProfileConfig.
#[derive(Debug, Default)]
pub struct ProfileConfigBuilder {
    model: Option<AttentionModel>,
    max_scale: Option<usize>,
    decimals: Option<u32>,
}

impl ProfileConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: AttentionModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn max_scale(mut self, max_scale: usize) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ProfileConfig> {
        let defaults = ProfileConfig::default();
        let config = ProfileConfig {
            model: self.model.unwrap_or(defaults.model),
            max_scale: self.max_scale.unwrap_or(defaults.max_scale),
            decimals: self.decimals.or(defaults.decimals),
        };
        config.validate()?;
        Ok(config)
    }
}
