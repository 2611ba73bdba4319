//! Multiscale entropy profile types.

use serde::{Deserialize, Serialize};

use super::AttentionModel;

/// Entropy of the coarse-grained series at one scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePoint {
    pub scale_factor: usize,
    /// Length of the coarse-grained series.
    pub length: usize,
    /// Shannon entropy in bits.
    pub entropy: f64,
}

/// Entropy as a function of the scale factor for one attention model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyProfile {
    pub model: AttentionModel,
    /// One point per scale, ascending.
    pub points: Vec<ScalePoint>,
}

impl EntropyProfile {
    pub fn new(model: AttentionModel, points: Vec<ScalePoint>) -> Self {
        Self { model, points }
    }

    /// Entropy values in scale order.
    pub fn entropies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.entropy).collect()
    }

    /// Point for a given scale factor.
    pub fn at(&self, scale_factor: usize) -> Option<&ScalePoint> {
        self.points.iter().find(|p| p.scale_factor == scale_factor)
    }

    /// Entropy lost between the finest scale and `scale_factor`.
    pub fn entropy_loss(&self, scale_factor: usize) -> Option<f64> {
        let first = self.points.first()?;
        let point = self.at(scale_factor)?;
        Some(first.entropy - point.entropy)
    }
}
