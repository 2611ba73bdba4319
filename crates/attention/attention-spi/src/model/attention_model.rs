//! Attention model types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AttentionError;

/// Strategy used to pick attention observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttentionModel {
    /// Every observation, preceded by the pre-start sentinel (classical multiscale)
    #[default]
    All,
    /// Strict local maxima and minima
    Peak,
    /// Observations equal to the most frequent value
    Mode,
    /// Observations equal to the median of the distinct values
    Median,
}

impl AttentionModel {
    /// Every model, in declaration order.
    pub const VARIANTS: [AttentionModel; 4] = [
        AttentionModel::All,
        AttentionModel::Peak,
        AttentionModel::Mode,
        AttentionModel::Median,
    ];

    /// Lowercase name, as used by serde and `Display`.
    pub fn name(&self) -> &'static str {
        match self {
            AttentionModel::All => "all",
            AttentionModel::Peak => "peak",
            AttentionModel::Mode => "mode",
            AttentionModel::Median => "median",
        }
    }

    /// Short tag from the attention-scale literature.
    pub fn tag(&self) -> &'static str {
        match self {
            AttentionModel::All => "MS",
            AttentionModel::Peak => "PAS",
            AttentionModel::Mode => "OAS",
            AttentionModel::Median => "MAS",
        }
    }
}

impl fmt::Display for AttentionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AttentionModel {
    type Err = AttentionError;

    /// Accepts lowercase names and literature tags, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "ms" => Ok(AttentionModel::All),
            "peak" | "pas" => Ok(AttentionModel::Peak),
            "mode" | "oas" => Ok(AttentionModel::Mode),
            "median" | "mas" => Ok(AttentionModel::Median),
            _ => Err(AttentionError::UnknownModel(s.to_string())),
        }
    }
}
