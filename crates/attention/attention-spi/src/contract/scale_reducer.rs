//! Scale reducer trait definition.

use crate::error::Result;
use crate::model::AttentionIndices;

/// Reduces a series to one value per separator-bounded segment.
pub trait ScaleReducer: Send + Sync {
    /// Coarse-grain `series` using every `scale_factor`-th attention index
    /// as a separator.
    fn reduce(
        &self,
        indices: &AttentionIndices,
        series: &[f64],
        scale_factor: usize,
    ) -> Result<Vec<f64>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttentionModel;

    /// Mock implementation: takes the value at each attention index
    struct PickReducer;

    impl ScaleReducer for PickReducer {
        fn reduce(
            &self,
            indices: &AttentionIndices,
            series: &[f64],
            scale_factor: usize,
        ) -> Result<Vec<f64>> {
            Ok(indices
                .observations()
                .step_by(scale_factor.max(1))
                .map(|i| series[i])
                .collect())
        }
    }

    #[test]
    fn test_mock_reducer() {
        let indices = AttentionIndices::new(AttentionModel::Peak, vec![0, 1, 2, 3]);
        let out = PickReducer.reduce(&indices, &[4.0, 5.0, 6.0, 7.0], 2).unwrap();
        assert_eq!(out, vec![4.0, 6.0]);
    }

    #[test]
    fn test_reducer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PickReducer>();
    }
}
