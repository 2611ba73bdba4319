//! Attention selector implementations.

use std::cmp::Reverse;
use std::collections::HashMap;

use attention_spi::{
    AttentionError, AttentionIndices, AttentionModel, AttentionSelector, Result, SENTINEL_INDEX,
};

/// Shortest series any selector accepts.
pub const MIN_SERIES_LEN: usize = 2;

/// Grouping key for exact value equality.
///
/// Adding `0.0` folds `-0.0` into `0.0`; every other value keeps its bit pattern.
pub(crate) fn value_key(x: f64) -> u64 {
    (x + 0.0).to_bits()
}

/// Select the attention observations of `series` under `model`.
pub fn select_attention(series: &[f64], model: AttentionModel) -> Result<AttentionIndices> {
    if series.len() < MIN_SERIES_LEN {
        return Err(AttentionError::InsufficientData {
            required: MIN_SERIES_LEN,
            actual: series.len(),
        });
    }

    let indices = match model {
        AttentionModel::All => all_indices(series),
        AttentionModel::Peak => peak_indices(series),
        AttentionModel::Mode => mode_indices(series),
        AttentionModel::Median => median_indices(series),
    };

    tracing::debug!(
        %model,
        series_len = series.len(),
        attention = indices.len(),
        "selected attention observations"
    );
    Ok(AttentionIndices::new(model, indices))
}

/// Boxed selector for `model`.
pub fn selector_for(model: AttentionModel) -> Box<dyn AttentionSelector> {
    match model {
        AttentionModel::All => Box::new(AllObservations),
        AttentionModel::Peak => Box::new(PeakPoints),
        AttentionModel::Mode => Box::new(MostFrequent),
        AttentionModel::Median => Box::new(MedianValue),
    }
}

fn all_indices(series: &[f64]) -> Vec<isize> {
    (SENTINEL_INDEX..series.len() as isize).collect()
}

fn peak_indices(series: &[f64]) -> Vec<isize> {
    let last = series.len() - 1;
    (0..series.len())
        .filter(|&i| i == 0 || i == last || is_strict_extremum(series, i))
        .map(|i| i as isize)
        .collect()
}

/// Strict local extremum against both neighbours, threshold zero.
///
/// Both differences must share a strict sign, so plateaus never qualify.
/// Requires `0 < i < series.len() - 1`.
fn is_strict_extremum(series: &[f64], i: usize) -> bool {
    let ahead = series[i] - series[i + 1];
    let behind = series[i] - series[i - 1];
    (ahead > 0.0 && behind > 0.0) || (ahead < 0.0 && behind < 0.0)
}

fn mode_indices(series: &[f64]) -> Vec<isize> {
    match most_frequent_value(series) {
        Some(mode) => matching_indices(series, mode),
        None => Vec::new(),
    }
}

fn median_indices(series: &[f64]) -> Vec<isize> {
    match distinct_median(series) {
        Some(median) => matching_indices(series, median),
        None => Vec::new(),
    }
}

/// Most frequent value; among equally frequent values the one seen first wins.
pub fn most_frequent_value(series: &[f64]) -> Option<f64> {
    // key -> (count, first position)
    let mut tally: HashMap<u64, (usize, usize)> = HashMap::new();
    for (i, &x) in series.iter().enumerate() {
        tally.entry(value_key(x)).or_insert((0, i)).0 += 1;
    }

    tally
        .values()
        .max_by_key(|&&(count, first)| (count, Reverse(first)))
        .map(|&(_, first)| series[first])
}

/// Median of the distinct values of `series`.
///
/// For an even number of distinct values the lower middle one is taken.
pub fn distinct_median(series: &[f64]) -> Option<f64> {
    let mut distinct: Vec<f64> = series.iter().map(|&x| x + 0.0).collect();
    distinct.sort_by(|a, b| a.total_cmp(b));
    distinct.dedup_by_key(|x| x.to_bits());

    let n = distinct.len();
    if n == 0 {
        return None;
    }
    let position = if n % 2 == 0 { n / 2 - 1 } else { n / 2 };
    Some(distinct[position])
}

/// First index, last index, and every index holding `target`.
fn matching_indices(series: &[f64], target: f64) -> Vec<isize> {
    let last = series.len() - 1;
    let key = value_key(target);
    (0..series.len())
        .filter(|&i| i == 0 || i == last || value_key(series[i]) == key)
        .map(|i| i as isize)
        .collect()
}

// ============================================================================
// Selector types
// ============================================================================

/// Every observation, led by the pre-start sentinel.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllObservations;

impl AttentionSelector for AllObservations {
    fn select(&self, series: &[f64]) -> Result<AttentionIndices> {
        select_attention(series, self.model())
    }

    fn model(&self) -> AttentionModel {
        AttentionModel::All
    }
}

/// Endpoints plus strict local maxima and minima.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeakPoints;

impl AttentionSelector for PeakPoints {
    fn select(&self, series: &[f64]) -> Result<AttentionIndices> {
        select_attention(series, self.model())
    }

    fn model(&self) -> AttentionModel {
        AttentionModel::Peak
    }
}

/// Endpoints plus every occurrence of the most frequent value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostFrequent;

impl AttentionSelector for MostFrequent {
    fn select(&self, series: &[f64]) -> Result<AttentionIndices> {
        select_attention(series, self.model())
    }

    fn model(&self) -> AttentionModel {
        AttentionModel::Mode
    }
}

/// Endpoints plus every occurrence of the median distinct value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianValue;

impl AttentionSelector for MedianValue {
    fn select(&self, series: &[f64]) -> Result<AttentionIndices> {
        select_attention(series, self.model())
    }

    fn model(&self) -> AttentionModel {
        AttentionModel::Median
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_series() -> Vec<f64> {
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 3.0, 1.0, 3.0, 0.0, 4.0, 2.0, 1.0, 3.0]
    }

    fn indices(series: &[f64], model: AttentionModel) -> Vec<isize> {
        select_attention(series, model).unwrap().into_vec()
    }

    #[test]
    fn test_all_leads_with_sentinel() {
        assert_eq!(indices(&[7.0, 8.0, 9.0], AttentionModel::All), vec![-1, 0, 1, 2]);
    }

    #[test]
    fn test_peak_reference_series() {
        assert_eq!(
            indices(&reference_series(), AttentionModel::Peak),
            vec![0, 4, 6, 7, 8, 9, 11, 12]
        );
    }

    #[test]
    fn test_peak_plateau_is_not_extremum() {
        assert_eq!(indices(&[1.0, 3.0, 3.0, 1.0], AttentionModel::Peak), vec![0, 3]);
        assert_eq!(indices(&[5.0, 5.0, 5.0, 5.0], AttentionModel::Peak), vec![0, 3]);
    }

    #[test]
    fn test_peak_monotonic_has_only_endpoints() {
        let series: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert_eq!(indices(&series, AttentionModel::Peak), vec![0, 9]);
    }

    #[test]
    fn test_peak_two_points() {
        assert_eq!(indices(&[2.0, 1.0], AttentionModel::Peak), vec![0, 1]);
    }

    #[test]
    fn test_mode_reference_series() {
        assert_eq!(
            indices(&reference_series(), AttentionModel::Mode),
            vec![0, 2, 5, 7, 12]
        );
    }

    #[test]
    fn test_mode_tie_break_first_seen() {
        // 2.0 and 1.0 both occur twice; 2.0 appears first
        assert_eq!(most_frequent_value(&[2.0, 1.0, 1.0, 2.0, 9.0]), Some(2.0));
        assert_eq!(
            indices(&[2.0, 1.0, 1.0, 2.0, 9.0], AttentionModel::Mode),
            vec![0, 3, 4]
        );
        assert_eq!(most_frequent_value(&[1.0, 2.0, 2.0, 1.0, 9.0]), Some(1.0));
    }

    #[test]
    fn test_mode_groups_signed_zero() {
        assert_eq!(
            indices(&[0.0, -0.0, 1.0, 2.0], AttentionModel::Mode),
            vec![0, 1, 3]
        );
    }

    #[test]
    fn test_median_even_distinct_takes_lower_middle() {
        // distinct {0, 1, 2, 3, 4, 5} -> 2
        assert_eq!(distinct_median(&reference_series()), Some(2.0));
        assert_eq!(
            indices(&reference_series(), AttentionModel::Median),
            vec![0, 1, 10, 12]
        );
    }

    #[test]
    fn test_median_odd_distinct_takes_middle() {
        assert_eq!(distinct_median(&[3.0, 1.0, 2.0, 2.0]), Some(2.0));
        assert_eq!(indices(&[3.0, 1.0, 2.0, 2.0], AttentionModel::Median), vec![0, 2, 3]);
    }

    #[test]
    fn test_median_ignores_multiplicity() {
        // multiset median would be 1.0
        assert_eq!(distinct_median(&[1.0, 1.0, 1.0, 1.0, 5.0, 9.0]), Some(5.0));
    }

    #[test]
    fn test_every_model_includes_endpoints() {
        let series = reference_series();
        let last = (series.len() - 1) as isize;
        for model in AttentionModel::VARIANTS {
            let idx = indices(&series, model);
            assert!(idx.contains(&0), "{model} misses index 0");
            assert_eq!(*idx.last().unwrap(), last, "{model} misses last index");
            assert!(idx.windows(2).all(|w| w[0] < w[1]), "{model} not ascending");
        }
    }

    #[test]
    fn test_short_series_rejected() {
        for model in AttentionModel::VARIANTS {
            for series in [&[][..], &[1.0][..]] {
                let err = select_attention(series, model).unwrap_err();
                assert_eq!(
                    err,
                    AttentionError::InsufficientData {
                        required: 2,
                        actual: series.len()
                    }
                );
                assert!(err.is_invalid_argument());
            }
        }
    }

    #[test]
    fn test_selector_types_match_dispatch() {
        let series = reference_series();
        for model in AttentionModel::VARIANTS {
            let selector = selector_for(model);
            assert_eq!(selector.model(), model);
            assert_eq!(
                selector.select(&series).unwrap(),
                select_attention(&series, model).unwrap()
            );
        }
    }

    #[test]
    fn test_selection_does_not_mutate_input() {
        let series = reference_series();
        let copy = series.clone();
        let _ = PeakPoints.select(&series).unwrap();
        let _ = MedianValue.select(&series).unwrap();
        assert_eq!(series, copy);
    }
}
