//! Shannon entropy over empirical value frequencies.

use std::collections::HashMap;
use std::hash::Hash;

use attention_api::validate_decimals;
use attention_spi::{AttentionError, EntropyEstimator, Result};

use crate::selectors::value_key;

/// Shannon entropy (bits) of the distinct values of `sequence`.
///
/// Values are grouped by exact equality; no tolerance is applied, so callers
/// that need banding should pass the sequence through [`round_to`] first.
pub fn shannon_entropy(sequence: &[f64]) -> Result<f64> {
    entropy_of_keys(sequence.iter().map(|&x| value_key(x)))
}

/// Shannon entropy (bits) of any sequence of hashable symbols.
pub fn shannon_entropy_of<T: Hash + Eq>(sequence: &[T]) -> Result<f64> {
    entropy_of_keys(sequence.iter())
}

fn entropy_of_keys<K, I>(keys: I) -> Result<f64>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut tally: HashMap<K, usize> = HashMap::new();
    let mut total = 0usize;
    for key in keys {
        *tally.entry(key).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return Err(AttentionError::EmptySequence);
    }
    if tally.len() == 1 {
        return Ok(0.0);
    }

    // Sorted so the sum does not depend on map iteration order.
    let mut counts: Vec<usize> = tally.into_values().collect();
    counts.sort_unstable();

    let n = total as f64;
    let entropy: f64 = counts
        .iter()
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum();
    Ok(entropy)
}

/// Round every value to `decimals` places.
///
/// Precisions above [`MAX_DECIMALS`](attention_api::MAX_DECIMALS) are rejected.
pub fn round_to(series: &[f64], decimals: u32) -> Result<Vec<f64>> {
    validate_decimals(decimals)?;
    let factor = 10f64.powi(decimals as i32);
    Ok(series.iter().map(|x| (x * factor).round() / factor).collect())
}

/// Shannon entropy estimator in bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShannonEntropy;

impl ShannonEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropyEstimator for ShannonEntropy {
    fn entropy(&self, sequence: &[f64]) -> Result<f64> {
        shannon_entropy(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_entropy() {
        let h = shannon_entropy(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((h - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_identical_values_exactly_zero() {
        let h = shannon_entropy(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(h, 0.0);
        assert!(h.is_sign_positive());
    }

    #[test]
    fn test_skewed_distribution() {
        // p = 1/2, 1/4, 1/4
        let h = shannon_entropy(&[3.0, 1.5, 7.0 / 3.0, 3.0]).unwrap();
        assert!((h - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let err = shannon_entropy(&[]).unwrap_err();
        assert_eq!(err, AttentionError::EmptySequence);
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_permutation_invariant() {
        let a = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 7.5];
        let b = [3.0, 7.5, 2.0, 3.0, 1.0, 3.0, 2.0];
        assert_eq!(shannon_entropy(&a).unwrap(), shannon_entropy(&b).unwrap());
    }

    #[test]
    fn test_exact_equality_no_tolerance() {
        let h = shannon_entropy(&[1.0, 1.0 + 1e-12]).unwrap();
        assert!((h - 1.0).abs() < 1e-12);
        let rounded = round_to(&[1.0, 1.0 + 1e-12], 6).unwrap();
        assert_eq!(shannon_entropy(&rounded).unwrap(), 0.0);
    }

    #[test]
    fn test_signed_zero_grouped() {
        assert_eq!(shannon_entropy(&[0.0, -0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_symbol_entropy() {
        let h = shannon_entropy_of(&["a", "b", "a", "b"]).unwrap();
        assert!((h - 1.0).abs() < 1e-12);
        assert_eq!(shannon_entropy_of(&['x', 'x']).unwrap(), 0.0);
        assert!(shannon_entropy_of::<u8>(&[]).is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(&[1.23456, -2.5551], 2).unwrap(), vec![1.23, -2.56]);
        assert_eq!(round_to(&[2.4, 2.6], 0).unwrap(), vec![2.0, 3.0]);
    }

    #[test]
    fn test_round_to_rejects_overflowing_precision() {
        let err = round_to(&[1.0, 2.0], 400).unwrap_err();
        assert!(err.is_invalid_argument());

        let rounded = round_to(&[1.0, 2.0], attention_api::MAX_DECIMALS).unwrap();
        assert!(rounded.iter().all(|x| x.is_finite()));
        assert!((shannon_entropy(&rounded).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_estimator_trait() {
        let estimator: Box<dyn EntropyEstimator> = Box::new(ShannonEntropy::new());
        assert!((estimator.entropy(&[0.0, 1.0]).unwrap() - 1.0).abs() < 1e-12);
    }
}
