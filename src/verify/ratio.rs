//! Floored elementwise ratios
//!
//! Each compared value pair becomes the ratio
//!
//! ```text
//! r_k = (ref_k + ε) / (batch_k + ε)
//! ```
//!
//! with ε = [`RATIO_FLOOR`](crate::config::RATIO_FLOOR). The floor is added to
//! both sides explicitly: two values that are both legitimately ~0 (down to
//! ~1e-300 for reactions irrelevant at a state) give a ratio of ~1 instead of
//! `0/0`.
//!
//! Only the extreme ratios matter for acceptance, so the ratios are reduced to
//! [`RatioBounds`] on the fly instead of being materialized.

use thiserror::Error;

/// Ratio of two values with an additive floor
#[inline]
pub fn floored_ratio(reference: f64, batch: f64, floor: f64) -> f64 {
    (reference + floor) / (batch + floor)
}

/// Extreme ratios over one reaction's values and where they occur
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBounds {
    /// Smallest ratio
    pub min: f64,

    /// Largest ratio
    pub max: f64,

    /// Step index of the smallest ratio
    pub min_step: usize,

    /// Step index of the largest ratio
    pub max_step: usize,
}

/// Reasons the ratio reduction cannot produce bounds
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatioError {
    /// No values to compare
    #[error("no values to compare")]
    Empty,

    /// The two inputs differ in length
    #[error("length mismatch: {reference} reference values, {batch} batch values")]
    LengthMismatch { reference: usize, batch: usize },

    /// A ratio is NaN (malformed input, e.g. NaN or ∞/∞)
    #[error("ratio is NaN at step {step} (reference {reference:e}, batch {batch:e})")]
    NotANumber {
        step: usize,
        reference: f64,
        batch: f64,
    },
}

/// Reduce two aligned value slices to their floored-ratio extremes
///
/// Infinite ratios are legitimate (a batch value of 0 against a large
/// reference value) and simply fall outside any tolerance band. NaN ratios
/// mean the input itself is malformed and are reported as errors.
///
/// # Example
///
/// ```rust
/// use kinetics_parity::verify::ratio_bounds;
///
/// let bounds = ratio_bounds(&[1.0, 2.0, 0.0], &[1.0, 1.0, 0.0], 1e-300).unwrap();
/// assert_eq!(bounds.min, 1.0);
/// assert_eq!(bounds.max, 2.0);
/// assert_eq!(bounds.max_step, 1);
/// ```
pub fn ratio_bounds(reference: &[f64], batch: &[f64], floor: f64) -> Result<RatioBounds, RatioError> {
    if reference.len() != batch.len() {
        return Err(RatioError::LengthMismatch {
            reference: reference.len(),
            batch: batch.len(),
        });
    }
    if reference.is_empty() {
        return Err(RatioError::Empty);
    }

    let mut bounds = RatioBounds {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
        min_step: 0,
        max_step: 0,
    };

    for (step, (&r, &b)) in reference.iter().zip(batch).enumerate() {
        let ratio = floored_ratio(r, b, floor);
        if ratio.is_nan() {
            return Err(RatioError::NotANumber {
                step,
                reference: r,
                batch: b,
            });
        }
        if ratio < bounds.min {
            bounds.min = ratio;
            bounds.min_step = step;
        }
        if ratio > bounds.max {
            bounds.max = ratio;
            bounds.max_step = step;
        }
    }

    Ok(bounds)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RATIO_FLOOR;

    #[test]
    fn test_identical_values_give_unit_ratio() {
        let values = [1.0e13, 3.2e-7, 0.0, 1.0e-300, 5.5];
        let bounds = ratio_bounds(&values, &values, RATIO_FLOOR).unwrap();
        assert_eq!(bounds.min, 1.0);
        assert_eq!(bounds.max, 1.0);
    }

    #[test]
    fn test_floor_keeps_zero_over_zero_finite() {
        assert_eq!(floored_ratio(0.0, 0.0, RATIO_FLOOR), 1.0);
        assert!(floored_ratio(0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_floor_dominates_tiny_values() {
        // Both sides negligible against the floor -> ratio near 1
        let ratio = floored_ratio(1e-320, 0.0, RATIO_FLOOR);
        assert!((ratio - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_extremes_and_positions() {
        let reference = [1.0, 0.5, 3.0, 1.0];
        let batch = [1.0, 1.0, 1.0, 1.0];
        let bounds = ratio_bounds(&reference, &batch, RATIO_FLOOR).unwrap();
        assert_eq!(bounds.min, 0.5);
        assert_eq!(bounds.min_step, 1);
        assert_eq!(bounds.max, 3.0);
        assert_eq!(bounds.max_step, 2);
    }

    #[test]
    fn test_infinite_ratio_is_not_an_error() {
        let bounds = ratio_bounds(&[1.0e10], &[0.0], RATIO_FLOOR).unwrap();
        assert!(bounds.max.is_infinite());
    }

    #[test]
    fn test_nan_is_an_error() {
        let err = ratio_bounds(&[1.0, f64::NAN], &[1.0, 1.0], RATIO_FLOOR).unwrap_err();
        assert!(matches!(err, RatioError::NotANumber { step: 1, .. }));

        let err = ratio_bounds(&[f64::INFINITY], &[f64::INFINITY], RATIO_FLOOR).unwrap_err();
        assert!(matches!(err, RatioError::NotANumber { step: 0, .. }));
    }

    #[test]
    fn test_length_mismatch_and_empty() {
        assert_eq!(
            ratio_bounds(&[1.0, 2.0], &[1.0], RATIO_FLOOR),
            Err(RatioError::LengthMismatch { reference: 2, batch: 1 })
        );
        assert_eq!(ratio_bounds(&[], &[], RATIO_FLOOR), Err(RatioError::Empty));
    }
}
