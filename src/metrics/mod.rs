//! Confusion-matrix metrics for two-class classifiers
//!
//! Derives the two scores the upstream trainer does not report directly:
//!
//! | Metric          | Formula                                         | Range     |
//! |-----------------|-------------------------------------------------|-----------|
//! | MCC             | (tp·tn − fp·fn) / √((tp+fp)(tp+fn)(tn+fp)(tn+fn)) | −1.0..1.0 |
//! | Geometric Mean  | √(sensitivity · specificity)                    | 0.0..1.0  |
//!
//! ## Degenerate matrices
//!
//! A matrix where a denominator term is zero (e.g. a fold with no positive
//! examples) produces IEEE `NaN` from the division. That value is propagated
//! as-is: no clamping, no error. Downstream rounding ([`round4`]) passes
//! `NaN` through unchanged, so degenerate folds are visible in the metrics
//! log rather than silently masked.
//!
//! ## Rounding
//!
//! [`round4`] is the single rounding authority for logged metrics: four
//! decimal places, half-away-from-zero, locale-independent. The rule is part
//! of the log format contract — historical rows must stay comparable.

use serde::{Deserialize, Serialize};

/// Raw prediction counts for a two-class outcome.
///
/// Counts come from one cross-validation fold. The type is only
/// constructible from the four two-class counts; outcomes with any other
/// class count have no representation here, and callers fall back to `0.0`
/// for both derived metrics (see [`ConfusionMatrix::from_class_counts`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Positive examples predicted positive
    pub true_positive: u64,
    /// Negative examples predicted negative
    pub true_negative: u64,
    /// Negative examples predicted positive
    pub false_positive: u64,
    /// Positive examples predicted negative
    pub false_negative: u64,
}

impl ConfusionMatrix {
    /// Create a matrix from the four class-pair counts.
    #[must_use]
    pub const fn new(
        true_positive: u64,
        true_negative: u64,
        false_positive: u64,
        false_negative: u64,
    ) -> Self {
        Self {
            true_positive,
            true_negative,
            false_positive,
            false_negative,
        }
    }

    /// Build from a square class-pair count table, row = actual class,
    /// column = predicted class.
    ///
    /// Returns `None` unless the table is exactly 2×2 — the metrics below
    /// are only defined for binary outcomes, and callers are expected to
    /// fall back to `0.0` in that case:
    ///
    /// ```rust
    /// use barrido::metrics::ConfusionMatrix;
    ///
    /// let counts = vec![vec![50, 0], vec![0, 50]];
    /// let mcc = ConfusionMatrix::from_class_counts(&counts).map_or(0.0, |m| m.mcc());
    /// assert!((mcc - 1.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn from_class_counts(counts: &[Vec<u64>]) -> Option<Self> {
        match counts {
            [row0, row1] if row0.len() == 2 && row1.len() == 2 => Some(Self {
                true_positive: row0[0],
                false_negative: row0[1],
                false_positive: row1[0],
                true_negative: row1[1],
            }),
            _ => None,
        }
    }

    /// Total number of classified examples.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    /// True-positive rate, `tp / (tp + fn)`.
    ///
    /// `NaN` when the fold contains no positive examples.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sensitivity(&self) -> f64 {
        self.true_positive as f64 / (self.true_positive + self.false_negative) as f64
    }

    /// True-negative rate, `tn / (fp + tn)`.
    ///
    /// `NaN` when the fold contains no negative examples.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn specificity(&self) -> f64 {
        self.true_negative as f64 / (self.false_positive + self.true_negative) as f64
    }

    /// Matthews Correlation Coefficient.
    ///
    /// `(tp·tn − fp·fn) / sqrt((tp+fp)(tp+fn)(tn+fp)(tn+fn))`, computed in
    /// `f64` so the numerator difference cannot underflow on unsigned
    /// counts. A zero denominator (any bracketed sum zero) yields `NaN`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mcc(&self) -> f64 {
        let tp = self.true_positive as f64;
        let tn = self.true_negative as f64;
        let fp = self.false_positive as f64;
        let fne = self.false_negative as f64;

        let numerator = tp * tn - fp * fne;
        let denominator = ((tp + fp) * (tp + fne) * (tn + fp) * (tn + fne)).sqrt();

        numerator / denominator
    }

    /// Geometric Mean of sensitivity and specificity.
    ///
    /// Balanced accuracy measure robust to class imbalance. Inherits `NaN`
    /// from either rate when its denominator is zero.
    #[must_use]
    pub fn geometric_mean(&self) -> f64 {
        (self.sensitivity() * self.specificity()).sqrt()
    }
}

/// Round a metric to four decimal places, half-away-from-zero.
///
/// This is the documented rounding rule for every scalar written to the
/// metrics log. `NaN` and infinities pass through unchanged.
#[must_use]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_classifier() {
        let m = ConfusionMatrix::new(50, 50, 0, 0);
        assert!((m.mcc() - 1.0).abs() < f64::EPSILON);
        assert!((m.geometric_mean() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inverted_classifier() {
        // Everything misclassified: maximally anti-correlated
        let m = ConfusionMatrix::new(0, 0, 25, 25);
        assert!((m.mcc() + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_matrix_is_nan() {
        // No true predictions at all and no positive/negative examples on
        // one axis: MCC denominator terms hit zero
        let m = ConfusionMatrix::new(0, 0, 25, 0);
        assert!(m.mcc().is_nan());
    }

    #[test]
    fn test_geometric_mean_nan_without_positives() {
        let m = ConfusionMatrix::new(0, 40, 10, 0);
        assert!(m.sensitivity().is_nan());
        assert!(m.geometric_mean().is_nan());
    }

    #[test]
    fn test_mcc_known_value() {
        // Hand-computed: (6*4 - 1*2) / sqrt(7*8*5*6) = 22 / sqrt(1680)
        let m = ConfusionMatrix::new(6, 4, 1, 2);
        let expected = 22.0 / 1680.0_f64.sqrt();
        assert!((m.mcc() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_from_class_counts_rejects_three_classes() {
        let counts = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert!(ConfusionMatrix::from_class_counts(&counts).is_none());
    }

    #[test]
    fn test_from_class_counts_layout() {
        // Row = actual, column = predicted
        let counts = vec![vec![10, 3], vec![2, 15]];
        let m = ConfusionMatrix::from_class_counts(&counts).unwrap();
        assert_eq!(m.true_positive, 10);
        assert_eq!(m.false_negative, 3);
        assert_eq!(m.false_positive, 2);
        assert_eq!(m.true_negative, 15);
        assert_eq!(m.total(), 30);
    }

    #[test]
    fn test_round4_half_away_from_zero() {
        assert!((round4(0.123_45) - 0.1235).abs() < f64::EPSILON);
        assert!((round4(-0.123_45) + 0.1235).abs() < f64::EPSILON);
        assert!((round4(0.8) - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round4_passes_nan_through() {
        assert!(round4(f64::NAN).is_nan());
        assert!(round4(f64::INFINITY).is_infinite());
    }
}
