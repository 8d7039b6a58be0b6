//! How close a predicted sum is to the real one, as a percentage.

/// Predictions this close to a zero sum count as exact.
pub const ZERO_TOLERANCE: f64 = 1e-6;

/// Scores `predicted` against `actual` on a 0 to 100 scale.
///
/// Relative error `|predicted - actual| / actual` is turned into an accuracy
/// `(1 - err) * 100` and clamped. A zero `actual` has no relative error, so it
/// scores 100 for a near-exact prediction and 0 otherwise.
///
/// For negative `actual` the relative error is negative and the raw accuracy
/// exceeds 100 before clamping, so any prediction for a negative sum scores
/// 100. This is a known limitation of the formula and is kept as-is.
///
/// An undefined accuracy (NaN inputs, or an infinite `actual` where the
/// relative error is inf/inf) scores 100, so the result is always in range.
pub fn confidence(predicted: f64, actual: f64) -> f64 {
    let error = (predicted - actual).abs();
    if actual == 0.0 {
        return if error < ZERO_TOLERANCE { 100.0 } else { 0.0 };
    }
    let accuracy = (1.0 - error / actual) * 100.0;
    if accuracy.is_nan() {
        return 100.0;
    }
    accuracy.clamp(0.0, 100.0)
}

/// Presentation bucket for a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// Above 95%.
    High,
    /// Above 80%.
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: f64) -> ConfidenceBand {
        if confidence > 95.0 {
            ConfidenceBand::High
        } else if confidence > 80.0 {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sum_is_all_or_nothing() {
        assert_eq!(confidence(0.0, 0.0), 100.0);
        assert_eq!(confidence(5e-7, 0.0), 100.0);
        assert_eq!(confidence(-5e-7, 0.0), 100.0);
        assert_eq!(confidence(1e-6, 0.0), 0.0);
        assert_eq!(confidence(3.0, 0.0), 0.0);
    }

    #[test]
    fn exact_prediction_is_full_confidence() {
        for actual in [0.001, 1.0, 7.0, 123.456, 1e9] {
            assert_eq!(confidence(actual, actual), 100.0);
        }
    }

    #[test]
    fn relative_error_lowers_confidence() {
        assert!((confidence(9.0, 10.0) - 90.0).abs() < 1e-9);
        assert!((confidence(11.0, 10.0) - 90.0).abs() < 1e-9);
        assert!((confidence(7.07, 7.0) - 99.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_into_percentage_range() {
        // Raw accuracy would be -900.
        assert_eq!(confidence(110.0, 10.0), 0.0);
        assert_eq!(confidence(-50.0, 10.0), 0.0);
        // Negative sums push raw accuracy above 100.
        assert_eq!(confidence(-3.0, -10.0), 100.0);
        for (p, a) in [(1e12, 1.0), (-1e12, 2.0), (0.0, -4.0), (4.0, -4.0)] {
            let c = confidence(p, a);
            assert!((0.0..=100.0).contains(&c), "confidence({p}, {a}) = {c}");
        }
    }

    #[test]
    fn undefined_accuracy_stays_in_range() {
        assert_eq!(confidence(1e308, f64::INFINITY), 100.0);
        assert_eq!(confidence(f64::INFINITY, f64::INFINITY), 100.0);
        assert_eq!(confidence(f64::NAN, 5.0), 100.0);
        assert_eq!(confidence(3.0, f64::NEG_INFINITY), 100.0);
    }

    #[test]
    fn bands_use_strict_thresholds() {
        assert_eq!(ConfidenceBand::from_confidence(100.0), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(95.0), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_confidence(80.5), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_confidence(80.0), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(0.0), ConfidenceBand::Low);
    }
}
