//! Small numeric helpers shared by the accumulators.
//!
//! Every helper returns a finite value for degenerate input (empty
//! samples, zero denominators) so downstream serialization never sees
//! NaN or infinity.

/// Mean of a sample list; 0.0 when empty.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().sum();
    finite_or_zero(sum / samples.len() as f64)
}

/// Population standard deviation of a sample list; 0.0 when empty.
pub fn population_std(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let m = mean(samples);
    let variance = samples.iter().map(|s| (s - m).powi(2)).sum::<f64>() / samples.len() as f64;
    finite_or_zero(variance.sqrt())
}

/// Divide, returning 0.0 for a zero or non-finite denominator.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    finite_or_zero(numerator / denominator)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    finite_or_zero((value * 100.0).round() / 100.0)
}

/// Round to three decimal places.
pub fn round3(value: f64) -> f64 {
    finite_or_zero((value * 1000.0).round() / 1000.0)
}

/// Replace non-finite values with 0.0 at the output boundary.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_std() {
        // Population std of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_std(&samples) - 2.0).abs() < 1e-9);
        assert_eq!(population_std(&[]), 0.0);
        assert_eq!(population_std(&[3.0]), 0.0);
    }

    #[test]
    fn test_safe_ratio_degenerate() {
        assert_eq!(safe_ratio(5.0, 0.0), 0.0);
        assert_eq!(safe_ratio(5.0, -1.0), 0.0);
        assert_eq!(safe_ratio(5.0, f64::NAN), 0.0);
        assert!((safe_ratio(1.0, 4.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(0.333_33), 0.33);
        assert_eq!(round3(0.333_33), 0.333);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(1.5), 1.5);
    }
}
