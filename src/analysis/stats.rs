//! Basic descriptive statistics over numeric sequences

/// Arithmetic mean, or 0 for an empty sequence
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n, not n - 1)
///
/// Returns 0 for sequences of length 0 or 1. Non-finite inputs propagate
/// as NaN.
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deviation_degenerate() {
        assert_eq!(standard_deviation(&[]), 0.0);
        assert_eq!(standard_deviation(&[42.0]), 0.0);
        assert_eq!(standard_deviation(&[f64::NAN]), 0.0);
    }

    #[test]
    fn test_standard_deviation_known_values() {
        assert_eq!(standard_deviation(&[1.0, 1.0, 1.0, 1.0]), 0.0);
        assert_eq!(standard_deviation(&[0.0, 10.0]), 5.0);
        // Population, not sample: [2,4,4,4,5,5,7,9] -> 2
        assert_eq!(
            standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]),
            2.0
        );
    }

    #[test]
    fn test_nan_propagates() {
        assert!(standard_deviation(&[1.0, f64::NAN, 3.0]).is_nan());
        assert!(mean(&[1.0, f64::NAN]).is_nan());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_std_dev_is_non_negative(
            values in prop::collection::vec(-1.0e6f64..1.0e6, 0..200)
        ) {
            prop_assert!(standard_deviation(&values) >= 0.0);
        }

        #[test]
        fn test_std_dev_shift_invariant(
            values in prop::collection::vec(-1.0e3f64..1.0e3, 2..100),
            shift in -1.0e3f64..1.0e3
        ) {
            let shifted: Vec<f64> = values.iter().map(|v| v + shift).collect();
            let a = standard_deviation(&values);
            let b = standard_deviation(&shifted);
            prop_assert!((a - b).abs() < 1e-6, "{} vs {}", a, b);
        }
    }
}
