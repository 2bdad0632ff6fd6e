//! Numeric reductions over aggregated observations.

/// Arithmetic mean of a slice of samples.
///
/// Returns `0.0` for an empty slice. That convention is a contract, not a
/// fallback: weekday buckets with no observations must report a number so
/// that chart consumers never special-case absence.
pub fn mean<T>(values: &[T]) -> f64
where
    T: Copy + Into<f64>,
{
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|&v| v.into()).sum();
    sum / values.len() as f64
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_zero() {
        let empty: [i32; 0] = [];
        assert_eq!(mean(&empty), 0.0);
    }

    #[test]
    fn test_mean_integers() {
        assert_eq!(mean(&[1, 2, 3]), 2.0);
    }

    #[test]
    fn test_mean_negative_integers() {
        assert_eq!(mean(&[-3, -2, -1]), -2.0);
    }

    #[test]
    fn test_mean_symmetric_around_zero() {
        assert_eq!(mean(&[-1, 1]), 0.0);
    }

    #[test]
    fn test_mean_floats() {
        assert!((mean(&[1.8, 2.1, 3.7, 4.3]) - 2.975).abs() < 1e-9);
    }

    #[test]
    fn test_mean_single_sample_is_identity() {
        assert_eq!(mean(&[30047]), 30047.0);
    }
}
