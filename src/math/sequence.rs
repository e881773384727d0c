//! Pure functions over finite sequences of numbers.

use super::error::MathError;

/// Calculate the arithmetic mean of `values`.
///
/// Fails with [`MathError::EmptySequence`] when `values` is empty.
///
/// # Example
///
/// ```rust
/// use tally::math::average;
///
/// assert_eq!(average(&[1.0, 2.0, 3.0]), Ok(2.0));
/// assert!(average(&[]).is_err());
/// ```
pub fn average(values: &[f64]) -> Result<f64, MathError> {
    if values.is_empty() {
        return Err(MathError::EmptySequence);
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Find the largest value in `values`.
///
/// Fails with [`MathError::EmptySequence`] when `values` is empty.
pub fn maximum(values: &[f64]) -> Result<f64, MathError> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(MathError::EmptySequence)
}

/// Find the smallest value in `values`.
///
/// Fails with [`MathError::EmptySequence`] when `values` is empty.
pub fn minimum(values: &[f64]) -> Result<f64, MathError> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(MathError::EmptySequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [f64; 6] = [2.5, 8.1, 3.7, 9.2, 1.4, 6.8];

    #[test]
    fn average_of_known_values() {
        let mean = average(&VALUES).unwrap();
        assert!((mean - 5.283_333_333_333_333).abs() < 1e-9);
    }

    #[test]
    fn average_of_single_value_is_the_value() {
        assert_eq!(average(&[4.2]), Ok(4.2));
    }

    #[test]
    fn maximum_finds_largest() {
        assert_eq!(maximum(&VALUES), Ok(9.2));
    }

    #[test]
    fn minimum_finds_smallest() {
        assert_eq!(minimum(&VALUES), Ok(1.4));
    }

    #[test]
    fn extremes_handle_duplicates() {
        assert_eq!(maximum(&[3.0, 3.0, 1.0]), Ok(3.0));
        assert_eq!(minimum(&[3.0, 3.0, 5.0]), Ok(3.0));
    }

    #[test]
    fn extremes_handle_negatives() {
        assert_eq!(maximum(&[-5.0, -1.0, -9.0]), Ok(-1.0));
        assert_eq!(minimum(&[-5.0, -1.0, -9.0]), Ok(-9.0));
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(average(&[]), Err(MathError::EmptySequence));
        assert_eq!(maximum(&[]), Err(MathError::EmptySequence));
        assert_eq!(minimum(&[]), Err(MathError::EmptySequence));
    }
}
