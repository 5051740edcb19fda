//! Sum of the multiples of 3 or 5 below a bound.

use crate::error::ExerciseError;

/// Sum every integer in `[3, n)` divisible by 3 or by 5.
///
/// Values divisible by both (15, 30, ...) are counted once. Fails when the
/// sum does not fit in an `i64` (`n` beyond roughly 6.2e9).
pub fn sum_of_multiples(n: i64) -> Result<i64, ExerciseError> {
    if n < 3 {
        return Err(ExerciseError::Validation(format!(
            "upper bound must be at least 3, got {n}"
        )));
    }

    let below = i128::from(n) - 1;
    let total =
        multiples_below(3, below) + multiples_below(5, below) - multiples_below(15, below);
    i64::try_from(total).map_err(|_| {
        ExerciseError::Validation(format!("sum of multiples below {n} overflows i64"))
    })
}

/// `step + 2*step + ... + k*step` for the largest `k*step <= max`.
fn multiples_below(step: i128, max: i128) -> i128 {
    let k = max / step;
    step * k * (k + 1) / 2
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(sum_of_multiples(10), Ok(23));
        assert_eq!(sum_of_multiples(20), Ok(78));
        assert_eq!(sum_of_multiples(30), Ok(195));
    }

    #[test]
    fn upper_bound_is_exclusive() {
        assert_eq!(sum_of_multiples(3), Ok(0));
        assert_eq!(sum_of_multiples(4), Ok(3));
        assert_eq!(sum_of_multiples(6), Ok(8));
    }

    #[test]
    fn shared_multiples_counted_once() {
        // 3 + 5 + 6 + 9 + 10 + 12 + 15
        assert_eq!(sum_of_multiples(16), Ok(60));
    }

    #[test]
    fn matches_brute_force() {
        for n in 3..500 {
            let expected: i64 = (3..n).filter(|i| i % 3 == 0 || i % 5 == 0).sum();
            assert_eq!(sum_of_multiples(n), Ok(expected), "n = {n}");
        }
    }

    #[test]
    fn large_bounds_near_the_limit() {
        assert_eq!(sum_of_multiples(1000), Ok(233_168));
        assert!(sum_of_multiples(6_000_000_000).is_ok());
    }

    #[test]
    fn overflow_is_a_validation_error() {
        assert_matches!(
            sum_of_multiples(10_000_000_000),
            Err(ExerciseError::Validation(_))
        );
        assert_matches!(sum_of_multiples(i64::MAX), Err(ExerciseError::Validation(_)));
    }

    #[test]
    fn rejects_bounds_below_three() {
        assert_matches!(sum_of_multiples(0), Err(ExerciseError::Validation(_)));
        assert_matches!(sum_of_multiples(2), Err(ExerciseError::Validation(_)));
        assert_matches!(sum_of_multiples(-5), Err(ExerciseError::Validation(_)));
    }
}
