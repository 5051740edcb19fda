//! Iterative factorial with arbitrary-precision results.

use num_bigint::BigUint;

use crate::error::ExerciseError;

/// Compute `n!` as the product `1 * 2 * ... * n`.
///
/// `0!` and `1!` are both `1`. Negative input is rejected.
pub fn factorial(n: i64) -> Result<BigUint, ExerciseError> {
    if n < 0 {
        return Err(ExerciseError::Validation(format!(
            "factorial input must be non-negative, got {n}"
        )));
    }

    let mut product = BigUint::from(1u32);
    for i in 2..=n.unsigned_abs() {
        product *= i;
    }
    Ok(product)
}
