//! Pure scalar math functions.
//!
//! All functions here are pure - deterministic, no side effects, and no
//! interaction with calculator state.

use super::error::MathError;

/// Raise `base` to a non-negative integer `exponent`.
///
/// `power(x, 0)` is `1.0` for any base, including zero.
///
/// # Example
///
/// ```rust
/// use tally::math::power;
///
/// assert_eq!(power(2.0, 10), 1024.0);
/// assert_eq!(power(0.0, 0), 1.0);
/// ```
pub fn power(base: f64, exponent: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// Calculate the square root of `x`.
///
/// Fails with [`MathError::NegativeSquareRoot`] when `x < 0`.
///
/// # Example
///
/// ```rust
/// use tally::math::square_root;
///
/// assert_eq!(square_root(64.0), Ok(8.0));
/// assert!(square_root(-1.0).is_err());
/// ```
pub fn square_root(x: f64) -> Result<f64, MathError> {
    if x < 0.0 {
        return Err(MathError::NegativeSquareRoot(x));
    }
    Ok(x.sqrt())
}

/// Calculate `n!` for a non-negative `n`.
///
/// Fails with [`MathError::NegativeFactorial`] when `n < 0`, and with
/// [`MathError::FactorialOverflow`] when the result does not fit in `u128`
/// (`n > 34`).
///
/// # Example
///
/// ```rust
/// use tally::math::factorial;
///
/// assert_eq!(factorial(5), Ok(120));
/// assert_eq!(factorial(0), Ok(1));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u128, MathError> {
    if n < 0 {
        return Err(MathError::NegativeFactorial(n));
    }
    let mut result: u128 = 1;
    for factor in 2..=n as u128 {
        result = result
            .checked_mul(factor)
            .ok_or(MathError::FactorialOverflow(n))?;
    }
    Ok(result)
}

/// Test whether `n` is prime.
///
/// Numbers below 2 are not prime. Uses trial division up to the integer
/// square root of `n`, so the cost is O(√n).
///
/// # Example
///
/// ```rust
/// use tally::math::is_prime;
///
/// assert!(is_prime(17));
/// assert!(is_prime(2));
/// assert!(!is_prime(1));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        // 2 and 3
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    // divisor <= n / divisor avoids overflow near i64::MAX
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
