use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::math::{matrix_pow, Matrix};

/// Errors reported by the Fibonacci evaluators.
///
/// The sequence is 1-indexed with f(1) = f(2) = 1; any index below 1
/// (including 0, which this convention leaves undefined) is outside the
/// domain. Indices cross the API as `i64` so negative inputs are
/// representable and rejected rather than silently wrapped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    #[error("index {0} is outside the sequence domain (the first index is 1)")]
    IndexOutOfDomain(i64),
}

// Validates the 1-indexed position and narrows it for the internal helpers.
fn check_index(n: i64) -> Result<u64, FibError> {
    if n < 1 {
        return Err(FibError::IndexOutOfDomain(n));
    }
    Ok(n as u64)
}

// Textbook recursion; `calls` accumulates the size of the call tree.
fn naive(k: u64, calls: &mut u64) -> BigUint {
    *calls += 1;
    if k <= 2 {
        BigUint::one()
    } else {
        naive(k - 1, calls) + naive(k - 2, calls)
    }
}

/// Computes f(n) by naive recursion, f(n) = f(n-1) + f(n-2) with
/// f(1) = f(2) = 1 and no memoization.
///
/// The call tree has Theta(phi^n) nodes, so this is the deliberately slow
/// baseline for comparing against [`fib_fast`] and [`fib_matrix`]. Keep `n`
/// small (under roughly 40) unless you are timing exactly that blowup.
///
/// # Example
/// ```
/// use fibonacci_convergence::fibonacci::fib_naive;
/// use num_bigint::BigUint;
/// assert_eq!(fib_naive(10).unwrap(), BigUint::from(55u32));
/// ```
pub fn fib_naive(n: i64) -> Result<BigUint, FibError> {
    let n = check_index(n)?;
    let mut calls = 0;
    Ok(naive(n, &mut calls))
}

/// Same recursion as [`fib_naive`], additionally reporting how many
/// recursive calls were made.
///
/// The count grows geometrically with `n` (the ratio of successive counts
/// approaches the golden ratio), which is what structurally separates this
/// variant from the logarithmic-depth fast algorithms.
pub fn fib_naive_counted(n: i64) -> Result<(BigUint, u64), FibError> {
    let n = check_index(n)?;
    let mut calls = 0;
    let value = naive(n, &mut calls);
    Ok((value, calls))
}

// Fast doubling over the 0-indexed sequence: returns (F(k), F(k+1)) with
// F(0) = 0, F(1) = 1, using
//   F(2m)   = F(m) * (2*F(m+1) - F(m))
//   F(2m+1) = F(m)^2 + F(m+1)^2
fn fast_doubling(k: u64) -> (BigUint, BigUint) {
    if k == 0 {
        return (BigUint::zero(), BigUint::one());
    }

    let (f, g) = fast_doubling(k >> 1);
    let even = &f * ((&g << 1u32) - &f);
    let odd = &f * &f + &g * &g;

    if k & 1 == 0 {
        (even, odd)
    } else {
        let next = &even + &odd;
        (odd, next)
    }
}

/// Computes f(n) by fast doubling in O(log n) big-integer operations.
///
/// Produces the identical value to [`fib_naive`] for every valid index, but
/// scales to indices where f(n) has hundreds of thousands of digits.
///
/// # Example
/// ```
/// use fibonacci_convergence::fibonacci::fib_fast;
/// use num_bigint::BigUint;
/// assert_eq!(
///     fib_fast(100).unwrap(),
///     BigUint::parse_bytes(b"354224848179261915075", 10).unwrap()
/// );
/// ```
pub fn fib_fast(n: i64) -> Result<BigUint, FibError> {
    let n = check_index(n)?;
    Ok(fast_doubling(n).0)
}

/// Computes f(n) from the matrix-power identity
/// [f(n+1); f(n)] = Q^(n-1) * [1; 1], where Q = [[1,1],[1,0]].
///
/// The power is taken by repeated squaring, so the cost is O(log n) 2x2
/// big-integer multiplies, asymptotically comparable to [`fib_fast`].
pub fn fib_matrix(n: i64) -> Result<BigUint, FibError> {
    let n = check_index(n)?;
    let power = matrix_pow(Matrix::companion(), (n - 1) as usize);
    // The bottom row of Q^(n-1) applied to [1; 1] is f(n).
    Ok(&power.c + &power.d)
}

/// Generates f(1) through f(limit) by linear iteration.
///
/// Each value is the sum of the previous two, so this runs in O(limit)
/// big-integer additions and O(limit) space. This is the producer the ratio
/// analyzer in [`crate::ratio`] consumes.
///
/// # Example
/// ```
/// use fibonacci_convergence::fibonacci::sequence;
/// use num_bigint::BigUint;
/// let fibs = sequence(10).unwrap();
/// assert_eq!(fibs.len(), 10);
/// assert_eq!(fibs[9], BigUint::from(55u32));
/// ```
pub fn sequence(limit: i64) -> Result<Vec<BigUint>, FibError> {
    let limit = check_index(limit)? as usize;

    let mut fib_sequence = Vec::with_capacity(limit);
    fib_sequence.push(BigUint::one());
    if limit > 1 {
        fib_sequence.push(BigUint::one());
    }
    for i in 2..limit {
        let next_value = &fib_sequence[i - 1] + &fib_sequence[i - 2];
        fib_sequence.push(next_value);
    }

    Ok(fib_sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn base_cases() {
        assert_eq!(fib_naive(1).unwrap(), big(1));
        assert_eq!(fib_naive(2).unwrap(), big(1));
        assert_eq!(fib_naive(3).unwrap(), big(2));
    }

    #[test]
    fn known_values() {
        assert_eq!(fib_fast(10).unwrap(), big(55));
        assert_eq!(fib_fast(20).unwrap(), big(6765));
        assert_eq!(
            fib_fast(100).unwrap(),
            BigUint::parse_bytes(b"354224848179261915075", 10).unwrap()
        );
    }

    #[test]
    fn value_exceeds_64_bits() {
        // f(93) is the first value past u64::MAX; exact arithmetic must hold.
        assert_eq!(
            fib_fast(94).unwrap(),
            BigUint::parse_bytes(b"19740274219868223167", 10).unwrap()
        );
    }

    #[test]
    fn variants_agree() {
        for n in 1..=30 {
            let naive = fib_naive(n).unwrap();
            assert_eq!(naive, fib_fast(n).unwrap(), "fast disagrees at n={n}");
            assert_eq!(naive, fib_matrix(n).unwrap(), "matrix disagrees at n={n}");
        }
    }

    #[test]
    fn recurrence_holds() {
        for n in 3..=50 {
            assert_eq!(
                fib_fast(n).unwrap(),
                fib_fast(n - 1).unwrap() + fib_fast(n - 2).unwrap(),
                "recurrence fails at n={n}"
            );
        }
    }

    #[test]
    fn sequence_matches_point_evaluators() {
        let fibs = sequence(50).unwrap();
        assert_eq!(fibs.len(), 50);
        for (i, value) in fibs.iter().enumerate() {
            assert_eq!(*value, fib_fast(i as i64 + 1).unwrap());
        }
    }

    #[test]
    fn sequence_of_one() {
        assert_eq!(sequence(1).unwrap(), vec![big(1)]);
    }

    #[test]
    fn indices_below_one_are_rejected() {
        assert_eq!(fib_naive(-1), Err(FibError::IndexOutOfDomain(-1)));
        assert_eq!(fib_naive_counted(-1), Err(FibError::IndexOutOfDomain(-1)));
        assert_eq!(fib_fast(-1), Err(FibError::IndexOutOfDomain(-1)));
        assert_eq!(fib_matrix(-1), Err(FibError::IndexOutOfDomain(-1)));
        assert_eq!(sequence(-1), Err(FibError::IndexOutOfDomain(-1)));
        assert_eq!(fib_fast(0), Err(FibError::IndexOutOfDomain(0)));
    }

    #[test]
    fn call_counts_grow_geometrically() {
        // calls(n) = 2 * f(n) - 1 for this base case, so successive ratios
        // approach the golden ratio.
        let (_, calls_24) = fib_naive_counted(24).unwrap();
        let (_, calls_25) = fib_naive_counted(25).unwrap();
        let ratio = calls_25 as f64 / calls_24 as f64;
        assert!(
            (ratio - crate::math::GOLDEN_RATIO).abs() < 1e-3,
            "call-count ratio {ratio} is not near phi"
        );
    }
}
