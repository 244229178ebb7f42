use num_bigint::BigUint;
use num_traits::ToPrimitive;

// Quotient of two arbitrary-precision integers as a double.
//
// Both operands are shifted right by the same amount until the denominator
// fits in 64 bits, so the quotient keeps full double-precision relative
// accuracy no matter how many digits the inputs carry. Converting the raw
// values through f64 would saturate to infinity past f(1476).
fn big_ratio_to_f64(num: &BigUint, den: &BigUint) -> f64 {
    let shift = den.bits().saturating_sub(64);
    let n = (num >> shift).to_f64().unwrap_or(f64::NAN);
    let d = (den >> shift).to_f64().unwrap_or(f64::NAN);
    n / d
}

/// Projects a Fibonacci sequence f(1)..f(N) onto its consecutive-ratio
/// sequence r(n) = f(n+1) / f(n) for n = 1..N-1.
///
/// The iterator is lazy and borrows the input without mutating it; calling
/// `ratios` again on the same slice replays the identical values. As n grows
/// the ratios converge to the golden ratio, the dominant eigenvalue of the
/// companion matrix.
///
/// # Example
/// ```
/// use fibonacci_convergence::fibonacci::sequence;
/// use fibonacci_convergence::math::GOLDEN_RATIO;
/// use fibonacci_convergence::ratio::ratios;
///
/// let fibs = sequence(30).unwrap();
/// let last = ratios(&fibs).last().unwrap();
/// assert!((last - GOLDEN_RATIO).abs() < 1e-10);
/// ```
pub fn ratios(seq: &[BigUint]) -> impl Iterator<Item = f64> + '_ {
    seq.windows(2).map(|pair| big_ratio_to_f64(&pair[1], &pair[0]))
}
