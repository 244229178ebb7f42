use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Double-precision golden ratio, the dominant eigenvalue of the companion
/// matrix. Sufficient for qualitative convergence checks; use
/// [`golden_ratio_digits`] when more accuracy is needed.
pub const GOLDEN_RATIO: f64 = 1.618033988749895;

// Matrix structure for 2x2 matrices over arbitrary-precision integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub a: BigUint,
    pub b: BigUint,
    pub c: BigUint,
    pub d: BigUint,
}

impl Matrix {
    /// The identity matrix.
    pub fn identity() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::zero(),
            c: BigUint::zero(),
            d: BigUint::one(),
        }
    }

    /// The Fibonacci companion matrix Q = [[1,1],[1,0]].
    ///
    /// Raising Q to the (n-1)-th power and applying it to the column vector
    /// [1; 1] yields [f(n+1); f(n)].
    pub fn companion() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::one(),
            c: BigUint::one(),
            d: BigUint::zero(),
        }
    }
}

// Matrix multiplication for 2x2 matrices
pub fn matrix_mult(m1: &Matrix, m2: &Matrix) -> Matrix {
    Matrix {
        a: &m1.a * &m2.a + &m1.b * &m2.c,
        b: &m1.a * &m2.b + &m1.b * &m2.d,
        c: &m1.c * &m2.a + &m1.d * &m2.c,
        d: &m1.c * &m2.b + &m1.d * &m2.d,
    }
}

// Matrix exponentiation using squaring (O(log n))
pub fn matrix_pow(mut base: Matrix, mut exp: usize) -> Matrix {
    let mut result = Matrix::identity();

    while exp > 0 {
        if exp % 2 == 1 {
            result = matrix_mult(&result, &base);
        }
        base = matrix_mult(&base, &base);
        exp /= 2;
    }

    result
}

/// Eigenvalues of the companion matrix, larger first.
///
/// The characteristic polynomial of Q = [[1,1],[1,0]] is
/// lambda^2 - lambda - 1 (trace 1, determinant -1), so the roots are
/// (1 +- sqrt(5)) / 2. The larger root is the golden ratio.
pub fn eigenvalues() -> (f64, f64) {
    let trace = 1.0_f64;
    let det = -1.0_f64;
    let discriminant = (trace * trace - 4.0 * det).sqrt();
    ((trace + discriminant) / 2.0, (trace - discriminant) / 2.0)
}

/// The golden ratio phi = (1 + sqrt(5)) / 2 to `digits` decimal digits.
///
/// Computed exactly in integer arithmetic: sqrt(5) is taken as the floor
/// square root of 5 scaled by 10^(2 * (digits + guard)), so every returned
/// digit is correct. The guard digits absorb the floor rounding of the
/// integer square root and the final halving.
///
/// # Example
/// ```
/// use fibonacci_convergence::math::golden_ratio_digits;
/// assert!(golden_ratio_digits(10).starts_with("1.6180339887"));
/// ```
pub fn golden_ratio_digits(digits: usize) -> String {
    const GUARD: usize = 4;

    let scale = BigUint::from(10u32).pow((digits + GUARD) as u32);
    let root_five = (BigUint::from(5u32) * &scale * &scale).sqrt();
    let phi_scaled = (&scale + root_five) / BigUint::from(2u32);

    // phi_scaled = floor(phi * 10^(digits + GUARD)); the leading digit is
    // the integer part, the rest is the fractional expansion.
    let s = phi_scaled.to_string();
    format!("{}.{}", &s[..1], &s[1..=digits])
}
