//! # Fibonacci Convergence Library
//!
//! This library computes Fibonacci numbers with arbitrary precision by three algorithms of
//! very different cost, derives the matrix-power formulation of the recurrence, and projects
//! a computed sequence onto its consecutive-ratio sequence to observe convergence toward the
//! golden ratio. Values are `BigUint`, so indices far beyond the 64-bit overflow point
//! (n ~ 93) are exact.
//!
//! The sequence is 1-indexed with f(1) = f(2) = 1; indices below 1 are rejected with
//! [`fibonacci::FibError`].
//!
//! ## Key Features
//! - **Naive Recursion**: The textbook exponential-time definition, kept unoptimized on
//!   purpose as the slow baseline for timing comparisons, with an optional call-tree count.
//! - **Fast Doubling**: O(log n) computation via the f(2k)/f(2k+1) identities.
//! - **Matrix Exponentiation**: f(n) from powers of the companion matrix [[1,1],[1,0]],
//!   raised by repeated squaring; the raw matrix power is exposed too.
//! - **Spectral Analysis**: The eigenvalues of the companion matrix in closed form, and the
//!   golden ratio expanded to any number of exact decimal digits.
//! - **Ratio Convergence**: A lazy projection r(n) = f(n+1)/f(n) whose values approach the
//!   golden ratio, suitable for plotting by an external consumer.
//!
//! ## Overview of Modules
//!
//! ### `fibonacci`
//! The evaluators: `fib_naive`, `fib_naive_counted`, `fib_fast`, `fib_matrix`, the linear
//! `sequence` generator, and the `FibError` domain error.
//!
//! ### `math`
//! The 2x2 `BigUint` matrix type with multiplication and exponentiation by squaring, the
//! companion-matrix eigenvalues, and `golden_ratio_digits` for high-precision phi.
//!
//! ### `ratio`
//! The `ratios` projection turning a slice of Fibonacci values into consecutive quotients
//! with full double-precision relative accuracy at any magnitude.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_convergence::fibonacci::sequence;
//! use fibonacci_convergence::math::GOLDEN_RATIO;
//! use fibonacci_convergence::ratio::ratios;
//!
//! let fibs = sequence(40).unwrap();
//! let last_ratio = ratios(&fibs).last().unwrap();
//! assert!((last_ratio - GOLDEN_RATIO).abs() < 1e-12);
//! ```

pub mod fibonacci;
pub mod math;
pub mod ratio;
