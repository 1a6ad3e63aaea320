use std::{error::Error, fmt::Display};

use crate::{matrix::BandMatrix, vector::Vector};

/// Error returned by [solve].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Matrix and right-hand side dimensions differ.
    DimensionMismatch { matrix: usize, vector: usize },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::DimensionMismatch { matrix, vector } => write!(
                f,
                "Error in solver: matrix dimension {} does not match vector dimension {}",
                matrix, vector
            ),
        }
    }
}

impl Error for SolveError {}

/// Solves the linear system `A·x = b` for a tridiagonal `A`.
///
/// Gaussian elimination specialized to the band: each row is swept with only
/// the row above it, leaving an upper bidiagonal system that back-substitution
/// resolves from the last unknown to the first. `a` and `b` are cloned up
/// front and left untouched.
///
/// No pivoting is performed. A zero or near-zero pivot on the diagonal makes
/// the division produce an infinite or NaN entry in the result instead of an
/// error; the diagonally-dominant systems built by [crate::Spline::fit] never
/// hit this, but adversarial input can. Check the output with
/// [f64::is_finite] if the system is not known to be well conditioned.
///
/// # Errors
/// [SolveError::DimensionMismatch] when `a.dim() != b.dim()`; no partial
/// result is produced.
///
/// # Example
/// ```
/// use road_spline::{solve, BandMatrix, Vector};
///
/// let mut a = BandMatrix::new(2);
/// a.set(0, 0, 2.0);
/// a.set(1, 1, 4.0);
/// let mut b = Vector::new(2);
/// b.set(0, 6.0);
/// b.set(1, 8.0);
///
/// let x = solve(&a, &b).unwrap();
/// assert_eq!(3.0, x.get(0));
/// assert_eq!(2.0, x.get(1));
/// ```
pub fn solve(a: &BandMatrix, b: &Vector) -> Result<Vector, SolveError> {
    if a.dim() != b.dim() {
        return Err(SolveError::DimensionMismatch {
            matrix: a.dim(),
            vector: b.dim(),
        });
    }

    let n = a.dim();
    if n == 0 {
        return Ok(Vector::new(0));
    }

    let mut a2 = a.clone();
    let mut b2 = b.clone();

    // Forward elimination: combine row i with row i-1 so that the
    // sub-diagonal entry of row i vanishes. Column i+1 of the last row and
    // row i-1 fall outside the band; the sentinel zero reads make the same
    // combination correct there.
    for i in 1..n {
        let c1 = a2.get(i - 1, i - 1);
        let c2 = -a2.get(i, i - 1);

        for j in [i - 1, i, i + 1] {
            let swept = a2.get(i, j) * c1 + a2.get(i - 1, j) * c2;
            a2.set(i, j, swept);
        }

        let swept = b2.get(i) * c1 + b2.get(i - 1) * c2;
        b2.set(i, swept);
    }

    // Back-substitution over the upper bidiagonal system.
    let mut x = Vector::new(n);
    x.set(n - 1, b2.get(n - 1) / a2.get(n - 1, n - 1));

    for i in (0..n - 1).rev() {
        let value = (b2.get(i) - a2.get(i, i + 1) * x.get(i + 1)) / a2.get(i, i);
        x.set(i, value);
    }

    Ok(x)
}
