use std::{error::Error, fmt::Display};

use crate::{matrix::BandMatrix, point::Point2d, solver::solve, vector::Vector};

// Per-segment cubic coefficients, one Vector of dimension N per power and
// coordinate. Segment i uses index i of each vector; only indices 0..N-2
// carry meaningful b and d values, index N-1 stays at its initial zero so
// that evaluation at t = 1 lands exactly on the last control point.
struct Coefficients {
    ax: Vector,
    bx: Vector,
    cx: Vector,
    dx: Vector,
    ay: Vector,
    by: Vector,
    cy: Vector,
    dy: Vector,
}

/// Error returned by [Spline::evaluate].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineError {
    /// The curve has no valid fit for its current point set.
    NotFitted,
    /// Internal segment lookup went past the coefficient vectors.
    SegmentOutOfRange { index: usize, points: usize },
}

impl Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplineError::NotFitted => {
                write!(f, "Error in Spline: curve is not fitted")
            }
            SplineError::SegmentOutOfRange { index, points } => write!(
                f,
                "Error in Spline: segment index {} out of range for {} points",
                index, points
            ),
        }
    }
}

impl Error for SplineError {}

/// Smooth curve through an ordered set of 2D control points.
///
/// The curve is a natural cubic spline: x and y are interpolated
/// independently as piecewise cubic polynomials of a parameter `t` running
/// uniformly over `[0, 1)` across the `N - 1` segments between consecutive
/// points, with zero curvature at both ends.
///
/// Points are appended one at a time in the order the curve should pass
/// through them. [Spline::fit] computes the coefficients for the current
/// point set; appending a point or clearing the curve discards any previous
/// fit, so [Spline::evaluate] only ever samples coefficients that match the
/// points it was fitted on.
///
/// # Example
/// ```
/// use road_spline::Spline;
/// use assert_approx_eq::assert_approx_eq;
///
/// let mut spline = Spline::new();
/// spline.add_point(0.0, 0.0);
/// spline.add_point(5.0, 8.0);
/// spline.add_point(10.0, 0.0);
/// assert!(spline.fit());
///
/// let midpoint = spline.evaluate(0.5).unwrap();
/// assert_approx_eq!(5.0, midpoint.x, 1e-10);
/// assert_approx_eq!(8.0, midpoint.y, 1e-10);
/// ```
#[derive(Default)]
pub struct Spline {
    points: Vec<Point2d>,
    coefficients: Option<Coefficients>,
}

impl Spline {
    /// Creates an empty curve.
    pub fn new() -> Self {
        Spline {
            points: Vec::new(),
            coefficients: None,
        }
    }

    /// Appends a control point. Always succeeds. Any previous fit is
    /// discarded; call [Spline::fit] again before evaluating.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push(Point2d::new(x, y));
        self.coefficients = None;
    }

    /// Removes all control points and any fit.
    pub fn clear(&mut self) {
        self.points.clear();
        self.coefficients = None;
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Returns the `i`-th control point, or `None` when `i` is out of range.
    pub fn point(&self, i: usize) -> Option<Point2d> {
        self.points.get(i).copied()
    }

    /// True when the coefficients are valid for the current point set.
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Computes the spline coefficients for the current point set.
    ///
    /// Splits `[0, 1]` into `N - 1` uniform segments of width
    /// `h = 1 / (N - 1)` and, per coordinate, solves the tridiagonal system
    /// of the natural boundary condition for the curvature coefficients,
    /// then derives the remaining polynomial coefficients algebraically.
    ///
    /// Returns `false` and changes nothing when fewer than 2 points are
    /// present. Refitting an unchanged point set recomputes the same
    /// coefficients.
    pub fn fit(&mut self) -> bool {
        let n = self.points.len();
        if n < 2 {
            return false;
        }

        let h = 1.0 / (n - 1) as f64;

        // a is just the point coordinates
        let mut ax = Vector::new(n);
        let mut ay = Vector::new(n);
        for (i, pt) in self.points.iter().enumerate() {
            ax.set(i, pt.x);
            ay.set(i, pt.y);
        }

        // first and last rows encode the natural boundary, curvature 0
        let mut a = BandMatrix::new(n);
        a.set(0, 0, 1.0);
        a.set(n - 1, n - 1, 1.0);
        for i in 1..n - 1 {
            a.set(i, i - 1, h);
            a.set(i, i, 4.0 * h);
            a.set(i, i + 1, h);
        }

        let mut b0 = Vector::new(n);
        let mut b1 = Vector::new(n);
        for i in 1..n - 1 {
            let prev = self.points[i - 1];
            let curr = self.points[i];
            let next = self.points[i + 1];
            b0.set(i, 3.0 / h * (next.x - curr.x) - 3.0 / h * (curr.x - prev.x));
            b1.set(i, 3.0 / h * (next.y - curr.y) - 3.0 / h * (curr.y - prev.y));
        }

        // curvature coefficients; dimensions match by construction
        let cx = match solve(&a, &b0) {
            Ok(solution) => solution,
            Err(_) => return false,
        };
        let cy = match solve(&a, &b1) {
            Ok(solution) => solution,
            Err(_) => return false,
        };

        let mut dx = Vector::new(n);
        let mut dy = Vector::new(n);
        for i in 0..n - 1 {
            dx.set(i, (cx.get(i + 1) - cx.get(i)) / (3.0 * h));
            dy.set(i, (cy.get(i + 1) - cy.get(i)) / (3.0 * h));
        }

        let mut bx = Vector::new(n);
        let mut by = Vector::new(n);
        for i in 0..n - 1 {
            bx.set(
                i,
                (ax.get(i + 1) - ax.get(i)) / h - h * (cx.get(i + 1) + 2.0 * cx.get(i)) / 3.0,
            );
            by.set(
                i,
                (ay.get(i + 1) - ay.get(i)) / h - h * (cy.get(i + 1) + 2.0 * cy.get(i)) / 3.0,
            );
        }

        self.coefficients = Some(Coefficients {
            ax,
            bx,
            cx,
            dx,
            ay,
            by,
            cy,
            dy,
        });
        true
    }

    /// Samples the curve at parameter `t`.
    ///
    /// `t` is clamped into `[0, 1]`: negative values evaluate to the first
    /// control point, values of 1 and above to the last. In between, the
    /// segment index is `floor(t·(N-1))` and the segment's cubic is
    /// evaluated at the offset from the segment start.
    ///
    /// # Errors
    /// [SplineError::NotFitted] when [Spline::fit] has not succeeded for the
    /// current point set.
    pub fn evaluate(&self, t: f64) -> Result<Point2d, SplineError> {
        let coeff = self.coefficients.as_ref().ok_or(SplineError::NotFitted)?;
        let n = self.points.len();

        let t = t.clamp(0.0, 1.0);

        let index = (t * (n - 1) as f64).floor() as usize;
        if index >= n {
            return Err(SplineError::SegmentOutOfRange { index, points: n });
        }

        let h = 1.0 / (n - 1) as f64;
        let dt = t - h * index as f64;

        let px = coeff.ax.get(index)
            + coeff.bx.get(index) * dt
            + coeff.cx.get(index) * dt * dt
            + coeff.dx.get(index) * dt * dt * dt;
        let py = coeff.ay.get(index)
            + coeff.by.get(index) * dt
            + coeff.cy.get(index) * dt * dt
            + coeff.dy.get(index) * dt * dt * dt;

        Ok(Point2d::new(px, py))
    }
}
