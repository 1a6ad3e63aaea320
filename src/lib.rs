//! Natural cubic spline curves through ordered 2D control points,
//! parametrized uniformly over `t` in `[0, 1)`. Built for sketching smooth
//! paths (roads, routes) that a drawing or animation layer samples into a
//! polyline; the fitting runs on a banded tridiagonal matrix and a solver
//! specialized to that band.
//!
//! # Example
//! ```
//! use road_spline::Spline;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut road = Spline::new();
//! road.add_point(10.0, 10.0);
//! road.add_point(400.0, 50.0);
//! road.add_point(600.0, 150.0);
//! assert!(road.fit());
//!
//! let start = road.evaluate(0.0).unwrap();
//! assert_approx_eq!(10.0, start.x, 1e-10);
//! assert_approx_eq!(10.0, start.y, 1e-10);
//! ```

mod matrix;
mod point;
mod solver;
mod spline;
mod vector;

pub use matrix::BandMatrix;
pub use point::Point2d;
pub use solver::{solve, SolveError};
pub use spline::{Spline, SplineError};
pub use vector::{Vector, VectorComparison, DEFAULT_EPSILON};
