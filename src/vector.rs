/// Default tolerance used by [Vector::compare].
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Outcome of comparing two [Vector]s entry by entry.
///
/// Comparison is a two-step question: the vectors are *comparable* only when
/// their dimensions match, and only then does equality mean anything. Callers
/// must check comparability before trusting the equality answer, which is why
/// this is a three-way result rather than a plain `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorComparison {
    /// Dimensions differ; equality is undefined.
    Incomparable,
    /// Same dimension, every entry within the tolerance.
    Equal,
    /// Same dimension, at least one entry further apart than the tolerance.
    NotEqual,
}

impl VectorComparison {
    pub fn is_comparable(&self) -> bool {
        !matches!(self, VectorComparison::Incomparable)
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, VectorComparison::Equal)
    }
}

/// Vector of `n` real values, dimension fixed at construction.
///
/// Index access is bounds-checked with a permissive sentinel policy: reading
/// outside `[0, n)` yields `0.0` and writing outside is a no-op. The banded
/// matrix and the elimination in [crate::solver::solve] lean on this policy
/// to treat everything outside the band as implicit zeros.
///
/// # Example
/// ```
/// use road_spline::Vector;
///
/// let mut v = Vector::new(3);
/// v.set(1, 4.25);
///
/// assert_eq!(4.25, v.get(1));
/// assert_eq!(0.0, v.get(7));
/// ```
#[derive(Debug, Clone)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    /// Creates a zero-initialized vector of dimension `n`. `n = 0` is legal
    /// and produces an empty vector.
    pub fn new(n: usize) -> Self {
        Vector { values: vec![0.0; n] }
    }

    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// Returns the `i`-th value, or `0.0` when `i` is out of range.
    pub fn get(&self, i: usize) -> f64 {
        if i < self.values.len() {
            self.values[i]
        } else {
            0.0
        }
    }

    /// Sets the `i`-th value. Does nothing when `i` is out of range.
    pub fn set(&mut self, i: usize, value: f64) {
        if i < self.values.len() {
            self.values[i] = value;
        }
    }

    /// Compares with `other` using [DEFAULT_EPSILON].
    pub fn compare(&self, other: &Vector) -> VectorComparison {
        self.compare_with_epsilon(other, DEFAULT_EPSILON)
    }

    /// Compares with `other` entry by entry. Vectors of different dimensions
    /// are [VectorComparison::Incomparable]; otherwise they are equal when
    /// every pair of entries differs by at most `epsilon`.
    pub fn compare_with_epsilon(&self, other: &Vector, epsilon: f64) -> VectorComparison {
        if self.dim() != other.dim() {
            return VectorComparison::Incomparable;
        }

        for i in 0..self.dim() {
            if (self.values[i] - other.get(i)).abs() > epsilon {
                return VectorComparison::NotEqual;
            }
        }
        VectorComparison::Equal
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_initialized() {
        let v = Vector::new(4);

        assert_eq!(4, v.dim());
        for i in 0..4 {
            assert_eq!(0.0, v.get(i));
        }
    }

    #[test]
    fn test_empty_vector() {
        let mut v = Vector::new(0);

        assert_eq!(0, v.dim());
        assert_eq!(0.0, v.get(0));
        v.set(0, 1.0);
        assert_eq!(0, v.dim());
    }

    #[test]
    fn test_get_set() {
        let mut v = Vector::new(3);
        v.set(0, 0.1);
        v.set(1, 12.345);
        v.set(2, -9.87);

        assert_eq!(0.1, v.get(0));
        assert_eq!(12.345, v.get(1));
        assert_eq!(-9.87, v.get(2));
    }

    #[test]
    fn test_out_of_range_read_returns_zero() {
        let mut v = Vector::new(2);
        v.set(0, 5.0);
        v.set(1, 6.0);

        assert_eq!(0.0, v.get(2));
        assert_eq!(0.0, v.get(100));
    }

    #[test]
    fn test_out_of_range_write_is_noop() {
        let mut v = Vector::new(2);
        v.set(5, 3.0);

        assert_eq!(2, v.dim());
        assert_eq!(0.0, v.get(0));
        assert_eq!(0.0, v.get(1));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut v1 = Vector::new(3);
        v1.set(1, 7.0);

        let mut v2 = v1.clone();
        v2.set(1, -7.0);

        assert_eq!(7.0, v1.get(1));
        assert_eq!(-7.0, v2.get(1));
    }

    #[test]
    fn test_compare_reflexive() {
        let mut v = Vector::new(3);
        v.set(0, 1.0);
        v.set(1, 2.0);
        v.set(2, 3.0);

        let result = v.compare(&v.clone());
        assert!(result.is_comparable());
        assert!(result.is_equal());
    }

    #[test]
    fn test_compare_different_dimensions() {
        let v1 = Vector::new(3);
        let v2 = Vector::new(4);

        let result = v1.compare(&v2);
        assert_eq!(VectorComparison::Incomparable, result);
        assert!(!result.is_comparable());
        assert!(!result.is_equal());
    }

    #[test]
    fn test_compare_differing_entry() {
        let mut v1 = Vector::new(3);
        v1.set(1, 12.345);
        let mut v2 = v1.clone();
        v2.set(1, -12.345);

        let result = v1.compare(&v2);
        assert!(result.is_comparable());
        assert!(!result.is_equal());
    }

    #[test]
    fn test_compare_respects_epsilon() {
        let mut v1 = Vector::new(2);
        v1.set(0, 1.0);
        let mut v2 = v1.clone();
        v2.set(0, 1.0 + 1e-12);

        assert!(v1.compare(&v2).is_equal());
        assert!(!v1.compare_with_epsilon(&v2, 1e-13).is_equal());
    }

    #[test]
    fn test_display() {
        let mut v = Vector::new(3);
        v.set(0, 1.0);
        v.set(2, -2.5);

        assert_eq!("1, 0, -2.5", format!("{}", v));
    }
}
