use crate::vector::Vector;

/// Square tridiagonal matrix of dimension `n` that stores only the band.
///
/// Row `i` physically holds three slots for columns `i-1`, `i` and `i+1`
/// (sub, main and super diagonal); every other entry is implicitly zero.
/// Reads outside the band or outside `[0, n)` return `0.0` and writes there
/// are ignored, mirroring the [Vector] sentinel policy. The spline-fitting
/// system is tridiagonal by construction, so nothing outside the band is
/// ever meaningful and the elimination in [crate::solver::solve] relies on
/// those implicit zeros.
///
/// # Example
/// ```
/// use road_spline::BandMatrix;
///
/// let mut a = BandMatrix::new(3);
/// a.set(1, 0, 2.0);
/// a.set(1, 2, 5.0);
/// a.set(0, 2, 9.0); // outside the band, ignored
///
/// assert_eq!(2.0, a.get(1, 0));
/// assert_eq!(0.0, a.get(0, 2));
/// ```
#[derive(Debug, Clone)]
pub struct BandMatrix {
    rows: Vec<[f64; 3]>,
}

impl BandMatrix {
    /// Creates an `n` by `n` matrix with all three diagonals zeroed.
    pub fn new(n: usize) -> Self {
        BandMatrix { rows: vec![[0.0; 3]; n] }
    }

    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    // Maps column `j` of row `i` onto the stored slot 0..=2, or None when
    // the coordinates fall outside the matrix or outside the band.
    fn band_offset(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.rows.len() || j >= self.rows.len() {
            return None;
        }

        let offset = j as isize - (i as isize - 1);
        if (0..=2).contains(&offset) {
            Some(offset as usize)
        } else {
            None
        }
    }

    /// Returns the entry at row `i`, column `j`; `0.0` outside the band or
    /// outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        match self.band_offset(i, j) {
            Some(offset) => self.rows[i][offset],
            None => 0.0,
        }
    }

    /// Sets the entry at row `i`, column `j`. Does nothing outside the band
    /// or outside the matrix, so the band invariant holds after every call.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        if let Some(offset) = self.band_offset(i, j) {
            self.rows[i][offset] = value;
        }
    }

    /// Computes the matrix-vector product `A·v` touching only the stored
    /// diagonals, in O(n).
    pub fn multiply(&self, v: &Vector) -> Vector {
        let n = self.rows.len();
        let mut result = Vector::new(n);

        for i in 0..n {
            let mut y = self.rows[i][1] * v.get(i);
            if i > 0 {
                y += self.rows[i][0] * v.get(i - 1);
            }
            y += self.rows[i][2] * v.get(i + 1); // v.get(n) is 0 on the last row
            result.set(i, y);
        }
        result
    }

    /// Renders only the stored band, three values per row.
    pub fn band_to_string(&self) -> String {
        let mut s = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                s.push('\n');
            }
            s.push_str(&format!("{}, {}, {}", row[0], row[1], row[2]));
        }
        s
    }
}

/// Renders the matrix as a full square, implicit zeros included.
impl std::fmt::Display for BandMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.rows.len();
        for i in 0..n {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..n {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.get(i, j))?;
            }
        }
        Ok(())
    }
}
