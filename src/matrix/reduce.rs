use crate::matrix::element::{Element, Tolerance};
use crate::matrix::matrix::Matrix;
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Row reduction found no usable pivot for some column: the matrix has no
/// inverse, or is numerically indistinguishable from one that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateMatrix;

impl Display for DegenerateMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot invert a degenerate matrix")
    }
}

impl Error for DegenerateMatrix {}

impl<T: Element> Matrix<T> {
    /// Transform to reduced row-echelon form in place, by the Gauss--Jordan
    /// method. The matrix must be at least as wide as it is tall.
    ///
    /// Pivot candidates are accepted in row order, not by magnitude; each
    /// candidate row is judged by its entry in the column being eliminated.
    pub fn row_reduce(&mut self) -> Result<(), DegenerateMatrix> {
        assert!(self.width() >= self.height(), "matrix is taller than wide");

        for r in 0..self.height() {
            // A usable pivot at [r][r]: swap one up from below if needed.
            if self.at(r, r).almost_zero() {
                let pivot = (r + 1..self.height())
                    .find(|&s| !self.at(s, r).almost_zero())
                    .ok_or(DegenerateMatrix)?;
                self.swap_rows(r, pivot);
            }

            // Scale the pivot row so the pivot becomes exactly 1.
            let diagonal = self.at(r, r);
            if diagonal != T::one() {
                self.row_mut(r).scale(T::one() / diagonal);
            }

            // Zero column r in every other row.
            for s in 0..self.height() {
                if s == r {
                    continue;
                }
                let factor = self.at(s, r);
                if factor.almost_zero() {
                    continue;
                }
                let eliminator = self.row(r).scaled(-factor);
                self.row_mut(s).add_in_place(&eliminator);
            }
        }
        Ok(())
    }

    /// Replace this square matrix with its inverse, via row reduction of the
    /// augmented `[M | I]` matrix. On failure the matrix is left untouched.
    pub fn invert(&mut self) -> Result<(), DegenerateMatrix> {
        assert!(self.is_square(), "matrix is not square");

        let mut augmented = self.horizontal_concat(&Matrix::identity(self.height()));
        augmented.row_reduce()?;
        *self = augmented.right_half();
        Ok(())
    }

    /// The inverse as a new matrix, this one untouched.
    pub fn inverse(&self) -> Result<Matrix<T>, DegenerateMatrix> {
        let mut copy = self.clone();
        copy.invert()?;
        Ok(copy)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
