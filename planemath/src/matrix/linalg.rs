// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use super::*;

const SINGULARITY_TOLERANCE: Float = 1e-12;

impl Matrix<Float> {
    /// Solves the equation system Ax = b using Gaussian elimination with partial pivoting.
    ///
    /// Source: <https://en.wikipedia.org/wiki/Gaussian_elimination>
    pub fn solve_gaussian_elimination(&self, rhs: &[Float]) -> Result<Vec<Float>, String> {
        let n = self.nr_rows();

        assert_eq!(n, self.nr_cols(), "Matrix must be square for Gaussian elimination");
        assert_eq!(rhs.len(), n, "Right-hand side vector length must match matrix size");

        // Augmented matrix [A|b]
        let mut aug = Matrix::new_default([n, n + 1]);

        for i in 0..n {
            for j in 0..n {
                aug[[i, j]] = self[[i, j]];
            }
            aug[[i, n]] = rhs[i];
        }

        // Forward elimination
        for k in 0..n {
            let mut max_row = k;
            for i in (k + 1)..n {
                if aug[[i, k]].abs() > aug[[max_row, k]].abs() {
                    max_row = i;
                }
            }

            if max_row != k {
                for j in 0..=n {
                    let temp = aug[[k, j]];
                    aug[[k, j]] = aug[[max_row, j]];
                    aug[[max_row, j]] = temp;
                }
            }

            if aug[[k, k]].abs() < SINGULARITY_TOLERANCE {
                return Err(format!(
                    "Matrix is singular or nearly singular (pivot {} at row {})", aug[[k, k]], k
                ));
            }

            for i in (k + 1)..n {
                let factor = aug[[i, k]] / aug[[k, k]];
                for j in k..=n {
                    aug[[i, j]] -= factor * aug[[k, j]];
                }
            }
        }

        // Back substitution
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut sum = 0.0;
            for j in (i + 1)..n {
                sum += aug[[i, j]] * x[j];
            }

            x[i] = (aug[[i, n]] - sum) / aug[[i, i]];
        }

        Ok(x)
    }

    /// Computes an LU factorization of the matrix with partial pivoting.
    ///
    /// The factorization is intended for systems that are solved repeatedly with different
    /// right-hand sides: the elimination work is done once, and each subsequent solve is two
    /// triangular back-substitutions.
    pub fn lu_factor(&self) -> Result<LuDecomposition, String> {
        let n = self.nr_rows();

        assert_eq!(n, self.nr_cols(), "Matrix must be square for LU factorization");

        let mut lu = self.clone();
        let mut pivots: Vec<usize> = (0..n).collect();

        for k in 0..n {
            let mut max_row = k;
            for i in (k + 1)..n {
                if lu[[i, k]].abs() > lu[[max_row, k]].abs() {
                    max_row = i;
                }
            }

            if max_row != k {
                for j in 0..n {
                    let temp = lu[[k, j]];
                    lu[[k, j]] = lu[[max_row, j]];
                    lu[[max_row, j]] = temp;
                }
                pivots.swap(k, max_row);
            }

            if lu[[k, k]].abs() < SINGULARITY_TOLERANCE {
                return Err(format!(
                    "Matrix is singular or nearly singular (pivot {} at row {})", lu[[k, k]], k
                ));
            }

            for i in (k + 1)..n {
                let factor = lu[[i, k]] / lu[[k, k]];
                lu[[i, k]] = factor;

                for j in (k + 1)..n {
                    lu[[i, j]] -= factor * lu[[k, j]];
                }
            }
        }

        Ok(LuDecomposition { lu, pivots })
    }
}

#[derive(Debug, Clone)]
/// An LU factorization with row pivoting, storing the combined L and U factors in a single
/// matrix with the implicit unit diagonal of L.
pub struct LuDecomposition {
    lu: Matrix<Float>,
    pivots: Vec<usize>,
}

impl LuDecomposition {
    pub fn size(&self) -> usize {
        self.lu.nr_rows()
    }

    /// Solves Ax = b using the stored factorization.
    pub fn solve(&self, rhs: &[Float]) -> Vec<Float> {
        let n = self.size();

        assert_eq!(rhs.len(), n, "Right-hand side vector length must match matrix size");

        // Forward substitution on the permuted right-hand side
        let mut x = vec![0.0; n];
        for i in 0..n {
            let mut sum = rhs[self.pivots[i]];
            for j in 0..i {
                sum -= self.lu[[i, j]] * x[j];
            }
            x[i] = sum;
        }

        // Back substitution
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let value = self.lu[[i, j]] * x[j];
                x[i] -= value;
            }
            x[i] /= self.lu[[i, i]];
        }

        x
    }
}
