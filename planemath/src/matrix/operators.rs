// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use std::ops::{Index, IndexMut, Add, Mul};

use super::*;

impl<T> Index<[usize; 2]> for Matrix<T>
where T: Default + Clone + Copy + Debug,
{
    type Output = T;

    fn index(&self, indices: [usize; 2]) -> &Self::Output {
        let flat_index = self.flat_index(indices);
        &self.data[flat_index]
    }
}

impl<T> IndexMut<[usize; 2]> for Matrix<T>
where T: Default + Clone + Copy + Debug,
{
    fn index_mut(&mut self, indices: [usize; 2]) -> &mut Self::Output {
        let flat_index = self.flat_index(indices);

        &mut self.data[flat_index]
    }
}

impl<T> Matrix<T>
where T: Default + Clone + Copy + Debug +
    Mul<Output = T> +
    Add<Output = T>,
{
    pub fn vector_multiply(&self, vector: &[T]) -> Vec<T> {
        assert_eq!(self.shape[1], vector.len(), "Matrix and vector shapes do not match for multiplication");

        let mut result = vec![T::default(); self.shape[0]];

        for i in 0..self.shape[0] {
            let mut sum = T::default();
            for j in 0..self.shape[1] {
                sum = sum + self[[i, j]] * vector[j];
            }
            result[i] = sum;
        }

        result
    }
}
