// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use super::PlaneVector;
use crate::type_aliases::Float;

impl PlaneVector {
    #[inline(always)]
    pub fn dot(&self, other: Self) -> Float {
        self.0[0] * other.0[0] + self.0[1] * other.0[1]
    }

    #[inline(always)]
    pub fn length_squared(&self) -> Float {
        self.dot(*self)
    }

    #[inline(always)]
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }

    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Returns the vector rotated 90 degrees counterclockwise.
    #[inline(always)]
    pub fn perpendicular(&self) -> Self {
        Self([-self.0[1], self.0[0]])
    }

    /// Returns the vector rotated by the given angle, in radians, counterclockwise.
    pub fn rotated(&self, angle: Float) -> Self {
        let cos_angle = angle.cos();
        let sin_angle = angle.sin();

        Self([
            cos_angle * self.0[0] - sin_angle * self.0[1],
            sin_angle * self.0[0] + cos_angle * self.0[1],
        ])
    }

    /// The angle of the vector relative to the positive x-axis, in the range (-pi, pi]
    pub fn angle(&self) -> Float {
        self.0[1].atan2(self.0[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PI;

    #[test]
    fn perpendicular_is_ccw_rotation() {
        let vector = PlaneVector::new(1.3, -0.4);

        let rotated = vector.rotated(0.5 * PI);
        let perpendicular = vector.perpendicular();

        assert!((rotated.x() - perpendicular.x()).abs() < 1e-14);
        assert!((rotated.y() - perpendicular.y()).abs() < 1e-14);
        assert!(vector.dot(perpendicular).abs() < 1e-14);
    }

    #[test]
    fn length_and_normalization() {
        let vector = PlaneVector::new(3.0, 4.0);

        assert_eq!(vector.length(), 5.0);
        assert!((vector.normalized().length() - 1.0).abs() < 1e-15);
    }
}
