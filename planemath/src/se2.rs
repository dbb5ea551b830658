// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! An implementation of the Euclidean Lie group SE(2) of orientation-preserving isometries of
//! the plane.
//!
//! Every such isometry is a rotation about the origin followed by a translation, so local
//! coordinates for the group are the rotation angle theta together with the horizontal and
//! vertical translations x and y.

use std::ops::Mul;

use crate::type_aliases::Float;
use crate::plane_vector::PlaneVector;

#[derive(Debug, Clone, Copy, PartialEq)]
/// An element of SE(2), stored as the rotation angle and the translation, with the cosine and
/// sine of the angle cached for repeated use.
pub struct SE2 {
    theta: Float,
    x: Float,
    y: Float,
    cos_theta: Float,
    sin_theta: Float,
}

impl SE2 {
    pub fn new(theta: Float, x: Float, y: Float) -> Self {
        Self {
            theta,
            x,
            y,
            cos_theta: theta.cos(),
            sin_theta: theta.sin(),
        }
    }

    /// The identity element of the group.
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// A pure rotation about the origin.
    pub fn rotation(theta: Float) -> Self {
        Self::new(theta, 0.0, 0.0)
    }

    /// A pure translation.
    pub fn translation(x: Float, y: Float) -> Self {
        Self::new(0.0, x, y)
    }

    pub fn theta(&self) -> Float {
        self.theta
    }

    pub fn x(&self) -> Float {
        self.x
    }

    pub fn y(&self) -> Float {
        self.y
    }

    pub fn cos_theta(&self) -> Float {
        self.cos_theta
    }

    pub fn sin_theta(&self) -> Float {
        self.sin_theta
    }

    /// Returns the inverse of this element of SE(2).
    pub fn inverse(&self) -> Self {
        Self::new(
            -self.theta,
            -self.x * self.cos_theta - self.y * self.sin_theta,
            self.x * self.sin_theta - self.y * self.cos_theta,
        )
    }

    /// Applies the rotation part of the transformation to a vector. Vectors are unaffected by
    /// translations.
    pub fn map_vector(&self, vector: PlaneVector) -> PlaneVector {
        PlaneVector::new(
            self.cos_theta * vector.x() - self.sin_theta * vector.y(),
            self.sin_theta * vector.x() + self.cos_theta * vector.y(),
        )
    }

    /// Applies the transformation to a point, with the rotation taken about an arbitrary axis.
    ///
    /// The point is first expressed relative to the axis, then rotated and translated, and
    /// finally the axis is added back. With the axis at the origin this reduces to
    /// [`map_vector`](Self::map_vector) followed by the translation.
    pub fn map_point(&self, point: PlaneVector, axis: PlaneVector) -> PlaneVector {
        let relative = point - axis;

        PlaneVector::new(
            self.cos_theta * relative.x() - self.sin_theta * relative.y() + self.x + axis.x(),
            self.sin_theta * relative.x() + self.cos_theta * relative.y() + self.y + axis.y(),
        )
    }
}

/// Multiplication of two elements of SE(2) corresponds to composition of two successive rigid
/// motions: the product g * h represents the motion h followed by g.
///
/// Translations commute with translations and rotations commute with rotations, but
/// translations and rotations do not commute with one another. For instance, with
/// rot = SE2::rotation(pi/4) and tr = SE2::translation(1, 0):
///
/// rot * tr == SE2::new(pi/4, sqrt(2)/2, sqrt(2)/2),
/// tr * rot == SE2::new(pi/4, 1, 0)
impl Mul for SE2 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(
            self.theta + other.theta,
            other.x * self.cos_theta - other.y * self.sin_theta + self.x,
            other.x * self.sin_theta + other.y * self.cos_theta + self.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;

    use crate::consts::PI;

    fn random_element(rng: &mut impl Rng) -> SE2 {
        SE2::new(rng.random::<Float>(), rng.random::<Float>(), rng.random::<Float>())
    }

    fn assert_close(g: SE2, h: SE2) {
        assert!((g.theta() - h.theta()).abs() < 1e-12, "theta: {} != {}", g.theta(), h.theta());
        assert!((g.x() - h.x()).abs() < 1e-12, "x: {} != {}", g.x(), h.x());
        assert!((g.y() - h.y()).abs() < 1e-12, "y: {} != {}", g.y(), h.y());
    }

    #[test]
    fn identity_element() {
        let g = SE2::identity();

        assert_eq!(g.theta(), 0.0);
        assert_eq!(g.x(), 0.0);
        assert_eq!(g.y(), 0.0);
    }

    #[test]
    fn composition_examples() {
        assert_close(SE2::rotation(PI / 4.0) * SE2::rotation(-PI / 4.0), SE2::identity());
        assert_close(SE2::translation(1.0, -2.0) * SE2::translation(-1.0, 2.0), SE2::identity());

        let translation = SE2::translation(1.0, 0.0);
        let rotation = SE2::rotation(PI / 4.0);

        assert_close(translation * rotation, SE2::new(PI / 4.0, 1.0, 0.0));

        let g = rotation * translation;

        assert_close(g, SE2::new(PI / 4.0, 0.5 * 2.0_f64.sqrt(), 0.5 * 2.0_f64.sqrt()));
    }

    #[test]
    fn inverse_from_both_sides() {
        let mut rng = rand::rng();

        for _ in 0..10 {
            let g = random_element(&mut rng);

            assert_close(g.inverse() * g, SE2::identity());
            assert_close(g * g.inverse(), SE2::identity());
        }
    }

    #[test]
    fn composition_is_associative() {
        let mut rng = rand::rng();

        for _ in 0..10 {
            let g1 = random_element(&mut rng);
            let g2 = random_element(&mut rng);
            let g3 = random_element(&mut rng);

            assert_close(g1 * (g2 * g3), (g1 * g2) * g3);
        }
    }

    #[test]
    fn translations_commute() {
        let mut rng = rand::rng();

        for _ in 0..10 {
            let g1 = SE2::translation(rng.random::<Float>(), rng.random::<Float>());
            let g2 = SE2::translation(rng.random::<Float>(), rng.random::<Float>());

            assert_close(g1 * g2, g2 * g1);
        }
    }

    #[test]
    fn rotations_commute() {
        let mut rng = rand::rng();

        for _ in 0..10 {
            let g1 = SE2::rotation(rng.random::<Float>());
            let g2 = SE2::rotation(rng.random::<Float>());

            assert_close(g1 * g2, g2 * g1);
        }
    }

    #[test]
    fn map_point_reduces_to_map_vector_at_origin() {
        let mut rng = rand::rng();

        for _ in 0..10 {
            let g = random_element(&mut rng);
            let point = PlaneVector::new(rng.random::<Float>(), rng.random::<Float>());

            let mapped_point = g.map_point(point, PlaneVector::default());
            let mapped_vector = g.map_vector(point) + PlaneVector::new(g.x(), g.y());

            assert!((mapped_point - mapped_vector).length() < 1e-14);
        }
    }

    #[test]
    fn map_point_about_own_axis() {
        let g = SE2::rotation(PI / 2.0);
        let point = PlaneVector::new(1.0, 0.0);

        let mapped = g.map_point(point, PlaneVector::default());

        assert!((mapped.x() - 0.0).abs() < 1e-15);
        assert!((mapped.y() - 1.0).abs() < 1e-15);

        // Rotating a point about itself leaves it in place
        let fixed = g.map_point(point, point);

        assert!((fixed - point).length() < 1e-15);
    }
}
