// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Elementary singular solutions to Laplace's equation for potential flow: point sources,
//! point vortices and doublets, together with the uniform onset flow.
//!
//! The velocity functions drive the linear systems of the panel solvers and must be exact. The
//! stream functions are only needed for visualization-grade contour data.

use planemath::type_aliases::Float;
use planemath::consts::PI;
use planemath::plane_vector::PlaneVector;

const TWO_PI_INVERSE: Float = 1.0 / (2.0 * PI);
const FOUR_PI_INVERSE: Float = 1.0 / (4.0 * PI);

/// The velocity induced at `field_point` by a point source of the given strength.
#[inline(always)]
pub fn source_velocity(
    strength: Float,
    position: PlaneVector,
    field_point: PlaneVector,
) -> PlaneVector {
    let relative = field_point - position;
    let distance_squared = relative.length_squared();

    relative * (strength * TWO_PI_INVERSE / distance_squared)
}

/// The velocity induced at `field_point` by a point vortex of the given circulation. Equals the
/// source velocity rotated 90 degrees counterclockwise.
#[inline(always)]
pub fn vortex_velocity(
    circulation: Float,
    position: PlaneVector,
    field_point: PlaneVector,
) -> PlaneVector {
    source_velocity(circulation, position, field_point).perpendicular()
}

/// The velocity induced at `field_point` by a doublet of the given strength, whose axis makes
/// the angle `axis_angle` with the positive x-axis.
pub fn doublet_velocity(
    strength: Float,
    position: PlaneVector,
    axis_angle: Float,
    field_point: PlaneVector,
) -> PlaneVector {
    let relative = field_point - position;

    let cos_axis = axis_angle.cos();
    let sin_axis = axis_angle.sin();

    let difference_term = relative.x() * relative.x() - relative.y() * relative.y();
    let product_term = 2.0 * relative.x() * relative.y();

    let distance_squared = relative.length_squared();
    let scale = strength * TWO_PI_INVERSE / (distance_squared * distance_squared);

    PlaneVector::new(
        scale * (difference_term * cos_axis + product_term * sin_axis),
        scale * (product_term * cos_axis - difference_term * sin_axis),
    )
}

/// The stream function of the uniform onset flow.
pub fn uniform_stream_function(freestream: PlaneVector, field_point: PlaneVector) -> Float {
    freestream.x() * field_point.y() - freestream.y() * field_point.x()
}

/// The stream function at `field_point` due to a point source.
pub fn source_stream_function(
    strength: Float,
    position: PlaneVector,
    field_point: PlaneVector,
) -> Float {
    let relative = field_point - position;

    strength * TWO_PI_INVERSE * relative.y().atan2(relative.x())
}

/// The stream function at `field_point` due to a point vortex.
pub fn vortex_stream_function(
    circulation: Float,
    position: PlaneVector,
    field_point: PlaneVector,
) -> Float {
    let relative = field_point - position;

    -circulation * FOUR_PI_INVERSE * relative.length_squared().ln()
}

/// The stream function at `field_point` due to a doublet with the given axis angle.
pub fn doublet_stream_function(
    strength: Float,
    position: PlaneVector,
    axis_angle: Float,
    field_point: PlaneVector,
) -> Float {
    let relative = field_point - position;

    let numerator = axis_angle.cos() * relative.y() - axis_angle.sin() * relative.x();

    strength * TWO_PI_INVERSE * numerator / relative.length_squared()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_velocity_is_radial() {
        let position = PlaneVector::new(0.3, -0.1);
        let field_point = PlaneVector::new(1.3, 0.9);

        let velocity = source_velocity(2.0, position, field_point);

        let radial = (field_point - position).normalized();

        // Velocity is parallel to the radial direction and decays as 1/r
        assert!(velocity.normalized().dot(radial) > 1.0 - 1e-14);

        let distance = (field_point - position).length();
        let expected_speed = 2.0 * TWO_PI_INVERSE / distance;

        assert!((velocity.length() - expected_speed).abs() < 1e-14);
    }

    #[test]
    fn vortex_velocity_is_tangential() {
        let position = PlaneVector::default();
        let field_point = PlaneVector::new(2.0, 0.0);

        let velocity = vortex_velocity(1.0, position, field_point);

        assert!(velocity.x().abs() < 1e-15);
        assert!((velocity.y() - TWO_PI_INVERSE / 2.0).abs() < 1e-15);
    }

    #[test]
    fn doublet_far_field_decay() {
        let position = PlaneVector::default();

        let near = doublet_velocity(1.0, position, 0.0, PlaneVector::new(1.0, 0.0)).length();
        let far = doublet_velocity(1.0, position, 0.0, PlaneVector::new(2.0, 0.0)).length();

        // Doublet velocity decays as 1/r^2
        assert!((near / far - 4.0).abs() < 1e-12);
    }

    #[test]
    fn uniform_stream_function_is_constant_along_streamlines() {
        let freestream = PlaneVector::new(2.0, 1.0);

        let point = PlaneVector::new(0.3, -0.4);
        let downstream = point + freestream * 3.7;

        let value_1 = uniform_stream_function(freestream, point);
        let value_2 = uniform_stream_function(freestream, downstream);

        assert!((value_1 - value_2).abs() < 1e-12);
    }

    #[test]
    fn doublet_stream_function_on_axis_normal() {
        // For a doublet with axis along +x, the stream function at (0, r) is s / (2 pi r)
        let value = doublet_stream_function(2.0 * PI, PlaneVector::default(), 0.0,
            PlaneVector::new(0.0, 1.0));

        assert!((value - 1.0).abs() < 1e-14);
    }

    #[test]
    fn stream_function_constant_on_vortex_circles() {
        let position = PlaneVector::new(0.1, 0.2);

        let value_1 = vortex_stream_function(1.3, position, position + PlaneVector::new(0.5, 0.0));
        let value_2 = vortex_stream_function(1.3, position, position + PlaneVector::new(0.0, 0.5));

        assert!((value_1 - value_2).abs() < 1e-14);
    }
}
