// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::type_aliases::Float;
use planemath::consts::PI;
use planemath::plane_vector::PlaneVector;

const TWO_PI_INVERSE: Float = 1.0 / (2.0 * PI);

/// Evaluates the definite integral
///
/// I = int_0^L (nu*s + mu) / (s^2 + b*s + c) ds
///
/// in closed form. With d = 4c - b^2 > 0 the result is
///
/// I = nu/2 * ln|(L^2 + bL + c)/c| + (2 mu - b nu)/sqrt(d) * (atan((2L + b)/sqrt(d)) - atan(b/sqrt(d))),
///
/// and the arctangent term vanishes when d <= 0, which happens when the field point lies on the
/// line carrying the panel.
///
/// `c` must be nonzero; c = 0 means the field point coincides with the panel's initial corner,
/// which callers avoid by evaluating at midpoints of other panels.
pub fn panel_integral(nu: Float, mu: Float, b: Float, c: Float, length: Float) -> Float {
    let d = 4.0 * c - b * b;

    let mut value = 0.5 * nu * ((length * length + b * length + c) / c).abs().ln();

    if d > 0.0 {
        let sqrt_d = d.sqrt();

        value += (2.0 * mu - b * nu) / sqrt_d
            * (((2.0 * length + b) / sqrt_d).atan() - (b / sqrt_d).atan());
    }

    value
}

/// The velocity induced at `field_point` by a straight panel carrying a constant source
/// strength per unit length.
///
/// The panel starts at `start`, has the unit tangent `tangent` and the given length.
pub fn source_panel_velocity(
    start: PlaneVector,
    tangent: PlaneVector,
    length: Float,
    strength: Float,
    field_point: PlaneVector,
) -> PlaneVector {
    let relative = field_point - start;

    let b = -2.0 * relative.dot(tangent);
    let c = relative.length_squared();

    let scale = strength * TWO_PI_INVERSE;

    PlaneVector::new(
        scale * panel_integral(-tangent.x(), relative.x(), b, c, length),
        scale * panel_integral(-tangent.y(), relative.y(), b, c, length),
    )
}

/// The velocity induced at `field_point` by a straight panel carrying a constant vortex
/// strength per unit length. Equals the source-panel velocity rotated 90 degrees
/// counterclockwise.
pub fn vortex_panel_velocity(
    start: PlaneVector,
    tangent: PlaneVector,
    length: Float,
    strength: Float,
    field_point: PlaneVector,
) -> PlaneVector {
    source_panel_velocity(start, tangent, length, strength, field_point).perpendicular()
}
