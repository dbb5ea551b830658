// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::plane_vector::PlaneVector;

use crate::singularities::{source_velocity, vortex_velocity};
use crate::panels::integrals::{source_panel_velocity, vortex_panel_velocity};

#[test]
fn far_field_approaches_point_source() {
    // Seen from far away, a panel of length L and unit strength acts as a point source of
    // total strength L located at the panel midpoint.
    let start = PlaneVector::new(-0.05, 0.0);
    let tangent = PlaneVector::unit_x();
    let length = 0.1;
    let midpoint = start + tangent * (0.5 * length);

    let field_point = PlaneVector::new(3.0, -4.0);

    let panel = source_panel_velocity(start, tangent, length, 1.0, field_point);
    let point = source_velocity(length, midpoint, field_point);

    assert!((panel - point).length() / point.length() < 1e-3,
        "panel: {}, point: {}", panel, point);
}

#[test]
fn far_field_approaches_point_vortex() {
    let start = PlaneVector::new(-0.05, 0.0);
    let tangent = PlaneVector::unit_x();
    let length = 0.1;
    let midpoint = start + tangent * (0.5 * length);

    let field_point = PlaneVector::new(-2.0, 5.0);

    let panel = vortex_panel_velocity(start, tangent, length, 1.0, field_point);
    let point = vortex_velocity(length, midpoint, field_point);

    assert!((panel - point).length() / point.length() < 1e-3);
}

#[test]
fn velocity_above_own_midpoint_is_symmetric() {
    // Directly above the midpoint of a horizontal source panel the tangential velocity
    // cancels by symmetry.
    let start = PlaneVector::new(-0.5, 0.0);
    let tangent = PlaneVector::unit_x();
    let length = 1.0;

    let velocity = source_panel_velocity(
        start, tangent, length, 1.0, PlaneVector::new(0.0, 0.3)
    );

    assert!(velocity.x().abs() < 1e-14, "tangential component: {}", velocity.x());
    assert!(velocity.y() > 0.0);
}

#[test]
fn collinear_field_point_stays_finite() {
    // A field point on the extension of the panel line has d = 4c - b^2 = 0, which drops the
    // arctangent term. The result must still be finite.
    let start = PlaneVector::new(0.0, 0.0);
    let tangent = PlaneVector::unit_x();
    let length = 1.0;

    let velocity = source_panel_velocity(
        start, tangent, length, 1.0, PlaneVector::new(2.5, 0.0)
    );

    assert!(velocity.x().is_finite());
    assert!(velocity.y().is_finite());
    assert!(velocity.x() > 0.0);
}
