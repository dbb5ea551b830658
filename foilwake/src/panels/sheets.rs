// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Flow quantities induced by singularity sheets distributed along the panels of a body.

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;

use crate::geometry::body::Body;
use crate::singularities;

use super::integrals::{source_panel_velocity, vortex_panel_velocity};

/// The number of sub-panels used in the midpoint Riemann sums for stream functions.
///
/// Stream-function values are only needed for visualization-grade contours, so a coarse
/// quadrature is sufficient, whereas the velocities that drive the linear systems use the exact
/// closed-form panel integrals.
pub const STREAM_FUNCTION_SUB_PANELS: usize = 5;

/// The velocity at `field_point` due to source sheets along the body, with one strength per
/// panel.
pub fn source_sheet_velocity(
    body: &Body,
    strengths: &[Float],
    field_point: PlaneVector,
) -> PlaneVector {
    let corners = body.corners();
    let tangents = body.tangents();
    let edge_lengths = body.edge_lengths();

    let mut velocity = PlaneVector::default();

    for i in 0..body.nr_panels() {
        velocity += source_panel_velocity(
            corners[i], tangents[i], edge_lengths[i], strengths[i], field_point
        );
    }

    velocity
}

/// The velocity at `field_point` due to vortex sheets along the body, with one strength per
/// panel.
pub fn vortex_sheet_velocity(
    body: &Body,
    strengths: &[Float],
    field_point: PlaneVector,
) -> PlaneVector {
    let corners = body.corners();
    let tangents = body.tangents();
    let edge_lengths = body.edge_lengths();

    let mut velocity = PlaneVector::default();

    for i in 0..body.nr_panels() {
        velocity += vortex_panel_velocity(
            corners[i], tangents[i], edge_lengths[i], strengths[i], field_point
        );
    }

    velocity
}

/// The velocity at `field_point` due to vortex sheets of a single common strength along all
/// panels of the body.
pub fn uniform_vortex_sheet_velocity(
    body: &Body,
    strength: Float,
    field_point: PlaneVector,
) -> PlaneVector {
    let corners = body.corners();
    let tangents = body.tangents();
    let edge_lengths = body.edge_lengths();

    let mut velocity = PlaneVector::default();

    for i in 0..body.nr_panels() {
        velocity += vortex_panel_velocity(
            corners[i], tangents[i], edge_lengths[i], strength, field_point
        );
    }

    velocity
}

/// The stream function at `field_point` due to source sheets along the body, approximated by a
/// midpoint Riemann sum over each panel.
pub fn source_sheet_stream_function(
    body: &Body,
    strengths: &[Float],
    field_point: PlaneVector,
) -> Float {
    sheet_stream_function(body, strengths, field_point, singularities::source_stream_function)
}

/// The stream function at `field_point` due to vortex sheets along the body, approximated by a
/// midpoint Riemann sum over each panel.
pub fn vortex_sheet_stream_function(
    body: &Body,
    strengths: &[Float],
    field_point: PlaneVector,
) -> Float {
    sheet_stream_function(body, strengths, field_point, singularities::vortex_stream_function)
}

fn sheet_stream_function(
    body: &Body,
    strengths: &[Float],
    field_point: PlaneVector,
    point_stream_function: impl Fn(Float, PlaneVector, PlaneVector) -> Float,
) -> Float {
    let corners = body.corners();
    let tangents = body.tangents();
    let edge_lengths = body.edge_lengths();

    let mut value = 0.0;

    for i in 0..body.nr_panels() {
        let sub_length = edge_lengths[i] / STREAM_FUNCTION_SUB_PANELS as Float;
        let mut position = corners[i] + tangents[i] * (0.5 * sub_length);

        for _ in 0..STREAM_FUNCTION_SUB_PANELS {
            value += point_stream_function(strengths[i] * sub_length, position, field_point);
            position += tangents[i] * sub_length;
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::geometry::shapes::circular_cylinder;
    use crate::singularities;

    #[test]
    fn sheet_velocities_far_field() {
        // Far away, a body covered in unit-strength sheets acts as a point singularity of
        // total strength equal to the perimeter, located at the centroid.
        let body = circular_cylinder(30, 0.1, PlaneVector::default()).unwrap();
        let strengths = vec![1.0; body.nr_panels()];

        let field_point = PlaneVector::new(8.0, -6.0);

        let source_sheet = source_sheet_velocity(&body, &strengths, field_point);
        let source_point = singularities::source_velocity(
            body.perimeter(), body.centroid(), field_point
        );

        assert!((source_sheet - source_point).length() / source_point.length() < 1e-3);

        let vortex_sheet = vortex_sheet_velocity(&body, &strengths, field_point);
        let vortex_point = singularities::vortex_velocity(
            body.perimeter(), body.centroid(), field_point
        );

        assert!((vortex_sheet - vortex_point).length() / vortex_point.length() < 1e-3);

        let uniform = uniform_vortex_sheet_velocity(&body, 1.0, field_point);
        assert!((uniform - vortex_sheet).length() < 1e-14);
    }

    #[test]
    fn stream_function_riemann_sum_far_field() {
        let body = circular_cylinder(30, 0.1, PlaneVector::default()).unwrap();
        let strengths = vec![1.0; body.nr_panels()];

        let field_point = PlaneVector::new(3.0, 4.0);

        let vortex_sheet = vortex_sheet_stream_function(&body, &strengths, field_point);
        let vortex_point = singularities::vortex_stream_function(
            body.perimeter(), body.centroid(), field_point
        );

        assert!((vortex_sheet - vortex_point).abs() / vortex_point.abs() < 1e-3,
            "sheet {} vs point {}", vortex_sheet, vortex_point);

        // The source stream function jumps across the branch cut of atan2; evaluate away
        // from it
        let source_sheet = source_sheet_stream_function(&body, &strengths, field_point);
        let source_point = singularities::source_stream_function(
            body.perimeter(), body.centroid(), field_point
        );

        assert!((source_sheet - source_point).abs() < 1e-2,
            "sheet {} vs point {}", source_sheet, source_point);
    }
}
