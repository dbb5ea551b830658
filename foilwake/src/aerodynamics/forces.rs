// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Forces and moments from surface pressure distributions.

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;

use crate::error::Error;
use crate::geometry::body::Body;
use crate::geometry::orientation::Orientation;

use super::airfoil::Airfoil;

/// The force on each panel given the pressure coefficient at the panel midpoint.
///
/// Closed bodies have outward-pointing normal vectors, hence the minus sign.
pub fn panel_forces(body: &Body, cp: &[Float]) -> Result<Vec<PlaneVector>, Error> {
    if cp.len() != body.nr_panels() {
        return Err(Error::SizeMismatch(
            format!("{} pressure values for {} panels", cp.len(), body.nr_panels())
        ));
    }

    let normals = body.normals();
    let edge_lengths = body.edge_lengths();

    Ok((0..body.nr_panels())
        .map(|i| -normals[i] * (cp[i] * edge_lengths[i]))
        .collect())
}

/// The force coefficient: the summed panel forces divided by a characteristic length.
pub fn force_coefficients(forces: &[PlaneVector], characteristic_length: Float) -> PlaneVector {
    forces.iter().cloned().sum::<PlaneVector>() / characteristic_length
}

/// Unit vectors in the drag and lift directions.
///
/// The drag direction follows the onset flow. The lift direction is the drag direction rotated
/// 90 degrees counterclockwise or clockwise according to whether the drag direction points
/// rightward or leftward, so that positive lift opposes gravity along the -y axis.
pub fn drag_lift_vectors(freestream: PlaneVector) -> (PlaneVector, PlaneVector) {
    let drag_direction = freestream.normalized();

    let lift_direction = if drag_direction.x() >= 0.0 {
        drag_direction.perpendicular()
    } else {
        -drag_direction.perpendicular()
    };

    (drag_direction, lift_direction)
}

/// Projects a force coefficient vector onto the drag and lift directions.
pub fn drag_lift_coefficients(
    force_coefficient: PlaneVector,
    freestream: PlaneVector,
) -> (Float, Float) {
    let (drag_direction, lift_direction) = drag_lift_vectors(freestream);

    (
        force_coefficient.dot(drag_direction),
        force_coefficient.dot(lift_direction),
    )
}

/// The moment about an axis through `axis`, given panel forces applied at the panel midpoints.
/// Moments are taken positive in the given rotation sense.
pub fn moment(
    body: &Body,
    forces: &[PlaneVector],
    axis: PlaneVector,
    sense: Orientation,
) -> Result<Float, Error> {
    if forces.len() != body.nr_panels() {
        return Err(Error::SizeMismatch(
            format!("{} forces for {} panels", forces.len(), body.nr_panels())
        ));
    }

    let midpoints = body.midpoints();

    let mut total = 0.0;

    for i in 0..body.nr_panels() {
        let arm = midpoints[i] - axis;

        total += arm.x() * forces[i].y() - arm.y() * forces[i].x();
    }

    match sense {
        Orientation::CounterClockwise => Ok(total),
        Orientation::Clockwise => Ok(-total),
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Drag, lift and moment coefficients of a body.
pub struct AerodynamicCoefficients {
    pub drag: Float,
    pub lift: Float,
    pub moment: Float,
}

/// Drag, lift and moment coefficients for a generic body, with its diameter as the
/// characteristic length. Moments are taken about `axis`, positive in the given sense, and
/// normalized by the characteristic length squared.
pub fn body_coefficients(
    freestream: PlaneVector,
    body: &Body,
    cp: &[Float],
    axis: PlaneVector,
    moment_sense: Orientation,
) -> Result<AerodynamicCoefficients, Error> {
    let characteristic_length = body.diameter();

    let forces = panel_forces(body, cp)?;
    let force_coefficient = force_coefficients(&forces, characteristic_length);

    let (drag, lift) = drag_lift_coefficients(force_coefficient, freestream);

    let moment_value = moment(body, &forces, axis, moment_sense)?
        / (characteristic_length * characteristic_length);

    Ok(AerodynamicCoefficients {
        drag,
        lift,
        moment: moment_value,
    })
}

/// Drag, lift and moment coefficients for an airfoil, with its chord as the characteristic
/// length. Moments are taken about the chord point at fraction `pitch_axis` and are positive
/// in the pitch-up sense.
pub fn airfoil_coefficients(
    freestream: PlaneVector,
    foil: &Airfoil,
    cp: &[Float],
    pitch_axis: Float,
) -> Result<AerodynamicCoefficients, Error> {
    let characteristic_length = foil.chord();
    let axis = foil.chord_point(pitch_axis);

    let forces = panel_forces(foil.body(), cp)?;
    let force_coefficient = force_coefficients(&forces, characteristic_length);

    let (drag, lift) = drag_lift_coefficients(force_coefficient, freestream);

    let moment_value = moment(foil.body(), &forces, axis, foil.pitch_up())?
        / (characteristic_length * characteristic_length);

    Ok(AerodynamicCoefficients {
        drag,
        lift,
        moment: moment_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::geometry::shapes::circular_cylinder;

    #[test]
    fn uniform_pressure_gives_zero_net_force() {
        // A constant pressure around a closed body integrates to zero force and moment.
        let body = circular_cylinder(40, 1.0, PlaneVector::default()).unwrap();
        let cp = vec![1.0; body.nr_panels()];

        let coefficients = body_coefficients(
            PlaneVector::unit_x(), &body, &cp, PlaneVector::default(),
            Orientation::CounterClockwise,
        ).unwrap();

        assert!(coefficients.drag.abs() < 1e-12);
        assert!(coefficients.lift.abs() < 1e-12);
        assert!(coefficients.moment.abs() < 1e-12);
    }

    #[test]
    fn lift_direction_flips_with_flow_direction() {
        let (drag_rightward, lift_rightward) = drag_lift_vectors(PlaneVector::new(2.0, 0.0));
        let (drag_leftward, lift_leftward) = drag_lift_vectors(PlaneVector::new(-2.0, 0.0));

        assert!((lift_rightward - PlaneVector::unit_y()).length() < 1e-15);
        assert!((lift_leftward - PlaneVector::unit_y()).length() < 1e-15);
        assert!((drag_rightward + drag_leftward).length() < 1e-15);
    }

    #[test]
    fn pressure_length_mismatch_is_rejected() {
        let body = circular_cylinder(10, 1.0, PlaneVector::default()).unwrap();

        assert!(matches!(
            panel_forces(&body, &[1.0, 2.0]),
            Err(Error::SizeMismatch(_))
        ));
    }
}
