// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::type_aliases::Float;
use planemath::matrix::Matrix;
use planemath::plane_vector::PlaneVector;
use planemath::array_generation::linspace;

use crate::error::Error;
use crate::geometry::orientation::Orientation;
use crate::solvers::hess_smith_system::HessSmithSystem;

use super::airfoil::Airfoil;
use super::forces::airfoil_coefficients;

#[derive(Debug, Clone)]
/// A linear lift model CL = CL0 + slope * alpha, with the angle of attack in degrees, fitted
/// over a sweep of steady solutions.
pub struct SteadyLiftModel {
    pub cl_zero_angle: Float,
    /// Lift slope per degree of angle of attack
    pub slope: Float,
    /// The sampled angles of attack, in degrees
    pub angles: Vec<Float>,
    /// The computed lift coefficient at each angle
    pub lift_coefficients: Vec<Float>,
}

/// Fits a linear lift model for the given airfoil by solving the steady problem at `nr_angles`
/// equally spaced angles of attack between `angle_start` and `angle_end` (degrees) and
/// least-squares fitting a straight line through the computed lift coefficients.
///
/// The onset flow direction is chosen from the airfoil's pitch-up orientation, so that a
/// positive angle of attack produces positive lift for both leftward and rightward pointing
/// airfoils.
pub fn steady_lift_model(
    foil: &Airfoil,
    angle_start: Float,
    angle_end: Float,
    nr_angles: usize,
) -> Result<SteadyLiftModel, Error> {
    if nr_angles < 2 {
        return Err(Error::SizeMismatch(
            format!("At least two angles are needed for a line fit, got {}", nr_angles)
        ));
    }

    let system = HessSmithSystem::new(vec![foil.body().clone()])?;

    let angles = linspace(angle_start, angle_end, nr_angles);
    let mut lift_coefficients = Vec::with_capacity(nr_angles);

    for &angle in &angles {
        let angle_rad = angle.to_radians();

        let freestream = match foil.pitch_up() {
            // Airfoil points leftward and the flow moves to the right
            Orientation::Clockwise => PlaneVector::new(angle_rad.cos(), angle_rad.sin()),
            // Airfoil points rightward and the flow moves to the left
            Orientation::CounterClockwise => PlaneVector::new(-angle_rad.cos(), angle_rad.sin()),
        };

        let solution = system.solve(freestream);
        let pressure = system.pressure(freestream, &solution);

        let coefficients = airfoil_coefficients(freestream, foil, &pressure[0], 0.0)?;

        lift_coefficients.push(coefficients.lift);
    }

    // Least-squares line fit through the (angle, CL) samples via the 2x2 normal equations
    let n = nr_angles as Float;
    let sum_angle: Float = angles.iter().sum();
    let sum_angle_squared: Float = angles.iter().map(|a| a * a).sum();
    let sum_cl: Float = lift_coefficients.iter().sum();
    let sum_angle_cl: Float = angles.iter().zip(&lift_coefficients).map(|(a, cl)| a * cl).sum();

    let normal_matrix = Matrix {
        data: vec![n, sum_angle,
                   sum_angle, sum_angle_squared],
        shape: [2, 2],
    };

    let fit = normal_matrix.solve_gaussian_elimination(&[sum_cl, sum_angle_cl])?;

    Ok(SteadyLiftModel {
        cl_zero_angle: fit[0],
        slope: fit[1],
        angles,
        lift_coefficients,
    })
}
