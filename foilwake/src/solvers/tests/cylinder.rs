// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Uniform flow past a circular cylinder with the source panel method, checked against the
//! exact potential-flow solution.

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;

use crate::geometry::orientation::Orientation;
use crate::geometry::shapes::circular_cylinder;
use crate::aerodynamics::forces::body_coefficients;
use crate::solvers::source_panel::solve_source_body;

#[test]
fn circular_cylinder_flow() {
    let freestream = PlaneVector::new(1.0, 0.0);

    for n in [4, 10, 25, 50] {
        let cylinder = circular_cylinder(n, 1.0, PlaneVector::default()).unwrap();

        let solution = solve_source_body(freestream, &cylinder).unwrap();

        assert_eq!(solution.sigma.len(), n);
        assert_eq!(solution.cp.len(), n);

        // Neumann boundary condition: no flow through any panel
        let qn_norm = solution.qn.iter().map(|qn| qn * qn).sum::<Float>().sqrt();
        assert!(qn_norm < 1e-10, "qn norm {} for n = {}", qn_norm, n);

        // The source distribution is symmetric and sums to zero
        for i in 0..n / 2 {
            assert!((solution.cp[i] - solution.cp[n - 1 - i]).abs() < 1e-10,
                "cp asymmetry at {} for n = {}", i, n);
        }
        let sigma_sum: Float = solution.sigma.iter().sum();
        assert!(sigma_sum.abs() < 1e-10, "sigma sum {} for n = {}", sigma_sum, n);

        // The pressure coefficient agrees with the exact result cp = 1 - 4 sin^2(theta) at the
        // panel midpoint angles
        let mut cp_error_squared = 0.0;
        for i in 0..n {
            let midpoint = cylinder.midpoints()[i];
            let theta = midpoint.y().atan2(midpoint.x());
            let cp_exact = 1.0 - 4.0 * theta.sin() * theta.sin();

            cp_error_squared += (solution.cp[i] - cp_exact) * (solution.cp[i] - cp_exact);
        }
        assert!(cp_error_squared.sqrt() < 1e-7,
            "cp error {} for n = {}", cp_error_squared.sqrt(), n);

        // Net forces and moments vanish on the closed symmetric body
        let coefficients = body_coefficients(
            freestream, &cylinder, &solution.cp, PlaneVector::default(),
            Orientation::CounterClockwise,
        ).unwrap();

        assert!(coefficients.drag.abs() < 1e-10, "CD = {}", coefficients.drag);
        assert!(coefficients.lift.abs() < 1e-10, "CL = {}", coefficients.lift);
        assert!(coefficients.moment.abs() < 1e-10, "CM = {}", coefficients.moment);
    }
}
