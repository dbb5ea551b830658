// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Steady Hess-Smith solutions on NACA airfoils.

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;

use crate::aerodynamics::naca::naca4;
use crate::aerodynamics::forces::airfoil_coefficients;
use crate::panels::influence::InfluenceMatrices;
use crate::solvers::hess_smith::solve_hess_smith_body;
use crate::solvers::hess_smith_system::HessSmithSystem;

#[test]
fn symmetric_foil_at_zero_incidence() {
    let freestream = PlaneVector::new(1.0, 0.0);
    let n = 50;

    let foil = naca4("0010", n).unwrap();

    let solution = solve_hess_smith_body(freestream, foil.body()).unwrap();

    assert_eq!(solution.sigma.len(), n);
    assert_eq!(solution.cp.len(), n);

    // No flow through the surface
    let qn_norm = solution.qn.iter().map(|qn| qn * qn).sum::<Float>().sqrt();
    assert!(qn_norm < 1e-9, "qn norm {}", qn_norm);

    // A symmetric airfoil at zero incidence carries no circulation and no lift
    assert!(solution.gamma.abs() < 1e-10, "gamma = {}", solution.gamma);

    let coefficients = airfoil_coefficients(freestream, &foil, &solution.cp, 0.0).unwrap();
    assert!(coefficients.lift.abs() < 1e-9, "CL = {}", coefficients.lift);

    // The pressure distribution mirrors between the upper and lower surfaces
    for i in 0..n / 2 {
        assert!((solution.cp[i] - solution.cp[n - 1 - i]).abs() < 1e-9,
            "cp asymmetry at panel {}", i);
    }
}

#[test]
fn influence_diagonals_on_airfoils() {
    for code in ["0001", "0010", "0020"] {
        let foil = naca4(code, 50).unwrap();

        let matrices = InfluenceMatrices::new(foil.body());

        for i in 0..50 {
            assert_eq!(matrices.an[[i, i]], 0.5);
            assert_eq!(matrices.at[[i, i]], 0.0);
            assert_eq!(matrices.bt[[i, i]], 0.5);
            assert_eq!(matrices.bn[[i, i]], 0.0);
        }
    }
}

#[test]
fn multi_body_system_reduces_to_single_body() {
    let freestream = PlaneVector::new(0.96, 0.28);

    let foil = naca4("2412", 40).unwrap();

    let single = solve_hess_smith_body(freestream, foil.body()).unwrap();

    let system = HessSmithSystem::new(vec![foil.body().clone()]).unwrap();
    let multi = system.solve(freestream);

    assert_eq!(multi.sigma.len(), 1);
    assert_eq!(multi.gamma.len(), 1);

    assert!((multi.gamma[0] - single.gamma).abs() < 1e-10,
        "gamma: {} != {}", multi.gamma[0], single.gamma);

    for i in 0..single.sigma.len() {
        assert!((multi.sigma[0][i] - single.sigma[i]).abs() < 1e-10,
            "sigma mismatch at {}", i);
    }

    let qt = system.tangential_flow(freestream, &multi);
    let qn = system.normal_flow(freestream, &multi);

    for i in 0..single.qt.len() {
        assert!((qt[0][i] - single.qt[i]).abs() < 1e-9, "qt mismatch at {}", i);
        assert!(qn[0][i].abs() < 1e-9, "qn = {} at {}", qn[0][i], i);
    }
}

#[test]
fn two_distant_bodies_barely_interact() {
    let freestream = PlaneVector::new(1.0, 0.0);

    let mut upper = naca4("0012", 30).unwrap();
    let mut lower = naca4("0012", 30).unwrap();

    upper.heave(100.0);
    lower.heave(-100.0);

    let system = HessSmithSystem::new(vec![
        upper.body().clone(), lower.body().clone()
    ]).unwrap();

    let solution = system.solve(freestream);

    // Both bodies see essentially undisturbed flow, so both circulations match the isolated
    // solution
    let isolated = solve_hess_smith_body(freestream, naca4("0012", 30).unwrap().body()).unwrap();

    for k in 0..2 {
        assert!((solution.gamma[k] - isolated.gamma).abs() < 1e-4,
            "gamma mismatch for body {}", k);
    }

    // Far upstream the flow is undisturbed
    let upstream = system.external_velocity(
        freestream, &solution, &[PlaneVector::new(-1000.0, 0.0)]
    );

    assert!((upstream[0] - freestream).length() < 1e-3);
}
