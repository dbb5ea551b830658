// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::type_aliases::Float;
use planemath::matrix::Matrix;
use planemath::plane_vector::PlaneVector;

use crate::error::Error;
use crate::geometry::body::Body;
use crate::panels::influence::InfluenceMatrices;

#[derive(Debug, Clone)]
/// The solution of a single-body Hess-Smith solve.
pub struct HessSmithSolution {
    /// Source strength per unit length on each panel
    pub sigma: Vec<Float>,
    /// Common vortex strength per unit length on all panels
    pub gamma: Float,
    /// Pressure coefficient at each panel midpoint
    pub cp: Vec<Float>,
    /// Net tangential flow speed at each panel midpoint
    pub qt: Vec<Float>,
    /// Net normal flow speed at each panel midpoint (zero up to solver accuracy)
    pub qn: Vec<Float>,
}

/// Solves for the steady flow past a lifting body with the Hess-Smith method.
///
/// The unknowns are one source strength per panel and a single body-wide vortex strength. The
/// first N equations impose flow tangency at the panel midpoints. The last row encodes the
/// Kutta condition: no vorticity is shed aft of the trailing edge, which, since the flow is
/// tangent to the boundary, amounts to equal tangential flow speed on the two panels adjacent
/// to the trailing edge.
pub fn solve_hess_smith_body(
    freestream: PlaneVector,
    body: &Body,
) -> Result<HessSmithSolution, Error> {
    let matrices = InfluenceMatrices::new(body);

    solve_hess_smith_body_with_matrices(freestream, body, &matrices)
}

/// As [`solve_hess_smith_body`], but reusing precomputed influence matrices.
pub fn solve_hess_smith_body_with_matrices(
    freestream: PlaneVector,
    body: &Body,
    matrices: &InfluenceMatrices,
) -> Result<HessSmithSolution, Error> {
    let tangents = body.tangents();
    let normals = body.normals();
    let n = body.nr_panels();

    let InfluenceMatrices { at, an, bt, bn } = matrices;

    // System matrix: flow tangency in the first n rows, the Kutta condition in the last
    let mut system = Matrix::new_default([n + 1, n + 1]);
    let mut rhs = vec![0.0; n + 1];

    for i in 0..n {
        for j in 0..n {
            system[[i, j]] = an[[i, j]];
        }
        system[[i, n]] = bn.row_sum(i);
        rhs[i] = -freestream.dot(normals[i]);
    }

    for j in 0..n {
        system[[n, j]] = at[[0, j]] + at[[n - 1, j]];
    }
    system[[n, n]] = bt.row_sum(0) + bt.row_sum(n - 1);
    rhs[n] = -freestream.dot(tangents[0] + tangents[n - 1]);

    let solution = system.solve_gaussian_elimination(&rhs)?;

    let sigma = solution[..n].to_vec();
    let gamma = solution[n];

    // Flow velocity at the panel midpoints
    let qt_sources = at.vector_multiply(&sigma);
    let qn_sources = an.vector_multiply(&sigma);

    let mut qt = Vec::with_capacity(n);
    let mut qn = Vec::with_capacity(n);

    for i in 0..n {
        qt.push(qt_sources[i] + gamma * bt.row_sum(i) + freestream.dot(tangents[i]));
        qn.push(qn_sources[i] + gamma * bn.row_sum(i) + freestream.dot(normals[i]));
    }

    // Pressure distribution via the steady Bernoulli equation
    let freestream_speed_squared = freestream.length_squared();
    let cp = qt.iter().map(|qt| 1.0 - qt * qt / freestream_speed_squared).collect();

    Ok(HessSmithSolution { sigma, gamma, cp, qt, qn })
}
