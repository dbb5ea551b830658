// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::type_aliases::Float;
use planemath::matrix::Matrix;
use planemath::plane_vector::PlaneVector;

use crate::error::Error;
use crate::geometry::body::Body;
use crate::panels::influence::source_influence_matrices;

#[derive(Debug, Clone)]
/// The solution of a source-only panel solve.
pub struct SourceSolution {
    /// Source strength per unit length on each panel
    pub sigma: Vec<Float>,
    /// Pressure coefficient at each panel midpoint
    pub cp: Vec<Float>,
    /// Net tangential flow speed at each panel midpoint
    pub qt: Vec<Float>,
    /// Net normal flow speed at each panel midpoint (zero up to solver accuracy)
    pub qn: Vec<Float>,
}

/// Solves for the steady flow past a non-lifting body with the source panel method.
///
/// Sources of constant strength per unit panel length are distributed along the panels. The
/// strengths are determined by requiring that the net flow, due to the onset flow and all the
/// source distributions, is tangent to each panel at the panel's midpoint.
pub fn solve_source_body(freestream: PlaneVector, body: &Body) -> Result<SourceSolution, Error> {
    let (at, an) = source_influence_matrices(body);

    solve_source_body_with_matrices(freestream, body, &at, &an)
}

/// As [`solve_source_body`], but reusing precomputed influence matrices.
pub fn solve_source_body_with_matrices(
    freestream: PlaneVector,
    body: &Body,
    at: &Matrix<Float>,
    an: &Matrix<Float>,
) -> Result<SourceSolution, Error> {
    let tangents = body.tangents();
    let normals = body.normals();
    let n = body.nr_panels();

    let rhs: Vec<Float> = normals.iter().map(|normal| -freestream.dot(*normal)).collect();

    let sigma = an.solve_gaussian_elimination(&rhs)?;

    let qt_induced = at.vector_multiply(&sigma);
    let qn_induced = an.vector_multiply(&sigma);

    let mut qt = Vec::with_capacity(n);
    let mut qn = Vec::with_capacity(n);

    for i in 0..n {
        qt.push(qt_induced[i] + freestream.dot(tangents[i]));
        qn.push(qn_induced[i] + freestream.dot(normals[i]));
    }

    let freestream_speed_squared = freestream.length_squared();
    let cp = qt.iter().map(|qt| 1.0 - qt * qt / freestream_speed_squared).collect();

    Ok(SourceSolution { sigma, cp, qt, qn })
}
