// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Assembly of the dense influence matrices.
//!
//! For a body with N panels, the influence matrices hold the velocity induced at every panel
//! midpoint by each panel carrying a unit singularity strength, projected onto the local
//! tangent and normal directions.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use planemath::type_aliases::Float;
use planemath::matrix::Matrix;
use planemath::plane_vector::PlaneVector;

use crate::geometry::body::Body;

use super::integrals::source_panel_velocity;

/// The hand-computed self-influence values in the limit where the field point approaches the
/// midpoint of the inducing panel.
pub const SOURCE_TANGENTIAL_SELF_INFLUENCE: Float = 0.0;
pub const SOURCE_NORMAL_SELF_INFLUENCE: Float = 0.5;
pub const VORTEX_TANGENTIAL_SELF_INFLUENCE: Float = 0.5;
pub const VORTEX_NORMAL_SELF_INFLUENCE: Float = 0.0;

/// The tangential and normal influence matrices (At, An) for unit-strength source panels along
/// the body. Entry (i, j) is the velocity induced at panel i's midpoint by source panel j,
/// projected onto panel i's tangent or normal. The diagonal is set from the hand-computed
/// self-influence limits.
pub fn source_influence_matrices(body: &Body) -> (Matrix<Float>, Matrix<Float>) {
    let columns = unit_source_velocity_columns(body);

    project_columns(
        body,
        &columns,
        SOURCE_TANGENTIAL_SELF_INFLUENCE,
        SOURCE_NORMAL_SELF_INFLUENCE,
    )
}

/// The tangential and normal influence matrices (Bt, Bn) for unit-strength vortex panels along
/// the body.
pub fn vortex_influence_matrices(body: &Body) -> (Matrix<Float>, Matrix<Float>) {
    let columns: Vec<Vec<PlaneVector>> = unit_source_velocity_columns(body)
        .iter()
        .map(|column| column.iter().map(|velocity| velocity.perpendicular()).collect())
        .collect();

    project_columns(
        body,
        &columns,
        VORTEX_TANGENTIAL_SELF_INFLUENCE,
        VORTEX_NORMAL_SELF_INFLUENCE,
    )
}

/// The velocity induced at every panel midpoint by each panel carrying a unit source strength,
/// one column per inducing panel.
#[cfg(not(feature = "parallel"))]
fn unit_source_velocity_columns(body: &Body) -> Vec<Vec<PlaneVector>> {
    (0..body.nr_panels())
        .map(|j| unit_source_velocity_column(body, j))
        .collect()
}

#[cfg(feature = "parallel")]
fn unit_source_velocity_columns(body: &Body) -> Vec<Vec<PlaneVector>> {
    (0..body.nr_panels()).into_par_iter()
        .map(|j| unit_source_velocity_column(body, j))
        .collect()
}

fn unit_source_velocity_column(body: &Body, panel_index: usize) -> Vec<PlaneVector> {
    let start = body.corners()[panel_index];
    let tangent = body.tangents()[panel_index];
    let edge_length = body.edge_lengths()[panel_index];

    body.midpoints().iter()
        .map(|&midpoint| source_panel_velocity(start, tangent, edge_length, 1.0, midpoint))
        .collect()
}

fn project_columns(
    body: &Body,
    columns: &[Vec<PlaneVector>],
    tangential_self_influence: Float,
    normal_self_influence: Float,
) -> (Matrix<Float>, Matrix<Float>) {
    let n = body.nr_panels();
    let tangents = body.tangents();
    let normals = body.normals();

    let mut tangential = Matrix::new_default([n, n]);
    let mut normal = Matrix::new_default([n, n]);

    for j in 0..n {
        for i in 0..n {
            tangential[[i, j]] = columns[j][i].dot(tangents[i]);
            normal[[i, j]] = columns[j][i].dot(normals[i]);
        }
    }

    for i in 0..n {
        tangential[[i, i]] = tangential_self_influence;
        normal[[i, i]] = normal_self_influence;
    }

    (tangential, normal)
}

#[derive(Debug, Clone)]
/// The four influence matrices of a body, assembled together.
pub struct InfluenceMatrices {
    /// Tangential influence of unit source panels
    pub at: Matrix<Float>,
    /// Normal influence of unit source panels
    pub an: Matrix<Float>,
    /// Tangential influence of unit vortex panels
    pub bt: Matrix<Float>,
    /// Normal influence of unit vortex panels
    pub bn: Matrix<Float>,
}

impl InfluenceMatrices {
    pub fn new(body: &Body) -> Self {
        let (at, an) = source_influence_matrices(body);
        let (bt, bn) = vortex_influence_matrices(body);

        Self { at, an, bt, bn }
    }

    pub fn nr_panels(&self) -> usize {
        self.an.nr_rows()
    }
}
