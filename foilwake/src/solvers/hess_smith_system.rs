// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::type_aliases::Float;
use planemath::matrix::Matrix;
use planemath::matrix::linalg::LuDecomposition;
use planemath::plane_vector::PlaneVector;

use crate::error::Error;
use crate::geometry::body::Body;
use crate::panels::integrals::source_panel_velocity;
use crate::panels::sheets::{source_sheet_velocity, uniform_vortex_sheet_velocity};
use crate::panels::influence::{
    SOURCE_TANGENTIAL_SELF_INFLUENCE,
    SOURCE_NORMAL_SELF_INFLUENCE,
    VORTEX_TANGENTIAL_SELF_INFLUENCE,
    VORTEX_NORMAL_SELF_INFLUENCE,
};

#[derive(Debug, Clone)]
/// The solution of a coupled multi-body Hess-Smith solve: one source strength vector and one
/// vortex strength per body.
pub struct MultiBodySolution {
    pub sigma: Vec<Vec<Float>>,
    pub gamma: Vec<Float>,
}

#[derive(Debug, Clone)]
/// The coupled steady Hess-Smith system for several bodies.
///
/// Panels are numbered globally, body by body. The system couples the flow-tangency rows of
/// all bodies through the cross-body influence entries, and carries one Kutta row per body.
///
/// **Note**: the Kutta rows only carry the circulation of their own body; the off-diagonal
/// entries of the trailing vortex block are zero. For a single body this is exact. For more
/// than one body the Kutta conditions are under-coupled, and results should be checked against
/// a validation case before being trusted.
///
/// The system matrix is LU-factored once at construction; each onset flow costs one pair of
/// triangular solves.
pub struct HessSmithSystem {
    bodies: Vec<Body>,
    nr_panels_total: usize,
    /// Global start index of each body's panel range
    start_indices: Vec<usize>,
    /// Global end index (inclusive) of each body's panel range
    end_indices: Vec<usize>,
    /// Flattened panel data across all bodies
    tangents: Vec<PlaneVector>,
    normals: Vec<PlaneVector>,
    /// Global influence matrices
    at: Matrix<Float>,
    an: Matrix<Float>,
    bt: Matrix<Float>,
    bn: Matrix<Float>,
    lu: LuDecomposition,
}

impl HessSmithSystem {
    pub fn new(bodies: Vec<Body>) -> Result<Self, Error> {
        if bodies.is_empty() {
            return Err(Error::SizeMismatch("At least one body is required".to_string()));
        }

        let nr_bodies = bodies.len();
        let panel_counts: Vec<usize> = bodies.iter().map(|body| body.nr_panels()).collect();
        let nr_panels_total: usize = panel_counts.iter().sum();

        let mut start_indices = Vec::with_capacity(nr_bodies);
        let mut end_indices = Vec::with_capacity(nr_bodies);
        let mut offset = 0;
        for count in &panel_counts {
            start_indices.push(offset);
            end_indices.push(offset + count - 1);
            offset += count;
        }

        // Flatten the panel data in global numbering
        let mut starts = Vec::with_capacity(nr_panels_total);
        let mut tangents = Vec::with_capacity(nr_panels_total);
        let mut normals = Vec::with_capacity(nr_panels_total);
        let mut edge_lengths = Vec::with_capacity(nr_panels_total);
        let mut midpoints = Vec::with_capacity(nr_panels_total);

        for body in &bodies {
            starts.extend_from_slice(&body.corners()[..body.nr_panels()]);
            tangents.extend_from_slice(body.tangents());
            normals.extend_from_slice(body.normals());
            edge_lengths.extend_from_slice(body.edge_lengths());
            midpoints.extend_from_slice(body.midpoints());
        }

        // Global influence matrices, including cross-body entries
        let n = nr_panels_total;
        let mut at = Matrix::new_default([n, n]);
        let mut an = Matrix::new_default([n, n]);
        let mut bt = Matrix::new_default([n, n]);
        let mut bn = Matrix::new_default([n, n]);

        for j in 0..n {
            for i in 0..n {
                let source_velocity = source_panel_velocity(
                    starts[j], tangents[j], edge_lengths[j], 1.0, midpoints[i]
                );
                let vortex_velocity = source_velocity.perpendicular();

                at[[i, j]] = source_velocity.dot(tangents[i]);
                an[[i, j]] = source_velocity.dot(normals[i]);
                bt[[i, j]] = vortex_velocity.dot(tangents[i]);
                bn[[i, j]] = vortex_velocity.dot(normals[i]);
            }
        }

        for i in 0..n {
            at[[i, i]] = SOURCE_TANGENTIAL_SELF_INFLUENCE;
            an[[i, i]] = SOURCE_NORMAL_SELF_INFLUENCE;
            bt[[i, i]] = VORTEX_TANGENTIAL_SELF_INFLUENCE;
            bn[[i, i]] = VORTEX_NORMAL_SELF_INFLUENCE;
        }

        // Assemble the coupled system: flow tangency in the first n rows, one Kutta row per
        // body below them
        let mut system = Matrix::new_default([n + nr_bodies, n + nr_bodies]);

        for i in 0..n {
            for j in 0..n {
                system[[i, j]] = an[[i, j]];
            }
        }

        for k in 0..nr_bodies {
            let first = start_indices[k];
            let last = end_indices[k];

            for i in 0..n {
                system[[i, n + k]] = bn.row_sum_over_columns(i, first..last + 1);
            }

            for j in 0..n {
                system[[n + k, j]] = at[[first, j]] + at[[last, j]];
            }

            system[[n + k, n + k]] = bt.row_sum(first) + bt.row_sum(last);
        }

        let lu = system.lu_factor().map_err(Error::from)?;

        Ok(Self {
            bodies,
            nr_panels_total,
            start_indices,
            end_indices,
            tangents,
            normals,
            at,
            an,
            bt,
            bn,
            lu,
        })
    }

    pub fn nr_bodies(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Solves for the source strengths along each body and the circulation per unit length
    /// around each body, for the given onset flow.
    pub fn solve(&self, freestream: PlaneVector) -> MultiBodySolution {
        let n = self.nr_panels_total;
        let nr_bodies = self.bodies.len();

        let mut rhs = vec![0.0; n + nr_bodies];

        for i in 0..n {
            rhs[i] = -freestream.dot(self.normals[i]);
        }

        for k in 0..nr_bodies {
            let first = self.start_indices[k];
            let last = self.end_indices[k];

            rhs[n + k] = -freestream.dot(self.tangents[first] + self.tangents[last]);
        }

        let solution = self.lu.solve(&rhs);

        let sigma = (0..nr_bodies).map(|k| {
            solution[self.start_indices[k]..self.end_indices[k] + 1].to_vec()
        }).collect();

        let gamma = solution[n..].to_vec();

        MultiBodySolution { sigma, gamma }
    }

    /// The tangential flow speed at the panel midpoints of each body. The normal flow is zero
    /// by construction.
    pub fn tangential_flow(
        &self,
        freestream: PlaneVector,
        solution: &MultiBodySolution,
    ) -> Vec<Vec<Float>> {
        let n = self.nr_panels_total;

        let sigma_global: Vec<Float> = solution.sigma.iter().flatten().cloned().collect();

        let mut qt: Vec<Float> = (0..n)
            .map(|i| freestream.dot(self.tangents[i]) + self.at.row_dot(i, &sigma_global))
            .collect();

        for k in 0..self.bodies.len() {
            let first = self.start_indices[k];
            let last = self.end_indices[k];

            for i in 0..n {
                qt[i] += solution.gamma[k] * self.bt.row_sum_over_columns(i, first..last + 1);
            }
        }

        (0..self.bodies.len()).map(|k| {
            qt[self.start_indices[k]..self.end_indices[k] + 1].to_vec()
        }).collect()
    }

    /// The normal flow speed at the panel midpoints of each body. Zero up to solver accuracy;
    /// exposed so callers can verify the boundary condition.
    pub fn normal_flow(
        &self,
        freestream: PlaneVector,
        solution: &MultiBodySolution,
    ) -> Vec<Vec<Float>> {
        let n = self.nr_panels_total;

        let sigma_global: Vec<Float> = solution.sigma.iter().flatten().cloned().collect();

        let mut qn: Vec<Float> = (0..n)
            .map(|i| freestream.dot(self.normals[i]) + self.an.row_dot(i, &sigma_global))
            .collect();

        for k in 0..self.bodies.len() {
            let first = self.start_indices[k];
            let last = self.end_indices[k];

            for i in 0..n {
                qn[i] += solution.gamma[k] * self.bn.row_sum_over_columns(i, first..last + 1);
            }
        }

        (0..self.bodies.len()).map(|k| {
            qn[self.start_indices[k]..self.end_indices[k] + 1].to_vec()
        }).collect()
    }

    /// The pressure coefficient at the panel midpoints of each body, via the steady Bernoulli
    /// equation.
    pub fn pressure(
        &self,
        freestream: PlaneVector,
        solution: &MultiBodySolution,
    ) -> Vec<Vec<Float>> {
        let freestream_speed_squared = freestream.length_squared();

        self.tangential_flow(freestream, solution).iter().map(|body_qt| {
            body_qt.iter().map(|qt| 1.0 - qt * qt / freestream_speed_squared).collect()
        }).collect()
    }

    /// The net flow velocity at arbitrary field points due to the onset flow and all bodies.
    pub fn external_velocity(
        &self,
        freestream: PlaneVector,
        solution: &MultiBodySolution,
        points: &[PlaneVector],
    ) -> Vec<PlaneVector> {
        points.iter().map(|&point| {
            let mut velocity = freestream;

            for k in 0..self.bodies.len() {
                velocity += source_sheet_velocity(&self.bodies[k], &solution.sigma[k], point);
                velocity += uniform_vortex_sheet_velocity(&self.bodies[k], solution.gamma[k], point);
            }

            velocity
        }).collect()
    }

    /// The pressure coefficient at arbitrary field points, via the steady Bernoulli equation.
    pub fn external_pressure(
        &self,
        freestream: PlaneVector,
        solution: &MultiBodySolution,
        points: &[PlaneVector],
    ) -> Vec<Float> {
        let freestream_speed_squared = freestream.length_squared();

        self.external_velocity(freestream, solution, points).iter()
            .map(|velocity| 1.0 - velocity.length_squared() / freestream_speed_squared)
            .collect()
    }
}
