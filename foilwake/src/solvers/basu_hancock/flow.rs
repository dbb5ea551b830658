// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;

use crate::panels::integrals::vortex_panel_velocity;

use super::{BasuHancockSolver, WakePanel};

/// This code block contains the tangential and normal flow contributions at the panel
/// midpoints, used both by the implicit Kutta iteration and by the error gates.
impl BasuHancockSolver {
    /// The angle in (-pi, pi) of an aft-pointing unit vector bisecting the trailing-edge angle.
    pub(super) fn trailing_edge_bisector(&self) -> Float {
        let tangents = self.foil.body().tangents();
        let n = tangents.len();

        let bisector = (tangents[n - 1] - tangents[0]) * 0.5;

        bisector.angle()
    }

    /// Tangential and normal components of the onset flow at the panel midpoints.
    pub(super) fn onset_flow(&self, freestream: PlaneVector) -> (Vec<Float>, Vec<Float>) {
        let body = self.foil.body();

        let tangential = body.tangents().iter().map(|t| freestream.dot(*t)).collect();
        let normal = body.normals().iter().map(|n| freestream.dot(*n)).collect();

        (tangential, normal)
    }

    /// Tangential and normal flow at the panel midpoints due to the body's source and vortex
    /// distributions.
    pub(super) fn body_panel_flow(&self, sigma: &[Float], gamma: Float) -> (Vec<Float>, Vec<Float>) {
        let n = self.foil.body().nr_panels();

        let tangential_sources = self.matrices.at.vector_multiply(sigma);
        let normal_sources = self.matrices.an.vector_multiply(sigma);

        let tangential = (0..n)
            .map(|i| tangential_sources[i] + gamma * self.matrices.bt.row_sum(i))
            .collect();
        let normal = (0..n)
            .map(|i| normal_sources[i] + gamma * self.matrices.bn.row_sum(i))
            .collect();

        (tangential, normal)
    }

    /// Tangential and normal flow at the panel midpoints due to the wake panel with the given
    /// strength.
    pub(super) fn wake_panel_flow(
        &self,
        wake_panel: &WakePanel,
        strength: Float,
    ) -> (Vec<Float>, Vec<Float>) {
        let body = self.foil.body();
        let trailing_edge = self.foil.trailing_edge();
        let panel_tangent = wake_panel.tangent();

        let n = body.nr_panels();
        let tangents = body.tangents();
        let normals = body.normals();
        let midpoints = body.midpoints();

        let mut tangential = Vec::with_capacity(n);
        let mut normal = Vec::with_capacity(n);

        for i in 0..n {
            let velocity = vortex_panel_velocity(
                trailing_edge, panel_tangent, wake_panel.length, strength, midpoints[i]
            );

            tangential.push(velocity.dot(tangents[i]));
            normal.push(velocity.dot(normals[i]));
        }

        (tangential, normal)
    }

    /// Tangential and normal flow at the panel midpoints due to the existing wake vortices.
    pub(super) fn wake_flow(&self) -> (Vec<Float>, Vec<Float>) {
        let body = self.foil.body();

        let velocities = self.wake.velocity(body.midpoints());

        let tangential = velocities.iter().zip(body.tangents())
            .map(|(velocity, tangent)| velocity.dot(*tangent))
            .collect();
        let normal = velocities.iter().zip(body.normals())
            .map(|(velocity, normal)| velocity.dot(*normal))
            .collect();

        (tangential, normal)
    }

    /// The net tangential and normal flow at the panel midpoints, from all contributions.
    pub(super) fn net_flow(
        &self,
        freestream: PlaneVector,
        sigma: &[Float],
        gamma: Float,
        gamma_wake: Float,
        wake_panel: &WakePanel,
    ) -> (Vec<Float>, Vec<Float>) {
        let n = self.foil.body().nr_panels();

        let (onset_t, onset_n) = self.onset_flow(freestream);
        let (body_t, body_n) = self.body_panel_flow(sigma, gamma);
        let (panel_t, panel_n) = self.wake_panel_flow(wake_panel, gamma_wake);
        let (wake_t, wake_n) = self.wake_flow();

        let tangential = (0..n)
            .map(|i| onset_t[i] + body_t[i] + panel_t[i] + wake_t[i])
            .collect();
        let normal = (0..n)
            .map(|i| onset_n[i] + body_n[i] + panel_n[i] + wake_n[i])
            .collect();

        (tangential, normal)
    }
}
