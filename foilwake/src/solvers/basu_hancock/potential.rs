// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;
use planemath::array_generation::linspace;

use crate::panels::integrals::vortex_panel_velocity;
use crate::panels::sheets::{source_sheet_velocity, uniform_vortex_sheet_velocity};

use super::{BasuHancockSolver, WakePanel};

/// This code block reconstructs the velocity potential on the body and advects the wake.
impl BasuHancockSolver {
    /// The velocity potential at the panel midpoints, by line integration of the velocity
    /// field.
    ///
    /// The potential at the leading edge is obtained by integrating u dx + v dy along a
    /// straight path of `nref` steps from the far-field reference point. From there the
    /// potential is marched along the upper surface (corner indices below the leading edge)
    /// and the lower surface (corner indices above it) using the tangential flow speed, with
    /// signs reflecting the tangent direction. The midpoint potential is the average of the
    /// two adjacent corner potentials.
    pub(super) fn compute_potential(
        &self,
        freestream: PlaneVector,
        qt: &[Float],
        sigma: &[Float],
        gamma: Float,
        wake_panel: Option<(WakePanel, Float)>,
    ) -> Vec<Float> {
        let body = self.foil.body();
        let n = body.nr_panels();
        let le = self.foil.le();
        let edge_lengths = body.edge_lengths();

        let leading_edge = self.foil.leading_edge();
        let trailing_edge = self.foil.trailing_edge();

        let nref = self.settings.nref;
        let path_x = linspace(self.settings.xref, leading_edge.x(), nref + 1);
        let path_y = linspace(self.settings.yref, leading_edge.y(), nref + 1);

        // Line integral from the reference point to the leading edge, with the velocity
        // evaluated at the start point of each straight step
        let mut potential_le = 0.0;

        for i in 0..nref {
            let point = PlaneVector::new(path_x[i], path_y[i]);
            let step = PlaneVector::new(path_x[i + 1] - path_x[i], path_y[i + 1] - path_y[i]);

            let mut velocity = freestream
                + source_sheet_velocity(body, sigma, point)
                + uniform_vortex_sheet_velocity(body, gamma, point)
                + self.wake.velocity_at_point(point);

            if let Some((panel, strength)) = &wake_panel {
                velocity += vortex_panel_velocity(
                    trailing_edge, panel.tangent(), panel.length, *strength, point
                );
            }

            potential_le += velocity.dot(step);
        }

        // Corner potentials, marched away from the leading edge along both surfaces
        let mut corner_potential = vec![0.0; n + 1];
        corner_potential[le] = potential_le;

        for i in (0..le).rev() {
            corner_potential[i] = corner_potential[i + 1] - qt[i] * edge_lengths[i];
        }
        for i in (le + 1)..=n {
            corner_potential[i] = corner_potential[i - 1] + qt[i - 1] * edge_lengths[i - 1];
        }

        (0..n).map(|i| 0.5 * (corner_potential[i] + corner_potential[i + 1])).collect()
    }

    /// Advects the wake vortices with a one-step explicit Euler scheme. The body and
    /// wake-self contributions to the advection velocity are gated by the solver settings.
    pub(super) fn advect_wake(
        &mut self,
        freestream: PlaneVector,
        sigma: &[Float],
        gamma: Float,
        dt: Float,
    ) {
        let nr_vortices = self.wake.len();

        let mut velocities = vec![freestream; nr_vortices];

        if self.settings.wake_body {
            let body = self.foil.body();
            let positions = self.wake.positions();

            for i in 0..nr_vortices {
                velocities[i] += source_sheet_velocity(body, sigma, positions[i]);
                velocities[i] += uniform_vortex_sheet_velocity(body, gamma, positions[i]);
            }
        }

        if self.settings.wake_self {
            let self_induced = self.wake.self_velocity();

            for i in 0..nr_vortices {
                velocities[i] += self_induced[i];
            }
        }

        self.wake.advect(&velocities, dt);
    }
}
