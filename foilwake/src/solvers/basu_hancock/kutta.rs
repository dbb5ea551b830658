// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;
use planemath::solvers::smallest_magnitude_quadratic_root;

use crate::error::Error;
use crate::panels::sheets::{source_sheet_velocity, uniform_vortex_sheet_velocity};

use super::{BasuHancockSolver, WakePanel};

#[derive(Debug, Clone)]
/// The converged state of the implicit Kutta iteration.
pub(super) struct KuttaState {
    pub sigma: Vec<Float>,
    pub gamma: Float,
    pub wake_panel: WakePanel,
    /// Flow velocity at the wake panel midpoint
    pub wake_velocity: PlaneVector,
}

/// This code block contains the implicit Kutta fixed-point iteration.
///
/// Each iteration linearizes the flow-tangency condition in the new bound vortex strength,
/// reduces the unsteady pressure-equality Kutta condition to a scalar quadratic, selects the
/// physical root, and updates the shed wake-panel geometry from the flow at its midpoint. The
/// iteration works on a local copy of the wake panel; the caller commits it together with the
/// rest of the step state.
impl BasuHancockSolver {
    pub(super) fn solve_implicit_kutta(
        &self,
        freestream: PlaneVector,
        vn: &[Float],
        gamma_previous: Float,
        initial_panel: WakePanel,
        dt: Float,
    ) -> Result<KuttaState, Error> {
        let body = self.foil.body();
        let n = body.nr_panels();
        let perimeter = body.perimeter();
        let trailing_edge = self.foil.trailing_edge();

        let (onset_t, onset_n) = self.onset_flow(freestream);
        let (wake_t, wake_n) = self.wake_flow();

        let mut wake_panel = initial_panel;

        if !self.settings.wake_panel_free {
            wake_panel.inclination = self.trailing_edge_bisector();
        }

        let mut previous_velocity = PlaneVector::default();

        for iteration in 0..self.settings.max_iterations {
            let (unit_panel_t, unit_panel_n) = self.wake_panel_flow(&wake_panel, 1.0);

            let shed_ratio = perimeter / wake_panel.length;

            // Linearize the normal-flow boundary condition in the new vortex strength:
            // An sigma = gamma_new * bk + ck
            let bk: Vec<Float> = (0..n)
                .map(|i| shed_ratio * unit_panel_n[i] - self.matrices.bn.row_sum(i))
                .collect();
            let ck: Vec<Float> = (0..n)
                .map(|i| {
                    -onset_n[i] - shed_ratio * gamma_previous * unit_panel_n[i] - wake_n[i] + vn[i]
                })
                .collect();

            let xx = self.lu.solve(&bk);
            let yy = self.lu.solve(&ck);

            // Tangential speeds on the trailing-edge panels, linear in the vortex strength:
            // q = alpha * gamma_new + beta
            let alpha_first = self.matrices.at.row_dot(0, &xx) + self.matrices.bt.row_sum(0)
                - shed_ratio * unit_panel_t[0];
            let beta_first = self.matrices.at.row_dot(0, &yy)
                + shed_ratio * gamma_previous * unit_panel_t[0] + wake_t[0] + onset_t[0];

            let alpha_last = self.matrices.at.row_dot(n - 1, &xx) + self.matrices.bt.row_sum(n - 1)
                - shed_ratio * unit_panel_t[n - 1];
            let beta_last = self.matrices.at.row_dot(n - 1, &yy)
                + shed_ratio * gamma_previous * unit_panel_t[n - 1] + wake_t[n - 1]
                + onset_t[n - 1];

            // The unsteady Kutta condition as a quadratic in the new vortex strength
            let zeta = alpha_first * alpha_first - alpha_last * alpha_last;
            let eta = 2.0 * (alpha_first * beta_first - alpha_last * beta_last - perimeter / dt);
            let chi = beta_first * beta_first - beta_last * beta_last
                + 2.0 * perimeter * gamma_previous / dt
                + vn[0] * vn[0] - vn[n - 1] * vn[n - 1];

            // The root with the smallest absolute value is the physical branch
            let gamma = smallest_magnitude_quadratic_root(zeta, eta, chi)
                .ok_or_else(|| Error::SolverConvergence(
                    "The unsteady Kutta condition has no real root".to_string()
                ))?;

            let sigma: Vec<Float> = (0..n).map(|i| gamma * xx[i] + yy[i]).collect();

            // Flow at the wake panel midpoint, from all contributions
            let panel_midpoint = trailing_edge + wake_panel.tangent() * (0.5 * wake_panel.length);

            let velocity = freestream
                + source_sheet_velocity(body, &sigma, panel_midpoint)
                + uniform_vortex_sheet_velocity(body, gamma, panel_midpoint)
                + self.wake.velocity_at_point(panel_midpoint);

            // Update the wake panel geometry from the flow it rides on
            wake_panel.length = velocity.length() * dt;
            if self.settings.wake_panel_free {
                wake_panel.inclination = velocity.angle();
            }

            if iteration > 0 && (velocity - previous_velocity).length() < self.settings.tolerance {
                return Ok(KuttaState {
                    sigma,
                    gamma,
                    wake_panel,
                    wake_velocity: velocity,
                });
            }

            previous_velocity = velocity;
        }

        Err(Error::SolverConvergence(
            format!(
                "The wake panel iteration failed to converge in {} iterations",
                self.settings.max_iterations
            )
        ))
    }
}
