// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! An implementation of the unsteady boundary-element method described in Basu and Hancock
//! (JFM 1978) for flow past a single airfoil.
//!
//! The first step solves the steady problem on the current geometry and primes the solver
//! state. Every later step performs one unsteady time step: an implicit Kutta fixed-point
//! iteration that simultaneously determines the source strengths, the bound vortex strength
//! and the shed wake-panel geometry, followed by pressure evaluation through the unsteady
//! Bernoulli equation, shedding of one wake vortex, and explicit advection of the wake.

pub mod settings;

mod flow;
mod kutta;
mod potential;

use planemath::type_aliases::Float;
use planemath::matrix::linalg::LuDecomposition;
use planemath::plane_vector::PlaneVector;

use crate::error::Error;
use crate::aerodynamics::airfoil::Airfoil;
use crate::panels::influence::InfluenceMatrices;
use crate::wake::PointVortexWake;
use crate::solvers::hess_smith::solve_hess_smith_body_with_matrices;

pub use settings::BasuHancockSettings;

#[derive(Debug, Clone, Copy)]
/// The transient vortex panel joining the trailing edge to the most recently shed wake vortex.
pub struct WakePanel {
    pub length: Float,
    /// Inclination to the positive x-axis, in radians
    pub inclination: Float,
}

impl WakePanel {
    pub fn tangent(&self) -> PlaneVector {
        PlaneVector::new(self.inclination.cos(), self.inclination.sin())
    }
}

#[derive(Debug, Clone)]
/// Solver state carried from one time step to the next.
struct PreviousStep {
    midpoints: Vec<PlaneVector>,
    sigma: Vec<Float>,
    gamma: Float,
    potential: Vec<Float>,
}

#[derive(Debug, Clone)]
/// The solution of one time step.
pub struct StepSolution {
    /// Source strength per unit length on each panel
    pub sigma: Vec<Float>,
    /// Common vortex strength per unit length on all panels
    pub gamma: Float,
    /// Pressure coefficient at each panel midpoint
    pub cp: Vec<Float>,
    /// Circulation of the vortex shed this step (zero on the priming step)
    pub shed_circulation: Float,
    /// Position of the vortex shed this step
    pub shed_position: PlaneVector,
}

#[derive(Debug, Clone)]
/// The unsteady Basu-Hancock solver for a single airfoil.
///
/// The solver owns the airfoil and its wake. Only rigid motions of the airfoil are exposed,
/// because the influence matrices are invariant under rigid motions and are assembled and
/// LU-factored once at construction.
pub struct BasuHancockSolver {
    foil: Airfoil,
    wake: PointVortexWake,
    settings: BasuHancockSettings,
    matrices: InfluenceMatrices,
    /// Factorization of the normal source-influence matrix, shared by every implicit-Kutta
    /// back-substitution. Read-only after construction.
    lu: LuDecomposition,
    steps: usize,
    previous: Option<PreviousStep>,
    wake_panel: Option<WakePanel>,
}

impl BasuHancockSolver {
    pub fn new(
        foil: Airfoil,
        wake: PointVortexWake,
        settings: BasuHancockSettings,
    ) -> Result<Self, Error> {
        let matrices = InfluenceMatrices::new(foil.body());
        let lu = matrices.an.lu_factor().map_err(Error::from)?;

        Ok(Self {
            foil,
            wake,
            settings,
            matrices,
            lu,
            steps: 0,
            previous: None,
            wake_panel: None,
        })
    }

    pub fn foil(&self) -> &Airfoil {
        &self.foil
    }

    pub fn wake(&self) -> &PointVortexWake {
        &self.wake
    }

    pub fn settings(&self) -> &BasuHancockSettings {
        &self.settings
    }

    /// The number of completed steps, counting the steady priming step.
    pub fn nr_steps(&self) -> usize {
        self.steps
    }

    /// The bound circulation at the end of the last step.
    pub fn bound_circulation(&self) -> Float {
        match &self.previous {
            Some(previous) => previous.gamma * self.foil.body().perimeter(),
            None => 0.0,
        }
    }

    /// The source strengths of the last completed step.
    pub fn previous_sigma(&self) -> Option<&[Float]> {
        self.previous.as_ref().map(|previous| previous.sigma.as_slice())
    }

    /// Pitches the airfoil about the chord point at fraction `pitch_axis`.
    pub fn pitch(&mut self, alpha: Float, pitch_axis: Float) {
        self.foil.pitch(alpha, pitch_axis);
    }

    /// Heaves the airfoil vertically.
    pub fn heave(&mut self, dy: Float) {
        self.foil.heave(dy);
    }

    /// Surges the airfoil horizontally.
    pub fn surge(&mut self, dx: Float) {
        self.foil.surge(dx);
    }

    /// Advances the solution by one step.
    ///
    /// The first call solves the steady problem on the current geometry and ignores the time
    /// step. Later calls perform one unsteady step of length `dt`, which must be nonzero.
    pub fn step(&mut self, dt: Float, freestream: PlaneVector) -> Result<StepSolution, Error> {
        if self.previous.is_none() {
            self.steady_step(freestream)
        } else if dt != 0.0 {
            self.unsteady_step(dt, freestream)
        } else {
            Err(Error::CustomStringError(
                "The unsteady time step must be nonzero".to_string()
            ))
        }
    }

    /// Solves the steady problem on the current geometry and primes the unsteady state: the
    /// panel potential, and an initial guess for the shed wake-panel geometry. No wake vortex
    /// is shed.
    fn steady_step(&mut self, freestream: PlaneVector) -> Result<StepSolution, Error> {
        let solution = solve_hess_smith_body_with_matrices(
            freestream, self.foil.body(), &self.matrices
        )?;

        let potential = self.compute_potential(
            freestream, &solution.qt, &solution.sigma, solution.gamma, None
        );

        self.wake_panel = Some(WakePanel {
            length: self.foil.body().perimeter() / self.foil.body().nr_panels() as Float,
            inclination: self.trailing_edge_bisector(),
        });

        self.steps += 1;
        self.previous = Some(PreviousStep {
            midpoints: self.foil.body().midpoints().to_vec(),
            sigma: solution.sigma.clone(),
            gamma: solution.gamma,
            potential,
        });

        Ok(StepSolution {
            sigma: solution.sigma,
            gamma: solution.gamma,
            cp: solution.cp,
            shed_circulation: 0.0,
            shed_position: PlaneVector::default(),
        })
    }

    /// Performs one unsteady time step.
    ///
    /// The step is all-or-nothing: the wake, the wake-panel geometry and the carried state are
    /// only updated once the boundary-condition error gates have passed.
    fn unsteady_step(&mut self, dt: Float, freestream: PlaneVector) -> Result<StepSolution, Error> {
        let previous = self.previous.clone().ok_or_else(|| Error::CustomStringError(
            "Unsteady step requires a completed priming step".to_string()
        ))?;
        let initial_panel = self.wake_panel.ok_or_else(|| Error::CustomStringError(
            "Unsteady step requires an initialized wake panel".to_string()
        ))?;

        let body = self.foil.body();
        let n = body.nr_panels();
        let perimeter = body.perimeter();

        // Panel normal velocity relative to the fluid, from the kinematic update
        let normals = body.normals();
        let midpoints = body.midpoints();

        let vn: Vec<Float> = (0..n).map(|i| {
            ((midpoints[i] - previous.midpoints[i]) / dt).dot(normals[i])
        }).collect();

        let kutta = self.solve_implicit_kutta(freestream, &vn, previous.gamma, initial_panel, dt)?;

        // Kelvin's circulation theorem fixes the strength of the shed wake panel
        let gamma_wake = (perimeter / kutta.wake_panel.length) * (previous.gamma - kutta.gamma);

        // Check the Neumann boundary condition and the Kutta condition
        let (qt, qn) = self.net_flow(
            freestream, &kutta.sigma, kutta.gamma, gamma_wake, &kutta.wake_panel
        );

        let speed_squared: Vec<Float> = (0..n).map(|i| qt[i] * qt[i] + qn[i] * qn[i]).collect();

        let neumann_error = (0..n)
            .map(|i| (qn[i] - vn[i]) * (qn[i] - vn[i]))
            .sum::<Float>()
            .sqrt();

        if neumann_error > self.settings.max_residual {
            return Err(Error::BoundaryResidual(
                format!("Neumann error: {}", neumann_error)
            ));
        }

        let kutta_error = (speed_squared[0] - speed_squared[n - 1]
            - 2.0 * perimeter * (kutta.gamma - previous.gamma) / dt).abs();

        if kutta_error > self.settings.max_residual {
            return Err(Error::BoundaryResidual(
                format!("Kutta error: {}", kutta_error)
            ));
        }

        // Pressure distribution via the unsteady Bernoulli equation
        let potential = self.compute_potential(
            freestream, &qt, &kutta.sigma, kutta.gamma, Some((kutta.wake_panel, gamma_wake))
        );

        let freestream_speed_squared = freestream.length_squared();

        let cp: Vec<Float> = (0..n).map(|i| {
            let dphidt = (potential[i] - previous.potential[i]) / dt;

            1.0 - (speed_squared[i] + 2.0 * dphidt) / freestream_speed_squared
        }).collect();

        // Detach the wake panel into a point vortex and advect the wake
        let shed_circulation = gamma_wake * kutta.wake_panel.length;
        let shed_position = self.foil.trailing_edge()
            + kutta.wake_panel.tangent() * (0.5 * kutta.wake_panel.length)
            + kutta.wake_velocity * dt;

        self.wake.append(shed_circulation, shed_position);
        self.advect_wake(freestream, &kutta.sigma, kutta.gamma, dt);

        self.steps += 1;
        self.wake_panel = Some(kutta.wake_panel);
        self.previous = Some(PreviousStep {
            midpoints: self.foil.body().midpoints().to_vec(),
            sigma: kutta.sigma.clone(),
            gamma: kutta.gamma,
            potential,
        });

        Ok(StepSolution {
            sigma: kutta.sigma,
            gamma: kutta.gamma,
            cp,
            shed_circulation,
            shed_position,
        })
    }
}
