// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! A free wake of point vortices shed from an airfoil.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use planemath::type_aliases::Float;
use planemath::consts::PI;
use planemath::plane_vector::PlaneVector;

const TWO_PI_INVERSE: Float = 1.0 / (2.0 * PI);

#[derive(Debug, Clone)]
/// A growing collection of point vortices.
///
/// The circulation and position arrays grow by one entry per shed vortex and are never
/// shortened. Induced velocities are regularized with a small length scale so that close
/// encounters between vortices stay bounded.
pub struct PointVortexWake {
    circulations: Vec<Float>,
    positions: Vec<PlaneVector>,
    regularization: Float,
}

impl PointVortexWake {
    pub fn new(regularization: Float) -> Self {
        Self {
            circulations: Vec::new(),
            positions: Vec::new(),
            regularization,
        }
    }

    /// Creates an empty wake with capacity reserved for the expected number of time steps.
    pub fn with_capacity(regularization: Float, capacity: usize) -> Self {
        Self {
            circulations: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            regularization,
        }
    }

    pub fn len(&self) -> usize {
        self.circulations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circulations.is_empty()
    }

    pub fn circulations(&self) -> &[Float] {
        &self.circulations
    }

    pub fn positions(&self) -> &[PlaneVector] {
        &self.positions
    }

    pub fn regularization(&self) -> Float {
        self.regularization
    }

    /// The total circulation carried by the wake.
    pub fn circulation(&self) -> Float {
        self.circulations.iter().sum()
    }

    pub fn append(&mut self, circulation: Float, position: PlaneVector) {
        self.circulations.push(circulation);
        self.positions.push(position);
    }

    /// The velocity induced by the whole wake at a single point.
    pub fn velocity_at_point(&self, point: PlaneVector) -> PlaneVector {
        let regularization_squared = self.regularization * self.regularization;

        let mut velocity = PlaneVector::default();

        for i in 0..self.circulations.len() {
            let relative = point - self.positions[i];
            let distance_squared = relative.length_squared() + regularization_squared;

            velocity += relative.perpendicular()
                * (self.circulations[i] * TWO_PI_INVERSE / distance_squared);
        }

        velocity
    }

    /// The velocity induced by the whole wake at each of the given points.
    #[cfg(not(feature = "parallel"))]
    pub fn velocity(&self, points: &[PlaneVector]) -> Vec<PlaneVector> {
        points.iter().map(|&point| self.velocity_at_point(point)).collect()
    }

    #[cfg(feature = "parallel")]
    pub fn velocity(&self, points: &[PlaneVector]) -> Vec<PlaneVector> {
        points.par_iter().map(|&point| self.velocity_at_point(point)).collect()
    }

    /// The velocity induced by the wake on its own vortices.
    pub fn self_velocity(&self) -> Vec<PlaneVector> {
        self.velocity(&self.positions)
    }

    /// Moves every vortex by its velocity times the time step (explicit Euler).
    pub fn advect(&mut self, velocities: &[PlaneVector], time_step: Float) {
        assert_eq!(velocities.len(), self.positions.len(),
            "One velocity per wake vortex is required");

        for i in 0..self.positions.len() {
            self.positions[i] += velocities[i] * time_step;
        }
    }

    /// Advects the wake under its self-induced velocity alone.
    pub fn self_advect(&mut self, time_step: Float) {
        let velocities = self.self_velocity();

        self.advect(&velocities, time_step);
    }

    /// Coalesces runs of same-sign vortices into equivalent cores, by analogy with the
    /// center-of-mass formula with circulation in place of mass. Vortices of zero strength are
    /// skipped. Returns the core circulations and positions.
    pub fn vortex_cores(&self) -> Vec<(Float, PlaneVector)> {
        let mut cores = Vec::new();

        let mut run_circulation: Float = 0.0;
        let mut run_moment = PlaneVector::default();

        for i in 0..self.circulations.len() {
            let circulation = self.circulations[i];

            if circulation == 0.0 {
                continue;
            }

            if run_circulation != 0.0 && circulation.signum() != run_circulation.signum() {
                cores.push((run_circulation, run_moment / run_circulation));
                run_circulation = 0.0;
                run_moment = PlaneVector::default();
            }

            run_circulation += circulation;
            run_moment += self.positions[i] * circulation;
        }

        if run_circulation != 0.0 {
            cores.push((run_circulation, run_moment / run_circulation));
        }

        cores
    }
}
