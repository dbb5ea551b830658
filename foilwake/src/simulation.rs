// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! An interface for running unsteady airfoil simulations driven by a prescribed gait.
//!
//! The driver consumes one (time, (pitch, heave)) sample per step from a lazy gait, applies
//! the pitch and heave increments to the airfoil, invokes the solver, and emits the
//! aerodynamic coefficients, energies and bound circulation of the step.

use serde::{Serialize, Deserialize};

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;

use crate::error::Error;
use crate::aerodynamics::forces::{airfoil_coefficients, drag_lift_vectors};
use crate::solvers::basu_hancock::BasuHancockSolver;
use crate::io_utils;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// The kinematic state and aerodynamic outputs of one simulation step.
pub struct StepRecord {
    pub time: Float,
    /// Pitch angle, in degrees
    pub pitch: Float,
    /// Heave position, in fractions of the chord
    pub heave: Float,
    /// Thrust coefficient (the negated drag coefficient)
    pub thrust_coefficient: Float,
    pub lift_coefficient: Float,
    /// Moment coefficient about the pitch axis, positive pitch-up
    pub moment_coefficient: Float,
    /// Energy consumed by the step
    pub energy_in: Float,
    /// Energy produced by the step
    pub energy_out: Float,
    /// Bound circulation at the end of the step
    pub bound_circulation: Float,
}

impl StepRecord {
    pub fn csv_header() -> &'static str {
        "time,pitch,heave,thrust_coefficient,lift_coefficient,moment_coefficient,\
         energy_in,energy_out,bound_circulation"
    }

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}",
            self.time, self.pitch, self.heave,
            self.thrust_coefficient, self.lift_coefficient, self.moment_coefficient,
            self.energy_in, self.energy_out, self.bound_circulation,
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// The collected records of a simulation run.
pub struct SimulationHistory {
    pub records: Vec<StepRecord>,
}

impl SimulationHistory {
    pub fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    /// Writes the full history as JSON.
    pub fn write_to_file(&self, file_path: &str) -> Result<(), Error> {
        let file = std::fs::File::create(file_path)?;
        let writer = std::io::BufWriter::new(file);

        serde_json::to_writer(writer, self)?;

        Ok(())
    }

    /// Writes the full history as CSV.
    pub fn write_csv(&self, file_path: &str) -> Result<(), Error> {
        let mut content = String::from(StepRecord::csv_header());
        content.push('\n');

        for record in &self.records {
            content.push_str(&record.to_csv_row());
            content.push('\n');
        }

        io_utils::write_text_to_file(file_path, &content)?;

        Ok(())
    }

    /// Appends a single record to a CSV file, writing the header first if the file is new.
    pub fn append_record_to_csv(record: &StepRecord, file_path: &str) -> Result<(), Error> {
        io_utils::csv_data::create_or_append_header_and_data_strings_file(
            file_path,
            StepRecord::csv_header(),
            &record.to_csv_row(),
        )
    }
}

#[derive(Debug)]
/// An unsteady airfoil simulation, stepped by pulling records out of an iterator.
///
/// Each pull consumes one gait sample, applies the pitch increment about the pitch axis and
/// then the heave increment, runs one solver step, and computes the per-step outputs. A solver
/// failure ends the iteration with an error item.
pub struct AirfoilSimulation<M> {
    solver: BasuHancockSolver,
    motion: M,
    /// Pitch pivot on the chord line: 0 is the leading edge, 1 the trailing edge
    pitch_axis: Float,
    freestream: PlaneVector,
    previous_time: Float,
    previous_pitch: Float,
    previous_heave: Float,
}

impl<M: Iterator<Item = (Float, (Float, Float))>> AirfoilSimulation<M> {
    pub fn new(
        solver: BasuHancockSolver,
        motion: M,
        pitch_axis: Float,
        freestream: PlaneVector,
    ) -> Self {
        Self {
            solver,
            motion,
            pitch_axis,
            freestream,
            previous_time: 0.0,
            previous_pitch: 0.0,
            previous_heave: 0.0,
        }
    }

    pub fn solver(&self) -> &BasuHancockSolver {
        &self.solver
    }

    fn step_once(&mut self, time: Float, pitch: Float, heave: Float) -> Result<StepRecord, Error> {
        let chord = self.solver.foil().chord();

        let dt = time - self.previous_time;
        let dalpha = (pitch - self.previous_pitch).to_radians();
        let dy = (heave - self.previous_heave) * chord;

        self.solver.pitch(dalpha, self.pitch_axis);
        self.solver.heave(dy);

        let solution = self.solver.step(dt, self.freestream)?;

        let coefficients = airfoil_coefficients(
            self.freestream, self.solver.foil(), &solution.cp, self.pitch_axis
        )?;

        let thrust_coefficient = -coefficients.drag;

        let (drag_direction, lift_direction) = drag_lift_vectors(self.freestream);

        let force_x = -drag_direction.x() * thrust_coefficient
            + lift_direction.x() * coefficients.lift;
        let force_y = -drag_direction.y() * thrust_coefficient
            + lift_direction.y() * coefficients.lift;

        let energy_in = -(force_y * dy + coefficients.moment * dalpha);
        let energy_out = -(force_x * self.freestream.length() * dt);

        self.previous_time = time;
        self.previous_pitch = pitch;
        self.previous_heave = heave;

        Ok(StepRecord {
            time,
            pitch,
            heave,
            thrust_coefficient,
            lift_coefficient: coefficients.lift,
            moment_coefficient: coefficients.moment,
            energy_in,
            energy_out,
            bound_circulation: solution.gamma * self.solver.foil().body().perimeter(),
        })
    }
}

impl<M: Iterator<Item = (Float, (Float, Float))>> Iterator for AirfoilSimulation<M> {
    type Item = Result<StepRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let (time, (pitch, heave)) = self.motion.next()?;

        Some(self.step_once(time, pitch, heave))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::aerodynamics::naca::naca4;
    use crate::wake::PointVortexWake;
    use crate::motion::{TimeStepper, FourierGait};
    use crate::solvers::basu_hancock::{BasuHancockSolver, BasuHancockSettings};

    fn short_plunge_history() -> SimulationHistory {
        let freestream = PlaneVector::new(1.0, 0.0);

        let foil = naca4("0012", 20).unwrap();
        let solver = BasuHancockSolver::new(
            foil, PointVortexWake::new(1e-6), BasuHancockSettings::default()
        ).unwrap();

        let gait = FourierGait::plunge(
            TimeStepper::new(0.05).with_max_steps(5), 1.0, -0.01
        );

        let mut simulation = AirfoilSimulation::new(solver, gait, 0.0, freestream);

        let mut history = SimulationHistory::default();

        while let Some(result) = simulation.next() {
            history.push(result.unwrap());
        }

        history
    }

    #[test]
    fn history_round_trips_through_json() {
        let history = short_plunge_history();

        assert_eq!(history.records.len(), 5);

        let path = std::env::temp_dir().join("foilwake_history_test.json");
        let path_str = path.to_str().unwrap();

        history.write_to_file(path_str).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let reloaded: SimulationHistory = serde_json::from_str(&content).unwrap();

        assert_eq!(reloaded.records.len(), history.records.len());
        assert_eq!(
            reloaded.records[3].lift_coefficient,
            history.records[3].lift_coefficient
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn csv_output_has_one_row_per_record() {
        let history = short_plunge_history();

        let path = std::env::temp_dir().join("foilwake_history_test.csv");
        let path_str = path.to_str().unwrap();

        history.write_csv(path_str).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let nr_lines = content.lines().count();

        assert_eq!(nr_lines, 1 + history.records.len());
        assert!(content.starts_with("time,pitch,heave"));

        std::fs::remove_file(&path).unwrap();

        // Appending records one by one produces the same layout
        let append_path = std::env::temp_dir().join("foilwake_history_append_test.csv");
        let append_path_str = append_path.to_str().unwrap();

        let _ = std::fs::remove_file(&append_path);

        for record in &history.records {
            SimulationHistory::append_record_to_csv(record, append_path_str).unwrap();
        }

        let appended = std::fs::read_to_string(&append_path).unwrap();
        assert_eq!(appended.lines().count(), 1 + history.records.len());

        std::fs::remove_file(&append_path).unwrap();
    }
}
