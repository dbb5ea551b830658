// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

#![doc(html_no_source)]

//! A library for unsteady panel-method modelling of two-dimensional foils.
//!
//! Steady flows past one or more bodies are solved with the Hess-Smith formulation. Unsteady
//! flows past a single airfoil are solved with the Basu-Hancock formulation, which sheds a wake
//! of point vortices as the airfoil moves.

pub mod error;
pub mod geometry;
pub mod singularities;
pub mod panels;
pub mod aerodynamics;
pub mod wake;
pub mod solvers;
pub mod motion;
pub mod simulation;
pub mod io_utils;

/// Typical imports when using the library
pub mod prelude {
    pub use planemath::type_aliases::Float;
    pub use planemath::plane_vector::PlaneVector;
    pub use planemath::se2::SE2;

    pub use crate::error::Error;

    pub use crate::geometry::orientation::Orientation;
    pub use crate::geometry::scatter::Scatter;
    pub use crate::geometry::broken_line::BrokenLine;
    pub use crate::geometry::body::Body;
    pub use crate::geometry::shapes;

    pub use crate::aerodynamics::airfoil::Airfoil;
    pub use crate::aerodynamics::naca::naca4;

    pub use crate::panels::influence::InfluenceMatrices;

    pub use crate::wake::PointVortexWake;

    pub use crate::solvers::source_panel::solve_source_body;
    pub use crate::solvers::hess_smith::solve_hess_smith_body;
    pub use crate::solvers::hess_smith_system::HessSmithSystem;
    pub use crate::solvers::basu_hancock::{BasuHancockSolver, BasuHancockSettings};

    pub use crate::motion::{TimeStepper, FourierGait, PitchRampGait};
    pub use crate::simulation::{AirfoilSimulation, StepRecord, SimulationHistory};
}
