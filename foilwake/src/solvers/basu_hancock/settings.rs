// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Settings for the unsteady solver.

use serde::{Serialize, Deserialize};

use planemath::type_aliases::Float;

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BasuHancockSettings {
    /// x coordinate of the potential reference point, in the undisturbed fluid
    #[serde(default="BasuHancockSettings::default_xref")]
    pub xref: Float,
    /// y coordinate of the potential reference point
    #[serde(default="BasuHancockSettings::default_yref")]
    pub yref: Float,
    /// Number of straight steps along the path from the reference point to the leading edge
    #[serde(default="BasuHancockSettings::default_nref")]
    pub nref: usize,
    /// Maximum number of wake panel iterations per time step
    #[serde(default="BasuHancockSettings::default_max_iterations")]
    pub max_iterations: usize,
    /// Convergence tolerance for the wake panel iteration
    #[serde(default="BasuHancockSettings::default_tolerance")]
    pub tolerance: Float,
    /// Maximum allowed Neumann and Kutta residual after convergence
    #[serde(default="BasuHancockSettings::default_max_residual")]
    pub max_residual: Float,
    /// If false, the wake panel inclination is locked to the trailing-edge bisector
    #[serde(default="BasuHancockSettings::default_true")]
    pub wake_panel_free: bool,
    /// Whether the body influences the wake advection
    #[serde(default="BasuHancockSettings::default_true")]
    pub wake_body: bool,
    /// Whether the wake influences its own advection
    #[serde(default="BasuHancockSettings::default_true")]
    pub wake_self: bool,
}

impl BasuHancockSettings {
    pub fn default_xref() -> Float {-10.0}
    pub fn default_yref() -> Float {0.0}
    pub fn default_nref() -> usize {20}
    pub fn default_max_iterations() -> usize {200}
    pub fn default_tolerance() -> Float {1e-6}
    pub fn default_max_residual() -> Float {1e-5}
    pub fn default_true() -> bool {true}

    /// Creates settings from a string in JSON format.
    pub fn new_from_string(setup_string: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(setup_string)?)
    }
}

impl Default for BasuHancockSettings {
    fn default() -> Self {
        BasuHancockSettings {
            xref: Self::default_xref(),
            yref: Self::default_yref(),
            nref: Self::default_nref(),
            max_iterations: Self::default_max_iterations(),
            tolerance: Self::default_tolerance(),
            max_residual: Self::default_max_residual(),
            wake_panel_free: Self::default_true(),
            wake_body: Self::default_true(),
            wake_self: Self::default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_json() {
        let settings = BasuHancockSettings::new_from_string("{}").unwrap();

        assert_eq!(settings.xref, -10.0);
        assert_eq!(settings.max_iterations, 200);
        assert!(settings.wake_panel_free);
    }

    #[test]
    fn partial_json_overrides() {
        let settings = BasuHancockSettings::new_from_string(
            r#"{"nref": 40, "wake_self": false}"#
        ).unwrap();

        assert_eq!(settings.nref, 40);
        assert!(!settings.wake_self);
        assert_eq!(settings.tolerance, 1e-6);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(BasuHancockSettings::new_from_string(r#"{"bogus": 1}"#).is_err());
    }
}
