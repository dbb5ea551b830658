// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! A sine series used to prescribe periodic motions.

use serde::{Serialize, Deserialize};

use crate::type_aliases::Float;
use crate::consts::TWO_PI;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// The Fourier sine series
///
/// y(t) = sum_n amplitudes[n] * sin(2 pi (n+1) f1 t - phases[n]),
///
/// where f1 is the fundamental frequency. The amplitude and phase arrays must have the same
/// length.
pub struct FourierSeries {
    base_frequency: Float,
    amplitudes: Vec<Float>,
    phases: Vec<Float>,
}

impl FourierSeries {
    pub fn new(base_frequency: Float, amplitudes: Vec<Float>, phases: Vec<Float>) -> Self {
        assert!(base_frequency != 0.0, "Base frequency cannot be zero");
        assert_eq!(amplitudes.len(), phases.len(), "Phase and amplitude lengths must match");

        Self {
            base_frequency,
            amplitudes,
            phases,
        }
    }

    /// Creates a series with all phases set to zero.
    pub fn from_amplitudes(base_frequency: Float, amplitudes: Vec<Float>) -> Self {
        let phases = vec![0.0; amplitudes.len()];

        Self::new(base_frequency, amplitudes, phases)
    }

    /// Creates a series that is identically zero.
    pub fn zero(base_frequency: Float) -> Self {
        Self::from_amplitudes(base_frequency, Vec::new())
    }

    /// The number of modes, even counting those with zero amplitude.
    pub fn nr_modes(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn base_frequency(&self) -> Float {
        self.base_frequency
    }

    pub fn period(&self) -> Float {
        1.0 / self.base_frequency
    }

    /// Sums all modes of the series at the given time.
    pub fn evaluate(&self, time: Float) -> Float {
        let mut value = 0.0;

        for n in 0..self.amplitudes.len() {
            let mode_frequency = (n + 1) as Float * self.base_frequency;

            value += self.amplitudes[n] * (TWO_PI * mode_frequency * time - self.phases[n]).sin();
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PI;

    #[test]
    fn single_mode_values() {
        let series = FourierSeries::from_amplitudes(2.0, vec![1.5]);

        assert_eq!(series.period(), 0.5);
        assert!((series.evaluate(0.0)).abs() < 1e-15);
        assert!((series.evaluate(0.125) - 1.5).abs() < 1e-12); // quarter period
    }

    #[test]
    fn periodicity() {
        let series = FourierSeries::new(1.3, vec![1.0, 0.4], vec![0.2, -PI / 3.0]);

        let period = series.period();

        for i in 0..10 {
            let time = 0.077 * i as Float;

            assert!((series.evaluate(time) - series.evaluate(time + period)).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_series() {
        let series = FourierSeries::zero(1.0);

        assert_eq!(series.nr_modes(), 0);
        assert_eq!(series.evaluate(0.33), 0.0);
    }
}
