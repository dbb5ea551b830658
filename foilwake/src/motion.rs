// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Lazy producers of prescribed motions.
//!
//! A gait is an iterator of (time, (pitch, heave)) samples, with the pitch in degrees and the
//! heave in fractions of the chord. The gaits are pure producers: they never touch the airfoil
//! itself. The simulation driver applies the corresponding rigid motions explicitly each step.

use planemath::type_aliases::Float;
use planemath::fourier_series::FourierSeries;
use planemath::special_functions::smoothstep;

#[derive(Debug, Clone)]
/// An iterator over equally spaced time values, optionally bounded by a number of steps and/or
/// a final time.
pub struct TimeStepper {
    time: Float,
    time_step: Float,
    step: usize,
    max_steps: Option<usize>,
    max_time: Option<Float>,
}

impl TimeStepper {
    pub fn new(time_step: Float) -> Self {
        Self {
            time: 0.0,
            time_step,
            step: 0,
            max_steps: None,
            max_time: None,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_max_time(mut self, max_time: Float) -> Self {
        self.max_time = Some(max_time);
        self
    }
}

impl Iterator for TimeStepper {
    type Item = Float;

    fn next(&mut self) -> Option<Float> {
        if let Some(max_steps) = self.max_steps {
            if self.step >= max_steps {
                return None;
            }
        }
        if let Some(max_time) = self.max_time {
            if self.time >= max_time {
                return None;
            }
        }

        let time = self.time;

        self.step += 1;
        self.time += self.time_step;

        Some(time)
    }
}

/// The largest time step that resolves the fastest time scale with at least `resolution` steps
/// and, if the motion is periodic, divides the period evenly. Returns the time step together
/// with the number of steps per cycle in the periodic case.
pub fn time_step(
    resolution: usize,
    convective_time: Float,
    fastest_time_scale: Float,
    period: Option<Float>,
) -> (Float, Option<usize>) {
    match period {
        None => (convective_time.min(fastest_time_scale) / resolution as Float, None),
        Some(period) => {
            let steps_per_cycle = (resolution as Float * period
                / convective_time.min(fastest_time_scale)).ceil() as usize;

            (period / steps_per_cycle as Float, Some(steps_per_cycle))
        }
    }
}

#[derive(Debug, Clone)]
/// A periodic pitch/heave gait built from Fourier sine series.
pub struct FourierGait<T> {
    time: T,
    pitch: FourierSeries,
    heave: FourierSeries,
}

impl<T: Iterator<Item = Float>> FourierGait<T> {
    /// Creates a gait with the given fundamental frequency. Pitch amplitudes are in degrees,
    /// heave amplitudes in fractions of the chord, and both phase arrays in degrees.
    pub fn new(
        time: T,
        frequency: Float,
        pitch_amplitudes: &[Float],
        pitch_phases_deg: &[Float],
        heave_amplitudes: &[Float],
        heave_phases_deg: &[Float],
    ) -> Self {
        let to_radians = |phases: &[Float]| phases.iter().map(|p| p.to_radians()).collect();

        let pitch = if pitch_amplitudes.is_empty() {
            FourierSeries::zero(frequency)
        } else {
            FourierSeries::new(frequency, pitch_amplitudes.to_vec(), to_radians(pitch_phases_deg))
        };

        let heave = if heave_amplitudes.is_empty() {
            FourierSeries::zero(frequency)
        } else {
            FourierSeries::new(frequency, heave_amplitudes.to_vec(), to_radians(heave_phases_deg))
        };

        Self { time, pitch, heave }
    }

    /// A pure plunge gait with a single heave mode and no pitching.
    pub fn plunge(time: T, frequency: Float, heave_amplitude: Float) -> Self {
        Self::new(time, frequency, &[], &[], &[heave_amplitude], &[0.0])
    }

    /// A pure pitch gait with a single pitch mode and no heaving.
    pub fn pitch(time: T, frequency: Float, pitch_amplitude_deg: Float) -> Self {
        Self::new(time, frequency, &[pitch_amplitude_deg], &[0.0], &[], &[])
    }
}

impl<T: Iterator<Item = Float>> Iterator for FourierGait<T> {
    type Item = (Float, (Float, Float));

    fn next(&mut self) -> Option<Self::Item> {
        let time = self.time.next()?;

        Some((time, (self.pitch.evaluate(time), self.heave.evaluate(time))))
    }
}

#[derive(Debug, Clone)]
/// A smooth pitch-up ramp: the pitch rises from zero to its final value over the rise time
/// along a cubic with zero angular velocity at both ends, then stays constant.
pub struct PitchRampGait<T> {
    time: T,
    /// Final pitch angle, in degrees
    pitch_amplitude_deg: Float,
    rise_time: Float,
}

impl<T: Iterator<Item = Float>> PitchRampGait<T> {
    pub fn new(time: T, pitch_amplitude_deg: Float, rise_time: Float) -> Self {
        Self {
            time,
            pitch_amplitude_deg,
            rise_time,
        }
    }
}

impl<T: Iterator<Item = Float>> Iterator for PitchRampGait<T> {
    type Item = (Float, (Float, Float));

    fn next(&mut self) -> Option<Self::Item> {
        let time = self.time.next()?;

        let pitch = self.pitch_amplitude_deg * smoothstep(time / self.rise_time);

        Some((time, (pitch, 0.0)))
    }
}
