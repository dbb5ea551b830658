// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Generation of NACA 4-digit airfoils.
//!
//! For details on the series, see <https://en.wikipedia.org/wiki/NACA_airfoil>.

use planemath::type_aliases::Float;
use planemath::consts::PI;
use planemath::plane_vector::PlaneVector;
use planemath::array_generation::linspace;

use crate::error::Error;

use super::airfoil::Airfoil;

/// Thickness polynomial coefficients for the 4-digit series, highest order first. The leading
/// coefficient is adjusted so the trailing edge closes exactly.
const THICKNESS_COEFFICIENTS: [Float; 5] = [-0.1036, 0.2843, -0.3516, -0.1260, 0.0];
const THICKNESS_SQRT_COEFFICIENT: Float = 0.2969;

/// The camber, camber position and thickness encoded by a NACA 4-digit code.
fn parse_naca4_code(code: &str) -> Result<(Float, Float, Float), Error> {
    if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::CustomStringError(
            format!("NACA code must be four digits, got '{}'", code)
        ));
    }

    let digit = |i: usize| code.as_bytes()[i] - b'0';

    let max_camber = 0.01 * digit(0) as Float;
    let camber_position = 0.1 * digit(1) as Float;
    let thickness = 0.01 * (10 * digit(2) + digit(3)) as Float;

    if max_camber == 0.0 && camber_position != 0.0 {
        return Err(Error::CustomStringError(
            "Zero camber with a nonzero camber position is inconsistent".to_string()
        ));
    }
    if max_camber != 0.0 && (camber_position == 0.0 || camber_position == 1.0) {
        return Err(Error::CustomStringError(
            "Camber position must lie strictly inside the chord when camber is nonzero".to_string()
        ));
    }

    Ok((max_camber, camber_position, thickness))
}

fn thickness_distribution(thickness: Float, x: Float) -> Float {
    let mut polynomial = 0.0;
    for coefficient in THICKNESS_COEFFICIENTS {
        polynomial = polynomial * x + coefficient;
    }

    5.0 * thickness * (THICKNESS_SQRT_COEFFICIENT * x.sqrt() + polynomial)
}

fn camber_line(max_camber: Float, camber_position: Float, x: Float) -> (Float, Float) {
    if x <= camber_position {
        (
            max_camber * x / (camber_position * camber_position) * (2.0 * camber_position - x),
            2.0 * max_camber / (camber_position * camber_position) * (camber_position - x),
        )
    } else {
        (
            max_camber * (1.0 - x) / ((1.0 - camber_position) * (1.0 - camber_position))
                * (1.0 + x - 2.0 * camber_position),
            2.0 * max_camber / ((1.0 - camber_position) * (1.0 - camber_position))
                * (camber_position - x),
        )
    }
}

/// Builds a NACA 4-digit airfoil of unit chord with the given number of panels.
///
/// The corners start at the trailing edge, run over the upper surface to the leading edge with
/// cosine spacing, and return along the lower surface. The trailing edge is clamped shut.
pub fn naca4(code: &str, nr_panels: usize) -> Result<Airfoil, Error> {
    let (max_camber, camber_position, thickness) = parse_naca4_code(code)?;

    if nr_panels < 4 {
        return Err(Error::CustomStringError(
            format!("At least four panels are required, got {}", nr_panels)
        ));
    }

    let nr_corners = nr_panels + 1;
    let nr_upper = nr_corners / 2 + nr_corners % 2;
    let nr_lower = nr_corners - nr_upper;

    // Cosine-spaced abscissae along the upper surface, from the trailing edge to the leading
    // edge, and lower-surface abscissae derived from them so that the closing corner lands
    // exactly on the trailing edge.
    let upper_x: Vec<Float> = linspace(0.5 * PI, 0.0, nr_upper)
        .iter().map(|t| 1.0 - t.cos()).collect();

    let mut lower_x = vec![0.0; nr_lower];
    if nr_panels % 2 == 0 {
        for i in 0..nr_lower {
            lower_x[i] = upper_x[nr_upper - i - 2];
        }
    } else {
        for i in 0..(nr_lower - 1) {
            let step = upper_x[nr_upper - i - 1] - upper_x[nr_upper - i - 2];
            lower_x[i] = upper_x[nr_upper - i - 1] - 0.5 * step;
        }
        lower_x[nr_lower - 1] = upper_x[0];
    }

    let mut corners = Vec::with_capacity(nr_corners);

    if max_camber == 0.0 {
        for &x in &upper_x {
            corners.push(PlaneVector::new(x, thickness_distribution(thickness, x)));
        }
        for &x in &lower_x {
            corners.push(PlaneVector::new(x, -thickness_distribution(thickness, x)));
        }
    } else {
        for &x in &upper_x {
            let half_thickness = thickness_distribution(thickness, x);
            let (camber, camber_slope) = camber_line(max_camber, camber_position, x);
            let slope_angle = camber_slope.atan();

            corners.push(PlaneVector::new(
                x - half_thickness * slope_angle.sin(),
                camber + half_thickness * slope_angle.cos(),
            ));
        }
        for &x in &lower_x {
            let half_thickness = thickness_distribution(thickness, x);
            let (camber, camber_slope) = camber_line(max_camber, camber_position, x);
            let slope_angle = camber_slope.atan();

            corners.push(PlaneVector::new(
                x + half_thickness * slope_angle.sin(),
                camber - half_thickness * slope_angle.cos(),
            ));
        }
    }

    Airfoil::new(corners, nr_upper - 1, Some(crate::geometry::orientation::Orientation::Clockwise))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::geometry::orientation::Orientation;

    #[test]
    fn symmetric_foil_properties() {
        for nr_panels in [20, 25, 50] {
            let foil = naca4("0012", nr_panels).unwrap();

            assert_eq!(foil.body().nr_panels(), nr_panels);
            assert!(foil.body().closed(), "not closed for {} panels", nr_panels);
            assert!((foil.chord() - 1.0).abs() < 1e-12);
            assert_eq!(foil.pitch_up(), Orientation::Clockwise);

            // The leading-edge corner sits at the origin, the trailing edge at (1, 0)
            assert!(foil.leading_edge().length() < 1e-12);
            assert!((foil.trailing_edge() - PlaneVector::new(1.0, 0.0)).length() < 1e-12);
        }
    }

    #[test]
    fn symmetric_foil_is_mirror_symmetric() {
        let foil = naca4("0010", 50).unwrap();
        let corners = foil.body().corners();
        let n = foil.body().nr_panels();

        for i in 1..foil.le() {
            let upper = corners[i];
            let lower = corners[n - i];

            assert!((upper.x() - lower.x()).abs() < 1e-14);
            assert!((upper.y() + lower.y()).abs() < 1e-14);
        }
    }

    #[test]
    fn cambered_foil_has_positive_mean_line() {
        let foil = naca4("4415", 50).unwrap();

        let mean_y: Float = foil.body().corners().iter().map(|c| c.y()).sum::<Float>()
            / foil.body().nr_corners() as Float;

        assert!(mean_y > 0.0);
        assert!(foil.body().closed());
    }

    #[test]
    fn bad_codes_are_rejected() {
        assert!(naca4("001", 50).is_err());
        assert!(naca4("0x12", 50).is_err());
        assert!(naca4("0512", 50).is_err());
    }
}
