// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use std::fmt::Write as _;
use std::path::Path;

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;
use planemath::se2::SE2;
use planemath::turning_angle::turning_angle;

use crate::error::Error;

use crate::geometry::body::Body;
use crate::geometry::orientation::Orientation;

#[derive(Debug, Clone)]
/// A symmetric or cambered airfoil.
///
/// The corners must be ordered from the trailing edge (index 0) over one surface to the leading
/// edge (index `le`) and back along the other surface to the trailing edge. The corner ordering
/// must have a positive turning angle; the clockwise ordering is rejected because the unsteady
/// solver assumes the first panel lies on the surface marching away from the trailing edge in
/// the positive sense.
pub struct Airfoil {
    body: Body,
    le: usize,
    pitch_up: Orientation,
}

impl Airfoil {
    /// Creates an airfoil from its corners and leading-edge index.
    ///
    /// If the pitch-up sense is not given, it is determined by assuming the airfoil is oriented
    /// horizontally: counterclockwise when the leading edge points rightward of the trailing
    /// edge, clockwise when it points leftward.
    pub fn new(
        corners: Vec<PlaneVector>,
        le: usize,
        pitch_up: Option<Orientation>,
    ) -> Result<Self, Error> {
        let total_turning = turning_angle(&corners, true);

        if total_turning < 0.0 {
            return Err(Error::InvalidOrientation(
                "Clockwise airfoil corner ordering is not supported".to_string()
            ));
        }

        if le == 0 || le >= corners.len() - 1 {
            return Err(Error::InvalidOrientation(
                format!("Bad leading-edge index {} for {} corners", le, corners.len())
            ));
        }

        let pitch_up = match pitch_up {
            Some(orientation) => orientation,
            None => {
                if corners[le].x() < corners[0].x() {
                    Orientation::Clockwise
                } else if corners[le].x() > corners[0].x() {
                    Orientation::CounterClockwise
                } else {
                    return Err(Error::InvalidOrientation(
                        "Unable to determine pitch-up orientation".to_string()
                    ));
                }
            }
        };

        Ok(Self {
            body: Body::new_with_orientation(corners, Orientation::Clockwise)?,
            le,
            pitch_up,
        })
    }

    /// Reads airfoil coordinates from a text file.
    ///
    /// The first line contains two integers: the number of corners and the leading-edge index.
    /// Each of the remaining lines contains the x and y coordinates of one corner, whitespace
    /// separated. Coordinates are loaded as-is with no transformation.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        let mut lines = content.lines();

        let header = lines.next()
            .ok_or_else(|| Error::FileFormat("Empty airfoil file".to_string()))?;

        let mut header_fields = header.split_whitespace();

        let nr_corners: usize = parse_field(header_fields.next(), "corner count")?;
        let le: usize = parse_field(header_fields.next(), "leading-edge index")?;

        let mut corners = Vec::with_capacity(nr_corners);

        for i in 0..nr_corners {
            let line = lines.next().ok_or_else(|| Error::FileFormat(
                format!("Expected {} corners, found {}", nr_corners, i)
            ))?;

            let mut fields = line.split_whitespace();

            let x: Float = parse_field(fields.next(), "x coordinate")?;
            let y: Float = parse_field(fields.next(), "y coordinate")?;

            corners.push(PlaneVector::new(x, y));
        }

        Self::new(corners, le, None)
    }

    /// Saves the airfoil to a text file, in the same format as read by
    /// [`load_from_file`](Self::load_from_file).
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let corners = self.body.corners();

        let mut content = String::new();

        let _ = writeln!(content, "{}\t{}", corners.len(), self.le);

        for corner in corners {
            let _ = writeln!(content, "{}\t{}", corner.x(), corner.y());
        }

        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn le(&self) -> usize {
        self.le
    }

    pub fn pitch_up(&self) -> Orientation {
        self.pitch_up
    }

    pub fn leading_edge(&self) -> PlaneVector {
        self.body.corners()[self.le]
    }

    pub fn trailing_edge(&self) -> PlaneVector {
        self.body.corners()[0]
    }

    pub fn chord(&self) -> Float {
        (self.trailing_edge() - self.leading_edge()).length()
    }

    /// Returns the point LE + a * (TE - LE) on the chord line, so that 0 gives the leading
    /// edge, 0.5 the midchord and 1 the trailing edge.
    pub fn chord_point(&self, a: Float) -> PlaneVector {
        let leading_edge = self.leading_edge();

        leading_edge + (self.trailing_edge() - leading_edge) * a
    }

    /// Pitches by the given angle, in radians, about the chord point at fraction `a`. Positive
    /// angles rotate in the pitch-up sense.
    pub fn pitch(&mut self, alpha: Float, a: Float) {
        let pivot = self.chord_point(a);

        let angle = match self.pitch_up {
            Orientation::CounterClockwise => alpha,
            Orientation::Clockwise => -alpha,
        };

        self.body.glide(&SE2::rotation(angle), Some(pivot));
    }

    /// Translates by dx in the x direction.
    pub fn surge(&mut self, dx: Float) {
        self.body.translate(dx, 0.0);
    }

    /// Translates by dy in the y direction.
    pub fn heave(&mut self, dy: Float) {
        self.body.translate(0.0, dy);
    }

    pub fn glide(&mut self, g: &SE2, axis: Option<PlaneVector>) {
        self.body.glide(g, axis);
    }

    pub fn translate(&mut self, dx: Float, dy: Float) {
        self.body.translate(dx, dy);
    }

    pub fn rotate(&mut self, theta: Float, axis: Option<PlaneVector>) {
        self.body.rotate(theta, axis);
    }

    pub fn scale(&mut self, scale: Float) {
        self.body.scale(scale);
    }

    pub fn center(&mut self) {
        self.body.center();
    }
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, name: &str) -> Result<T, Error> {
    field
        .ok_or_else(|| Error::FileFormat(format!("Missing {}", name)))?
        .parse()
        .map_err(|_| Error::FileFormat(format!("Unparsable {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::aerodynamics::naca::naca4;

    #[test]
    fn chord_geometry() {
        let foil = naca4("0012", 50).unwrap();

        assert!((foil.chord() - 1.0).abs() < 1e-12);

        let quarter_chord = foil.chord_point(0.25);
        let leading_edge = foil.leading_edge();

        assert!(((quarter_chord - leading_edge).length() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn file_round_trip_is_exact() {
        let foil = naca4("2412", 40).unwrap();

        let path = std::env::temp_dir().join("foilwake_round_trip_test.dat");

        foil.write_to_file(&path).unwrap();
        let reloaded = Airfoil::load_from_file(&path).unwrap();

        assert_eq!(reloaded.le(), foil.le());
        assert_eq!(reloaded.body().nr_corners(), foil.body().nr_corners());

        for (a, b) in foil.body().corners().iter().zip(reloaded.body().corners()) {
            assert_eq!(a.x(), b.x());
            assert_eq!(a.y(), b.y());
        }

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn bad_leading_edge_index_is_rejected() {
        let foil = naca4("0012", 20).unwrap();
        let corners = foil.body().corners().to_vec();

        assert!(Airfoil::new(corners.clone(), 0, None).is_err());
        assert!(Airfoil::new(corners, 1000, None).is_err());
    }

    #[test]
    fn pitch_rotates_about_chord_point() {
        let mut foil = naca4("0015", 30).unwrap();

        let pivot = foil.chord_point(0.5);
        let chord_before = foil.chord();

        foil.pitch(0.2, 0.5);

        // The pivot stays put and the chord length is preserved
        assert!((foil.chord_point(0.5) - pivot).length() < 1e-12);
        assert!((foil.chord() - chord_before).abs() < 1e-12);

        foil.pitch(-0.2, 0.5);

        let trailing_edge = foil.trailing_edge();

        assert!((trailing_edge.x() - 1.0).abs() < 1e-10);
        assert!(trailing_edge.y().abs() < 1e-10);
    }

    #[test]
    fn heave_translates_vertically() {
        let mut foil = naca4("0012", 20).unwrap();

        let trailing_edge = foil.trailing_edge();

        foil.heave(-0.3);

        assert!((foil.trailing_edge().y() - (trailing_edge.y() - 0.3)).abs() < 1e-14);
        assert!((foil.trailing_edge().x() - trailing_edge.x()).abs() < 1e-14);
    }
}
