// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::type_aliases::Float;
use planemath::consts::EPSILON;
use planemath::plane_vector::PlaneVector;
use planemath::se2::SE2;

use crate::error::Error;

use super::scatter::Scatter;

#[derive(Debug, Clone)]
/// A sequence of straight line segments connected end to end.
///
/// If there are N corner points, then there are N-1 panels, and the ith tangent vector is the
/// unit vector joining the ith corner to the (i+1)th corner. The tangents, headings, midpoints
/// and edge lengths are cached and refreshed after every mutation of the corners.
pub struct BrokenLine {
    scatter: Scatter,
    tangents: Vec<PlaneVector>,
    headings: Vec<Float>,
    midpoints: Vec<PlaneVector>,
    edge_lengths: Vec<Float>,
    perimeter: Float,
}

impl BrokenLine {
    pub fn new(corners: Vec<PlaneVector>) -> Result<Self, Error> {
        if corners.len() < 2 {
            return Err(Error::SizeMismatch(
                format!("A broken line needs at least two corners, got {}", corners.len())
            ));
        }

        for (i, pair) in corners.windows(2).enumerate() {
            if (pair[1] - pair[0]).length_squared() == 0.0 {
                return Err(Error::CustomStringError(
                    format!("Zero-length panel between corners {} and {}", i, i + 1)
                ));
            }
        }

        let mut line = Self {
            scatter: Scatter::new(corners),
            tangents: Vec::new(),
            headings: Vec::new(),
            midpoints: Vec::new(),
            edge_lengths: Vec::new(),
            perimeter: 0.0,
        };

        line.refresh();

        Ok(line)
    }

    /// A straight broken line from one point to another with n corners.
    pub fn join(start: PlaneVector, end: PlaneVector, n: usize) -> Result<Self, Error> {
        let corners = (0..n).map(|i| {
            let fraction = i as Float / (n - 1) as Float;
            start + (end - start) * fraction
        }).collect();

        Self::new(corners)
    }

    /// Recomputes the cached panel quantities from the current corners.
    pub fn refresh(&mut self) {
        let corners = self.scatter.corners();
        let nr_panels = corners.len() - 1;

        self.tangents = Vec::with_capacity(nr_panels);
        self.headings = Vec::with_capacity(nr_panels);
        self.midpoints = Vec::with_capacity(nr_panels);
        self.edge_lengths = Vec::with_capacity(nr_panels);
        self.perimeter = 0.0;

        for i in 0..nr_panels {
            let delta = corners[i + 1] - corners[i];
            let edge_length = delta.length();
            let tangent = delta / edge_length;

            self.tangents.push(tangent);
            self.headings.push(tangent.angle());
            self.midpoints.push(corners[i] + delta * 0.5);
            self.edge_lengths.push(edge_length);
            self.perimeter += edge_length;
        }
    }

    pub fn nr_corners(&self) -> usize {
        self.scatter.nr_corners()
    }

    pub fn nr_panels(&self) -> usize {
        self.scatter.nr_corners() - 1
    }

    pub fn corners(&self) -> &[PlaneVector] {
        self.scatter.corners()
    }

    pub fn tangents(&self) -> &[PlaneVector] {
        &self.tangents
    }

    pub fn headings(&self) -> &[Float] {
        &self.headings
    }

    pub fn midpoints(&self) -> &[PlaneVector] {
        &self.midpoints
    }

    pub fn edge_lengths(&self) -> &[Float] {
        &self.edge_lengths
    }

    pub fn perimeter(&self) -> Float {
        self.perimeter
    }

    pub fn diameter(&self) -> Float {
        self.scatter.diameter()
    }

    /// Whether the first and last corners coincide, within a small multiple of machine epsilon.
    pub fn closed(&self) -> bool {
        let corners = self.scatter.corners();
        let first = corners[0];
        let last = corners[corners.len() - 1];

        let tolerance = 10.0 * EPSILON;

        (first.x() - last.x()).abs() < tolerance && (first.y() - last.y()).abs() < tolerance
    }

    /// The centroid of the corners. For a closed broken line the final corner duplicates the
    /// initial one and is not counted twice.
    pub fn centroid(&self) -> PlaneVector {
        let corners = self.scatter.corners();

        let counted = if self.closed() {
            &corners[..corners.len() - 1]
        } else {
            corners
        };

        counted.iter().cloned().sum::<PlaneVector>() / counted.len() as Float
    }

    pub fn set_corners(&mut self, corners: Vec<PlaneVector>) -> Result<(), Error> {
        *self = Self::new(corners)?;
        Ok(())
    }

    pub fn glide(&mut self, g: &SE2, axis: Option<PlaneVector>) {
        let axis = axis.unwrap_or_else(|| self.centroid());

        self.scatter.glide(g, Some(axis));
        self.refresh();
    }

    pub fn translate(&mut self, dx: Float, dy: Float) {
        self.scatter.translate(dx, dy);
        self.refresh();
    }

    pub fn rotate(&mut self, theta: Float, axis: Option<PlaneVector>) {
        let axis = axis.unwrap_or_else(|| self.centroid());

        self.scatter.rotate(theta, Some(axis));
        self.refresh();
    }

    pub fn scale(&mut self, scale: Float) {
        let centroid = self.centroid();

        self.scatter.scale_about(scale, centroid);
        self.refresh();
    }

    pub fn center(&mut self) {
        let centroid = self.centroid();

        self.scatter.translate(-centroid.x(), -centroid.y());
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tangents_and_midpoints() {
        let line = BrokenLine::join(
            PlaneVector::new(0.0, 0.0), PlaneVector::new(2.0, 0.0), 5
        ).unwrap();

        assert_eq!(line.nr_panels(), 4);
        assert_eq!(line.tangents().len(), 4);

        for i in 0..line.nr_panels() {
            assert!((line.tangents()[i].x() - 1.0).abs() < 1e-15);
            assert!((line.edge_lengths()[i] - 0.5).abs() < 1e-15);
            assert!((line.midpoints()[i].x() - (0.25 + 0.5 * i as Float)).abs() < 1e-15);
        }

        assert!((line.perimeter() - 2.0).abs() < 1e-15);
        assert!(!line.closed());
    }

    #[test]
    fn closed_centroid_skips_duplicated_corner() {
        let corners: Vec<PlaneVector> = [
            (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0),
        ].iter().map(|&(x, y)| PlaneVector::new(x, y)).collect();

        let line = BrokenLine::new(corners).unwrap();

        assert!(line.closed());

        let centroid = line.centroid();

        assert!((centroid.x() - 0.5).abs() < 1e-15);
        assert!((centroid.y() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn refresh_after_rigid_motion() {
        let mut line = BrokenLine::join(
            PlaneVector::new(0.0, 0.0), PlaneVector::new(1.0, 0.0), 3
        ).unwrap();

        let diameter = line.diameter();

        line.rotate(0.5, None);

        assert_eq!(line.diameter(), diameter);

        for tangent in line.tangents() {
            assert!((tangent.length() - 1.0).abs() < 1e-14);
            assert!((tangent.angle() - 0.5).abs() < 1e-14);
        }
    }

    #[test]
    fn too_few_corners_is_rejected() {
        assert!(BrokenLine::new(vec![PlaneVector::new(0.0, 0.0)]).is_err());
    }
}
