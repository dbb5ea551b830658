// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;
use planemath::se2::SE2;
use planemath::turning_angle::turning_angle;

use crate::error::Error;

use super::broken_line::BrokenLine;
use super::orientation::Orientation;

#[derive(Debug, Clone)]
/// A broken line with normal vectors along each panel.
///
/// The normal vectors are obtained by rotating the unit tangent vectors either clockwise or
/// counterclockwise. If the rotation sense is not given it is determined from the turning angle
/// of the corner sequence: positive turning means the corners run counterclockwise and the
/// normals point outward when the tangents are rotated clockwise, and vice versa.
pub struct Body {
    line: BrokenLine,
    tangent_rotation: Orientation,
    normals: Vec<PlaneVector>,
}

impl Body {
    pub fn new(corners: Vec<PlaneVector>) -> Result<Self, Error> {
        let total_turning = turning_angle(&corners, true);

        let tangent_rotation = if total_turning > 0.0 {
            Orientation::Clockwise
        } else if total_turning < 0.0 {
            Orientation::CounterClockwise
        } else {
            return Err(Error::InvalidOrientation(
                "Cannot determine normal vector orientation from a zero turning angle".to_string()
            ));
        };

        Self::new_with_orientation(corners, tangent_rotation)
    }

    /// Creates a body with an explicitly chosen tangent-to-normal rotation sense.
    pub fn new_with_orientation(
        corners: Vec<PlaneVector>,
        tangent_rotation: Orientation,
    ) -> Result<Self, Error> {
        let mut body = Self {
            line: BrokenLine::new(corners)?,
            tangent_rotation,
            normals: Vec::new(),
        };

        body.refresh_normals();

        Ok(body)
    }

    fn refresh_normals(&mut self) {
        self.normals = self.line.tangents().iter().map(|tangent| {
            match self.tangent_rotation {
                Orientation::CounterClockwise => tangent.perpendicular(),
                Orientation::Clockwise => -tangent.perpendicular(),
            }
        }).collect();
    }

    pub fn tangent_rotation(&self) -> Orientation {
        self.tangent_rotation
    }

    pub fn normals(&self) -> &[PlaneVector] {
        &self.normals
    }

    pub fn nr_corners(&self) -> usize {
        self.line.nr_corners()
    }

    pub fn nr_panels(&self) -> usize {
        self.line.nr_panels()
    }

    pub fn corners(&self) -> &[PlaneVector] {
        self.line.corners()
    }

    pub fn tangents(&self) -> &[PlaneVector] {
        self.line.tangents()
    }

    pub fn headings(&self) -> &[Float] {
        self.line.headings()
    }

    pub fn midpoints(&self) -> &[PlaneVector] {
        self.line.midpoints()
    }

    pub fn edge_lengths(&self) -> &[Float] {
        self.line.edge_lengths()
    }

    pub fn perimeter(&self) -> Float {
        self.line.perimeter()
    }

    pub fn diameter(&self) -> Float {
        self.line.diameter()
    }

    pub fn centroid(&self) -> PlaneVector {
        self.line.centroid()
    }

    pub fn closed(&self) -> bool {
        self.line.closed()
    }

    pub fn glide(&mut self, g: &SE2, axis: Option<PlaneVector>) {
        self.line.glide(g, axis);
        self.refresh_normals();
    }

    pub fn translate(&mut self, dx: Float, dy: Float) {
        self.line.translate(dx, dy);
        self.refresh_normals();
    }

    pub fn rotate(&mut self, theta: Float, axis: Option<PlaneVector>) {
        self.line.rotate(theta, axis);
        self.refresh_normals();
    }

    pub fn scale(&mut self, scale: Float) {
        self.line.scale(scale);
        self.refresh_normals();
    }

    pub fn center(&mut self) {
        self.line.center();
        self.refresh_normals();
    }
}
