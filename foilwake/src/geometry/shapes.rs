// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Constructors for canonical body shapes.

use planemath::type_aliases::Float;
use planemath::consts::TWO_PI;
use planemath::plane_vector::PlaneVector;
use planemath::array_generation::linspace;

use crate::error::Error;

use super::body::Body;
use super::orientation::Orientation;

/// A cylinder of arbitrary cross section, where the radius is given as a function of the polar
/// angle. The corners are placed at equally spaced angles, traversed counterclockwise starting
/// from the positive x-axis.
pub fn radial_cylinder(
    radius: impl Fn(Float) -> Float,
    nr_panels: usize,
    center: PlaneVector,
) -> Result<Body, Error> {
    if nr_panels < 3 {
        return Err(Error::CustomStringError(
            format!("A cylinder needs at least 3 panels, got {}", nr_panels)
        ));
    }

    let corners = linspace(0.0, TWO_PI, nr_panels + 1).iter().map(|&angle| {
        center + PlaneVector::new(angle.cos(), angle.sin()) * radius(angle)
    }).collect();

    Body::new_with_orientation(corners, Orientation::Clockwise)
}

/// A circular cylinder.
pub fn circular_cylinder(
    nr_panels: usize,
    radius: Float,
    center: PlaneVector,
) -> Result<Body, Error> {
    if radius <= 0.0 {
        return Err(Error::CustomStringError(
            format!("A circle must have a positive radius, got {}", radius)
        ));
    }

    radial_cylinder(|_| radius, nr_panels, center)
}

/// An ellipse with the given semi-axes.
pub fn ellipse(
    nr_panels: usize,
    semi_x: Float,
    semi_y: Float,
    center: PlaneVector,
) -> Result<Body, Error> {
    if semi_x <= 0.0 || semi_y <= 0.0 {
        return Err(Error::CustomStringError(
            format!("An ellipse must have positive semi-axes, got ({}, {})", semi_x, semi_y)
        ));
    }
    if nr_panels < 4 {
        return Err(Error::CustomStringError(
            format!("An ellipse needs at least 4 panels, got {}", nr_panels)
        ));
    }

    let corners = linspace(0.0, TWO_PI, nr_panels + 1).iter().map(|&angle| {
        center + PlaneVector::new(semi_x * angle.cos(), semi_y * angle.sin())
    }).collect();

    Body::new_with_orientation(corners, Orientation::Clockwise)
}

/// An axis-aligned rectangle centered at the given point, with `nr_panels_x` panels on each of
/// the top and bottom edges and `nr_panels_y` panels on each of the left and right edges. The
/// corners start at the lower-left corner and are traversed counterclockwise.
pub fn rectangle(
    width: Float,
    height: Float,
    nr_panels_x: usize,
    nr_panels_y: usize,
    center: PlaneVector,
) -> Result<Body, Error> {
    if width <= 0.0 || height <= 0.0 {
        return Err(Error::CustomStringError(
            format!("A rectangle must have positive side lengths, got ({}, {})", width, height)
        ));
    }
    if nr_panels_x < 1 || nr_panels_y < 1 {
        return Err(Error::CustomStringError(
            "A rectangle needs at least one panel on each edge".to_string()
        ));
    }

    let x_values = linspace(0.0, width, nr_panels_x + 1);
    let y_values = linspace(0.0, height, nr_panels_y + 1);

    let lower_left = center - PlaneVector::new(0.5 * width, 0.5 * height);

    let mut corners: Vec<PlaneVector> = Vec::with_capacity(2 * (nr_panels_x + nr_panels_y) + 1);

    // Bottom edge, left to right
    for &x in &x_values {
        corners.push(lower_left + PlaneVector::new(x, 0.0));
    }
    // Right edge, upwards
    for &y in &y_values[1..] {
        corners.push(lower_left + PlaneVector::new(width, y));
    }
    // Top edge, right to left
    for &x in x_values[..nr_panels_x].iter().rev() {
        corners.push(lower_left + PlaneVector::new(x, height));
    }
    // Left edge, downwards, closing the polygon
    for &y in y_values[..nr_panels_y].iter().rev() {
        corners.push(lower_left + PlaneVector::new(0.0, y));
    }

    Body::new_with_orientation(corners, Orientation::Clockwise)
}

#[cfg(test)]
mod tests {
    use super::*;

    use planemath::consts::PI;

    #[test]
    fn circular_cylinder_properties() {
        let cylinder = circular_cylinder(50, 1.0, PlaneVector::default()).unwrap();

        assert!(cylinder.closed());
        assert_eq!(cylinder.nr_panels(), 50);
        assert!(cylinder.centroid().length() < 1e-14);
        assert!((cylinder.diameter() - 2.0).abs() < 1e-12);

        // The inscribed polygon perimeter is slightly below the circumference
        assert!(cylinder.perimeter() < TWO_PI);
        assert!(cylinder.perimeter() > TWO_PI * 0.99);
    }

    #[test]
    fn ellipse_bounding_extents() {
        let body = ellipse(40, 2.0, 0.5, PlaneVector::default()).unwrap();

        assert!(body.closed());

        for corner in body.corners() {
            assert!(corner.x().abs() <= 2.0 + 1e-14);
            assert!(corner.y().abs() <= 0.5 + 1e-14);
        }
    }

    #[test]
    fn rectangle_closure_and_perimeter() {
        let body = rectangle(2.0, 1.0, 4, 2, PlaneVector::new(0.5, 0.5)).unwrap();

        assert!(body.closed());
        assert_eq!(body.nr_panels(), 12);
        assert!((body.perimeter() - 6.0).abs() < 1e-13);

        // Counterclockwise traversal
        assert!((planemath::turning_angle::turning_angle(body.corners(), true) - 2.0 * PI).abs() < 1e-12);
    }
}
