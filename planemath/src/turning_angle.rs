// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Turning angles of broken lines in the plane.

use crate::type_aliases::Float;
use crate::consts::{PI, TWO_PI};
use crate::plane_vector::PlaneVector;

/// Computes the turning angle of the broken line whose corners are the given points.
/// Intuitively, the turning angle is the sum of the changes in heading angle as one moves along
/// the broken line.
///
/// Heading changes that cross the branch cut of atan2 are corrected back into [-pi, pi].
///
/// # Arguments
/// * `corners` - The corner points of the broken line
/// * `closed` - If true, a final turn is added at the end to return to the initial heading
pub fn turning_angle(corners: &[PlaneVector], closed: bool) -> Float {
    let mut headings: Vec<Float> = corners.windows(2)
        .map(|pair| (pair[1] - pair[0]).angle())
        .collect();

    if closed {
        headings.push(headings[0]);
    }

    let mut total = 0.0;

    for pair in headings.windows(2) {
        let mut heading_change = pair[1] - pair[0];

        if heading_change < -PI {
            heading_change += TWO_PI;
        } else if heading_change > PI {
            heading_change -= TWO_PI;
        }

        total += heading_change;
    }

    total
}
