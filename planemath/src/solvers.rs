// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Numerical solvers, such as root-finding for low-order polynomials.

use crate::type_aliases::Float;

/// Returns the real roots of the quadratic equation a*x^2 + b*x + c = 0.
///
/// A degenerate leading coefficient reduces the equation to a linear one, in which case the
/// single root is returned twice. `None` is returned when no real root exists.
///
/// The two-root case uses the numerically stable formulation that avoids cancellation between
/// -b and the discriminant.
pub fn quadratic_roots(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    if a == 0.0 {
        if b == 0.0 {
            return None;
        }

        let root = -c / b;
        return Some((root, root));
    }

    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let q = -0.5 * (b + b.signum() * discriminant.sqrt());

    if q == 0.0 {
        return Some((0.0, 0.0));
    }

    Some((q / a, c / q))
}

/// Returns the real root of a*x^2 + b*x + c = 0 with the smallest absolute value.
pub fn smallest_magnitude_quadratic_root(a: Float, b: Float, c: Float) -> Option<Float> {
    let (root_1, root_2) = quadratic_roots(a, b, c)?;

    if root_1.abs() < root_2.abs() {
        Some(root_1)
    } else {
        Some(root_2)
    }
}
