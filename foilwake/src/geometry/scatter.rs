// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use std::cell::Cell;

use planemath::type_aliases::Float;
use planemath::plane_vector::PlaneVector;
use planemath::se2::SE2;

#[derive(Debug, Clone)]
/// An ordered collection of arbitrary points in the Euclidean plane.
pub struct Scatter {
    corners: Vec<PlaneVector>,
    /// Cached diameter. Computing the diameter is O(n^2), so it is only done when needed.
    /// Rigid motions carry the cached value across the mutation since they cannot change it.
    diameter: Cell<Option<Float>>,
}

impl Scatter {
    pub fn new(corners: Vec<PlaneVector>) -> Self {
        Self {
            corners,
            diameter: Cell::new(None),
        }
    }

    pub fn nr_corners(&self) -> usize {
        self.corners.len()
    }

    pub fn corners(&self) -> &[PlaneVector] {
        &self.corners
    }

    /// The maximum distance between any two points in the collection.
    pub fn diameter(&self) -> Float {
        if let Some(diameter) = self.diameter.get() {
            return diameter;
        }

        let mut max_distance_squared = 0.0;

        for i in 0..self.corners.len() {
            for j in (i + 1)..self.corners.len() {
                let distance_squared = (self.corners[j] - self.corners[i]).length_squared();

                if distance_squared > max_distance_squared {
                    max_distance_squared = distance_squared;
                }
            }
        }

        let diameter = max_distance_squared.sqrt();
        self.diameter.set(Some(diameter));

        diameter
    }

    pub fn centroid(&self) -> PlaneVector {
        self.corners.iter().cloned().sum::<PlaneVector>() / self.corners.len() as Float
    }

    pub fn set_corners(&mut self, corners: Vec<PlaneVector>) {
        self.corners = corners;
        self.diameter.set(None);
    }

    /// Applies the rigid motion `g` to all points, with rotations taken about the given axis.
    /// If no axis is given, the centroid is used. The cached diameter is unaffected by rigid
    /// motions and is kept.
    pub fn glide(&mut self, g: &SE2, axis: Option<PlaneVector>) {
        let cached_diameter = self.diameter.get();

        let axis = axis.unwrap_or_else(|| self.centroid());

        for corner in self.corners.iter_mut() {
            *corner = g.map_point(*corner, axis);
        }

        self.diameter.set(cached_diameter);
    }

    pub fn translate(&mut self, dx: Float, dy: Float) {
        self.glide(&SE2::translation(dx, dy), None);
    }

    pub fn rotate(&mut self, theta: Float, axis: Option<PlaneVector>) {
        self.glide(&SE2::rotation(theta), axis);
    }

    /// Scales the cloud of points about its centroid. The centroid remains unchanged and the
    /// diameter scales by |scale|.
    pub fn scale(&mut self, scale: Float) {
        let centroid = self.centroid();

        self.scale_about(scale, centroid);
    }

    /// Scales the cloud of points about an arbitrary fixed point.
    pub fn scale_about(&mut self, scale: Float, origin: PlaneVector) {
        let cached_diameter = self.diameter.get();

        for corner in self.corners.iter_mut() {
            *corner = origin + (*corner - origin) * scale;
        }

        self.diameter.set(cached_diameter.map(|diameter| diameter * scale.abs()));
    }

    /// Translates the points so that their centroid coincides with the origin.
    pub fn center(&mut self) {
        let centroid = self.centroid();

        self.translate(-centroid.x(), -centroid.y());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use planemath::consts::PI;

    #[test]
    fn diameter_and_centroid() {
        let scatter = Scatter::new(vec![
            PlaneVector::new(0.0, 0.0),
            PlaneVector::new(1.0, 0.0),
            PlaneVector::new(0.0, 2.0),
        ]);

        assert!((scatter.diameter() - 5.0_f64.sqrt()).abs() < 1e-15);

        let centroid = scatter.centroid();
        assert!((centroid.x() - 1.0 / 3.0).abs() < 1e-15);
        assert!((centroid.y() - 2.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn rigid_motion_preserves_diameter_exactly() {
        let mut scatter = Scatter::new(vec![
            PlaneVector::new(0.3, -0.2),
            PlaneVector::new(1.7, 0.4),
            PlaneVector::new(0.9, 2.1),
        ]);

        let diameter = scatter.diameter();

        scatter.glide(&SE2::new(0.73, 1.2, -4.5), Some(PlaneVector::new(0.1, 0.1)));

        assert_eq!(scatter.diameter(), diameter);
    }

    #[test]
    fn diameter_recomputed_after_random_glides_matches_cache() {
        use rand::Rng;

        let mut rng = rand::rng();

        let mut scatter = Scatter::new((0..20).map(|_| {
            PlaneVector::new(rng.random::<Float>(), rng.random::<Float>())
        }).collect());

        let diameter = scatter.diameter();

        for _ in 0..10 {
            let g = SE2::new(
                rng.random::<Float>(), rng.random::<Float>(), rng.random::<Float>()
            );
            scatter.glide(&g, None);
        }

        // The cached value is carried, and recomputing from the moved corners agrees with it
        assert_eq!(scatter.diameter(), diameter);

        let recomputed = Scatter::new(scatter.corners().to_vec()).diameter();

        assert!((recomputed - diameter).abs() < 1e-12);
    }

    #[test]
    fn scaling_scales_diameter() {
        let mut scatter = Scatter::new(vec![
            PlaneVector::new(0.0, 0.0),
            PlaneVector::new(2.0, 0.0),
        ]);

        let diameter = scatter.diameter();

        scatter.scale(-1.5);

        assert!((scatter.diameter() - 1.5 * diameter).abs() < 1e-15);
    }

    #[test]
    fn quarter_turn_about_origin() {
        let mut scatter = Scatter::new(vec![
            PlaneVector::new(0.0, 0.0),
            PlaneVector::new(1.0, 0.0),
        ]);

        scatter.glide(&SE2::rotation(PI / 2.0), Some(PlaneVector::default()));

        assert!((scatter.corners()[1].x() - 0.0).abs() < 1e-15);
        assert!((scatter.corners()[1].y() - 1.0).abs() < 1e-15);
    }
}
