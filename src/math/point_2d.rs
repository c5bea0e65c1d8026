use nalgebra::Rotation2;
use rand::Rng;

use super::{Point, Vector};

/// Rotates `point` by `angle` radians around `center`.
///
/// Positive angles rotate counter-clockwise in a y-up frame.
#[must_use]
pub fn rotate_point(point: Point, angle: f32, center: Point) -> Point {
    center + Rotation2::new(angle) * (point - center)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f32 {
    nalgebra::distance(&a, &b)
}

/// Length of a vector.
#[must_use]
pub fn length(v: Vector) -> f32 {
    v.norm()
}

/// Linear interpolation `a + (b - a) * t`.
#[must_use]
pub fn lerp(a: Point, b: Point, t: f32) -> Point {
    a + (b - a) * t
}

/// Unit vector in the direction of `v`. The zero vector stays zero.
#[must_use]
pub fn normalize(v: Vector) -> Vector {
    v.try_normalize(0.0).unwrap_or_else(Vector::zeros)
}

/// Uniformly distributed point with integer coordinates in the inclusive
/// ranges `[min_x, max_x]` and `[min_y, max_y]`. Swapped bounds are accepted.
#[allow(clippy::cast_precision_loss)]
pub fn random_point<R: Rng>(rng: &mut R, min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Point {
    let x = rng.gen_range(min_x.min(max_x)..=min_x.max(max_x));
    let y = rng.gen_range(min_y.min(max_y)..=min_y.max(max_y));
    Point::new(x as f32, y as f32)
}
