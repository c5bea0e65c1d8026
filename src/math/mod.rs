pub mod dash_2d;
pub mod intersect_2d;
pub mod point_2d;
pub mod triangle_2d;

/// 2D point type.
pub type Point = nalgebra::Point2<f32>;

/// 2D vector type.
pub type Vector = nalgebra::Vector2<f32>;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f32 = 1e-6;

/// Relative float comparison: `|a - b| <= TOLERANCE * max(1, |a|, |b|)`.
#[must_use]
pub fn float_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= TOLERANCE * 1.0_f32.max(a.abs().max(b.abs()))
}
