//! Planar shapes and curves.

pub mod bezier;
pub mod bezier_spline;
pub mod ellipse;
mod polygon;
mod shape;

pub use bezier::{bezier_fn, BezierCurve, BezierFn};
pub use bezier_spline::BezierSpline;
pub use ellipse::Ellipse;
pub use polygon::Polygon;
pub use shape::Shape;
