//! Planar shapes, Bezier curves and chained path animation.
//!
//! Shapes live in a [`store::ShapeStore`] arena and are addressed by
//! [`store::ShapeId`]. Animations move a copy of a template shape along a
//! fixed point or along another shape's outline, and may be chained so one
//! animation follows the output of another.

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod render;
pub mod store;

pub use error::{PlanarError, Result};
