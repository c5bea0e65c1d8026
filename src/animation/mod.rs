//! Chained shape animation.
//!
//! A [`PolygonAnimation`] owns a working copy of a template shape in the
//! [`crate::store::ShapeStore`] and moves its centre along a [`Trajectory`]:
//! either a fixed point or the live outline of another shape, typically the
//! working copy of another animation. [`AnimationChain`] keeps such
//! dependencies in update order.

mod chain;
mod path_cursor;
mod polygon_animation;
mod trajectory;

pub use chain::AnimationChain;
pub use path_cursor::PathCursor;
pub use polygon_animation::PolygonAnimation;
pub use trajectory::Trajectory;
