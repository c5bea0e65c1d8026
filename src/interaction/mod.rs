mod point_dragger;

pub use point_dragger::{PointDragger, DEFAULT_PICK_RADIUS};
