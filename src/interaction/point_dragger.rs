use tracing::debug;

use crate::math::point_2d::distance;
use crate::math::{Point, Vector};

/// Default capture radius around a point.
pub const DEFAULT_PICK_RADIUS: f32 = 10.0;

/// Press-drag-release state machine for moving one point out of a list.
///
/// The dragger stores only the captured index. The host passes the same
/// point list to every call and owns the input device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDragger {
    pick_radius: f32,
    captured: Option<usize>,
}

impl Default for PointDragger {
    fn default() -> Self {
        Self::new(DEFAULT_PICK_RADIUS)
    }
}

impl PointDragger {
    #[must_use]
    pub fn new(pick_radius: f32) -> Self {
        Self {
            pick_radius,
            captured: None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.captured.is_some()
    }

    #[must_use]
    pub fn captured(&self) -> Option<usize> {
        self.captured
    }

    /// Captures the first point within the pick radius of `cursor`.
    pub fn press(&mut self, points: &[Point], cursor: Point) -> Option<usize> {
        if self.captured.is_some() {
            return self.captured;
        }
        self.captured = points
            .iter()
            .position(|p| distance(*p, cursor) <= self.pick_radius);
        if let Some(idx) = self.captured {
            debug!(idx, "captured point");
        }
        self.captured
    }

    /// Moves the captured point by `delta`. Returns its index when it moved.
    pub fn drag(&mut self, points: &mut [Point], delta: Vector) -> Option<usize> {
        let idx = self.captured?;
        if delta == Vector::zeros() {
            return None;
        }
        let Some(point) = points.get_mut(idx) else {
            self.captured = None;
            return None;
        };
        *point += delta;
        Some(idx)
    }

    pub fn release(&mut self) {
        self.captured = None;
    }
}
