use crate::geometry::Polygon;
use crate::math::point_2d::{distance, lerp};
use crate::math::Point;

/// Largest representable fraction below one.
const MAX_FRACTION: f32 = 1.0 - f32::EPSILON;

/// Arc-length cursor on a closed polygon path.
///
/// The position is an edge index plus a fraction along that edge, with
/// `edge_fraction ∈ [0, 1)`. The path is read fresh on every step, so it may
/// move or deform between steps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathCursor {
    edge_index: usize,
    edge_fraction: f32,
}

impl PathCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn edge_index(&self) -> usize {
        self.edge_index
    }

    #[must_use]
    pub fn edge_fraction(&self) -> f32 {
        self.edge_fraction
    }

    /// Moves the cursor back to the first vertex.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current position on `path` without moving.
    #[must_use]
    pub fn position(&self, path: &Polygon) -> Point {
        let n = path.len();
        if n == 0 {
            return Point::origin();
        }
        let idx = self.edge_index % n;
        lerp(path.point(idx), path.point((idx + 1) % n), self.edge_fraction)
    }

    /// Walks `arc_length` along `path` and returns the new position.
    ///
    /// The step is reduced modulo the perimeter first, so multi-lap steps and
    /// negative steps (walking most of a lap forward) are bounded. An empty
    /// path yields the origin; a path of coincident points yields its first
    /// vertex. Zero-length edges are crossed instantly.
    pub fn step(&mut self, path: &Polygon, arc_length: f32) -> Point {
        let n = path.len();
        if n == 0 {
            return Point::origin();
        }
        let perimeter = path.perimeter();
        if perimeter <= 0.0 || !perimeter.is_finite() {
            return path.point(0);
        }

        let mut remaining_step = arc_length.rem_euclid(perimeter);

        self.edge_index %= n;
        let mut a = path.point(self.edge_index);
        let mut b = path.point((self.edge_index + 1) % n);

        while remaining_step > 0.0 {
            let edge_len = distance(a, b);
            let to_end = distance(lerp(a, b, self.edge_fraction), b);

            if to_end > remaining_step {
                if edge_len > 0.0 {
                    self.edge_fraction =
                        (self.edge_fraction + remaining_step / edge_len).min(MAX_FRACTION);
                }
                break;
            }

            remaining_step -= to_end;
            self.edge_fraction = 0.0;
            self.edge_index = (self.edge_index + 1) % n;
            a = b;
            b = path.point((self.edge_index + 1) % n);
        }

        lerp(a, b, self.edge_fraction)
    }
}
