use crate::math::Point;
use crate::store::{ShapeId, ShapeStore};

use super::PathCursor;

/// Where an animated shape's centre travels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trajectory {
    /// Stay at a fixed point.
    Point(Point),
    /// Walk along the live outline of another shape in the store.
    ///
    /// The trajectory never owns that shape. Once it is removed the
    /// trajectory resolves to the origin.
    Shape(ShapeId),
}

impl Trajectory {
    #[must_use]
    pub fn is_point(&self) -> bool {
        matches!(self, Self::Point(_))
    }

    #[must_use]
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape(_))
    }

    /// The referenced shape id, if any.
    #[must_use]
    pub fn shape_id(&self) -> Option<ShapeId> {
        match self {
            Self::Shape(id) => Some(*id),
            Self::Point(_) => None,
        }
    }

    /// Whether the trajectory refers to a shape that no longer exists.
    #[must_use]
    pub fn is_dangling(&self, store: &ShapeStore) -> bool {
        match self {
            Self::Shape(id) => !store.contains(*id),
            Self::Point(_) => false,
        }
    }

    /// Advances `cursor` by `arc_length` and returns the new position.
    ///
    /// Fixed points ignore the cursor. A dangling shape reference yields the
    /// origin.
    pub fn advance(&self, store: &ShapeStore, cursor: &mut PathCursor, arc_length: f32) -> Point {
        match self {
            Self::Point(p) => *p,
            Self::Shape(id) => match store.get(*id) {
                Some(shape) => cursor.step(shape.outline(), arc_length),
                None => {
                    tracing::trace!(?id, "trajectory shape was removed, using origin");
                    Point::origin()
                }
            },
        }
    }
}

impl From<Point> for Trajectory {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<ShapeId> for Trajectory {
    fn from(id: ShapeId) -> Self {
        Self::Shape(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    #[test]
    fn point_trajectory_ignores_cursor() {
        let store = ShapeStore::new();
        let mut cursor = PathCursor::default();
        let t = Trajectory::from(Point::new(4.0, 5.0));
        assert_eq!(t.advance(&store, &mut cursor, 123.0), Point::new(4.0, 5.0));
        assert_eq!(cursor, PathCursor::default());
        assert!(!t.is_dangling(&store));
    }

    #[test]
    fn removed_shape_resolves_to_origin() {
        let mut store = ShapeStore::new();
        let id = store.insert(Polygon::from_points([
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
        ]));
        let t = Trajectory::from(id);
        assert!(t.is_shape());
        assert_eq!(t.shape_id(), Some(id));

        store.remove(id);
        assert!(t.is_dangling(&store));
        let mut cursor = PathCursor::default();
        assert_eq!(t.advance(&store, &mut cursor, 5.0), Point::origin());
    }
}
