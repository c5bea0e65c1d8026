//! Point-in-triangle classification.
//!
//! Three interchangeable predicates with different numeric strategies. They
//! agree for any non-degenerate triangle and any point that does not lie on
//! an edge. Points exactly on an edge are ambiguous: the barycentric test
//! reports them outside (strict `> 0`), the half-plane test compares sign bits
//! so a zero cross product counts as positive, and the ray test treats a touch
//! as a crossing. Callers must not rely on boundary classification.

use super::intersect_2d::intersect;
use super::Point;

/// Selects one of the point-in-triangle predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangleTest {
    /// Barycentric weights, see [`inside_barycentric`].
    #[default]
    Barycentric,
    /// Same-side test against each edge, see [`inside_half_plane`].
    HalfPlane,
    /// Segment-to-centroid crossing test, see [`inside_ray`].
    Ray,
}

impl TriangleTest {
    /// All available predicates.
    pub const ALL: [TriangleTest; 3] = [Self::Barycentric, Self::HalfPlane, Self::Ray];

    /// Classifies `p` against triangle `abc` with the selected predicate.
    #[must_use]
    pub fn contains(self, p: Point, a: Point, b: Point, c: Point) -> bool {
        match self {
            Self::Barycentric => inside_barycentric(p, a, b, c),
            Self::HalfPlane => inside_half_plane(p, a, b, c),
            Self::Ray => inside_ray(p, a, b, c),
        }
    }
}

/// Inside iff all three barycentric weights are strictly positive.
///
/// A degenerate (zero-area) triangle yields non-finite weights and is never
/// reported as containing a point.
#[must_use]
pub fn inside_barycentric(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d = (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y);
    let k1 = ((b.x - p.x) * (c.y - p.y) - (c.x - p.x) * (b.y - p.y)) / d;
    let k2 = ((p.x - a.x) * (c.y - a.y) - (c.x - a.x) * (p.y - a.y)) / d;
    let k3 = 1.0 - k1 - k2;

    k1 > 0.0 && k2 > 0.0 && k3 > 0.0
}

/// Inside iff `p` is on the same side of all three directed edges.
#[must_use]
pub fn inside_half_plane(p: Point, a: Point, b: Point, c: Point) -> bool {
    let side = |from: Point, to: Point| {
        ((p.x - from.x) * (to.y - from.y) - (p.y - from.y) * (to.x - from.x)).is_sign_negative()
    };
    let s1 = side(a, b);
    let s2 = side(b, c);
    let s3 = side(c, a);

    s1 == s2 && s2 == s3
}

/// Inside iff the segment from `p` to the triangle centroid crosses no edge.
#[must_use]
pub fn inside_ray(p: Point, a: Point, b: Point, c: Point) -> bool {
    let center = Point::from((a.coords + b.coords + c.coords) / 3.0);

    intersect(p, center, a, b).is_none()
        && intersect(p, center, b, c).is_none()
        && intersect(p, center, c, a).is_none()
}
