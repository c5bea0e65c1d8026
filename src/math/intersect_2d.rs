use super::point_2d::{distance, normalize};
use super::{float_eq, Point, TOLERANCE};

/// Bounded segment-segment intersection.
///
/// Returns the crossing point of segments `ab` and `xy` when it lies inside
/// both segments' bounding boxes (inclusive, widened by a relative
/// [`TOLERANCE`]). Parallel and near-parallel segments report no intersection.
#[must_use]
pub fn intersect(a: Point, b: Point, x: Point, y: Point) -> Option<Point> {
    let div = (y.y - x.y) * (b.x - a.x) - (y.x - x.x) * (b.y - a.y);
    if float_eq(div, 0.0) {
        return None;
    }

    let ab_cross = a.x * b.y - a.y * b.x;
    let xy_cross = x.x * y.y - x.y * y.x;

    let xi = ((x.x - y.x) * ab_cross - (a.x - b.x) * xy_cross) / div;
    let yi = ((x.y - y.y) * ab_cross - (a.y - b.y) * xy_cross) / div;
    let i = Point::new(xi, yi);

    if lies_between(i, a, b) && lies_between(i, x, y) {
        Some(i)
    } else {
        None
    }
}

/// Inclusive bounding-box containment with a relative slack.
fn lies_between(p: Point, a: Point, b: Point) -> bool {
    let slack = |v: f32| TOLERANCE * 1.0_f32.max(v.abs());
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

    min_x - slack(min_x) <= p.x
        && p.x <= max_x + slack(max_x)
        && min_y - slack(min_y) <= p.y
        && p.y <= max_y + slack(max_y)
}

/// Projects `p` onto the line through `a` and `b`.
///
/// The offset along `ab` comes from the three pairwise distances
/// (law of cosines). When `p` coincides with `a` or `b`, or `a` coincides
/// with `b`, the matching endpoint is returned directly.
#[must_use]
pub fn project(p: Point, a: Point, b: Point) -> Point {
    let pa = distance(a, p);
    if float_eq(pa, 0.0) {
        return a;
    }
    let ab = distance(a, b);
    if float_eq(ab, 0.0) {
        return a;
    }
    let pb = distance(p, b);
    if float_eq(pb, 0.0) {
        return b;
    }

    let len = (pa * pa + ab * ab - pb * pb) / (2.0 * ab);
    a + normalize(b - a) * len
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn crossing_diagonals() {
        let i = intersect(p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(10.0, 0.0)).unwrap();
        assert_abs_diff_eq!(i.x, 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(i.y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn lines_cross_outside_segments() {
        // Infinite lines meet at (5, 5) but the second segment stops short.
        assert!(intersect(p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(2.0, 8.0)).is_none());
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(intersect(p(0.0, 0.0), p(10.0, 0.0), p(0.0, 1.0), p(10.0, 1.0)).is_none());
        assert!(intersect(p(0.0, 0.0), p(10.0, 0.0), p(2.0, 0.0), p(8.0, 0.0)).is_none());
    }

    #[test]
    fn touching_at_endpoint_is_inclusive() {
        let i = intersect(p(0.0, 0.0), p(4.0, 0.0), p(4.0, -3.0), p(4.0, 3.0)).unwrap();
        assert_abs_diff_eq!(i.x, 4.0, epsilon = 1e-5);
        assert_abs_diff_eq!(i.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn axis_aligned_crossing() {
        let i = intersect(p(5.0, -10.0), p(5.0, 10.0), p(-3.0, 2.5), p(7.0, 2.5)).unwrap();
        assert_abs_diff_eq!(i.x, 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(i.y, 2.5, epsilon = 1e-5);
    }

    #[test]
    fn degenerate_segment_has_no_intersection() {
        assert!(intersect(p(1.0, 1.0), p(1.0, 1.0), p(0.0, 0.0), p(2.0, 2.0)).is_none());
    }

    #[test]
    fn project_onto_horizontal_line() {
        let r = project(p(3.0, 4.0), p(0.0, 0.0), p(10.0, 0.0));
        assert_abs_diff_eq!(r.x, 3.0, epsilon = 1e-4);
        assert_abs_diff_eq!(r.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn project_beyond_segment_extends_line() {
        let r = project(p(-2.0, 5.0), p(0.0, 0.0), p(0.0, 10.0));
        assert_abs_diff_eq!(r.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(r.y, 5.0, epsilon = 1e-4);

        let r = project(p(1.0, 20.0), p(0.0, 0.0), p(0.0, 10.0));
        assert_abs_diff_eq!(r.y, 20.0, epsilon = 1e-3);
    }

    #[test]
    fn project_degenerate_inputs_return_endpoints() {
        let a = p(1.0, 2.0);
        let b = p(5.0, 2.0);
        assert_eq!(project(a, a, b), a);
        assert_eq!(project(p(9.0, 9.0), a, a), a);
        assert_eq!(project(b, a, b), b);
    }
}
