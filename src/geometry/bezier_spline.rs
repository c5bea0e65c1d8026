use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::math::intersect_2d::project;
use crate::math::{Point, Vector};
use crate::render::{Color, Renderer};

use super::BezierCurve;

/// A chain of same-order Bezier curves sharing their joint control points.
///
/// Curve `k` uses control points `k*order ..= k*order + order`, so the last
/// point of one curve is the first point of the next. Trailing points that do
/// not yet complete a curve are kept until enough arrive.
#[derive(Debug, Clone)]
pub struct BezierSpline {
    order: usize,
    samples: usize,
    control_points: Vec<Point>,
    curves: Vec<BezierCurve>,
}

impl BezierSpline {
    /// Creates an empty spline of curves with the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` or `samples` is zero.
    pub fn new(order: usize, samples: usize) -> Result<Self> {
        if order == 0 {
            return Err(
                ConfigError::InvalidParameter("spline order must be positive".into()).into(),
            );
        }
        if samples == 0 {
            return Err(
                ConfigError::InvalidParameter("spline needs at least one sample".into()).into(),
            );
        }
        Ok(Self {
            order,
            samples,
            control_points: Vec::new(),
            curves: Vec::new(),
        })
    }

    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    #[must_use]
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    #[must_use]
    pub fn curves(&self) -> &[BezierCurve] {
        &self.curves
    }

    /// Control points of curve `k`.
    fn chunk(&self, k: usize) -> Option<&[Point]> {
        let start = k * self.order;
        self.control_points.get(start..=start + self.order)
    }

    /// Appends a control point, closing a new curve when it completes one.
    ///
    /// # Errors
    ///
    /// Never fails for a spline built with [`BezierSpline::new`]; the error
    /// path mirrors curve construction.
    pub fn push_point(&mut self, point: Point) -> Result<()> {
        self.control_points.push(point);
        let n = self.control_points.len();
        let elem = self.order + 1;
        if n == elem || (n > elem && (n - 1) % self.order == 0) {
            let tail = self.control_points[n - elem..].to_vec();
            self.curves
                .push(BezierCurve::with_control_points(tail, self.samples)?);
        }
        Ok(())
    }

    /// Indices of the curves containing control point `idx`: one curve, or
    /// two for a joint shared by neighbouring curves.
    #[must_use]
    pub fn affected_curves(&self, idx: usize) -> (Option<usize>, Option<usize>) {
        let first = if idx == 0 { 0 } else { (idx - 1) / self.order };
        let second = (idx != 0 && idx % self.order == 0).then_some(first + 1);

        let live = |k: usize| (k < self.curves.len()).then_some(k);
        (live(first), second.and_then(live))
    }

    /// Moves control point `idx` by `delta` and resamples the affected curves.
    /// Returns `false` when `idx` is out of range.
    pub fn move_point(&mut self, idx: usize, delta: Vector) -> bool {
        let Some(point) = self.control_points.get_mut(idx) else {
            return false;
        };
        *point += delta;

        let (first, second) = self.affected_curves(idx);
        for k in first.into_iter().chain(second) {
            debug!(idx, curve = k, "refreshing spline curve");
            self.refresh(k);
        }
        true
    }

    /// Straightens every joint by projecting it onto the line through its
    /// two neighbours, then resamples all curves.
    pub fn smooth_joints(&mut self) {
        let n = self.control_points.len();
        let mut i = self.order;
        while i + 1 < n {
            let cp = &mut self.control_points;
            cp[i] = project(cp[i], cp[i - 1], cp[i + 1]);
            i += self.order;
        }
        for k in 0..self.curves.len() {
            self.refresh(k);
        }
    }

    /// Removes every control point and curve.
    pub fn clear(&mut self) {
        self.control_points.clear();
        self.curves.clear();
    }

    /// Draws the control polygon over all points, then every curve.
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        color_points: Color,
        color_lines: Color,
        color_curve: Color,
    ) {
        for pair in self.control_points.windows(2) {
            renderer.draw_dotted_segment(pair[0], pair[1], 20.0, 3.0, color_lines);
        }
        for &p in &self.control_points {
            renderer.draw_point(p, color_points, 7.0);
        }
        for curve in &self.curves {
            curve.draw_curve(renderer, color_curve);
        }
    }

    fn refresh(&mut self, k: usize) {
        let Some(points) = self.chunk(k).map(<[Point]>::to_vec) else {
            return;
        };
        if let Some(curve) = self.curves.get_mut(k) {
            curve.set_control_points(points);
        }
    }
}
