use rand::Rng;
use tracing::warn;

use crate::config::BezierParams;
use crate::error::{ConfigError, Result};
use crate::math::point_2d::random_point;
use crate::math::{float_eq, Point, Vector};
use crate::render::{Color, Renderer};

/// Dash length used for the control polygon.
const CONTROL_DASH_LEN: f32 = 20.0;
/// Line thickness used for the control polygon.
const CONTROL_DASH_THICKNESS: f32 = 3.0;
/// Radius of control point markers.
const CONTROL_POINT_RADIUS: f32 = 7.0;

/// Closed-form Bezier curve evaluator over `t ∈ [0, 1]`.
///
/// Orders one to three use their Bernstein blends directly. Higher orders
/// pre-multiply each control point by its binomial coefficient and evaluate
/// the sum with an incremental multiplier.
#[derive(Debug, Clone, PartialEq)]
pub enum BezierFn {
    Linear(Point, Point),
    Quadratic(Point, Point, Point),
    Cubic(Point, Point, Point, Point),
    General {
        order: i32,
        /// `C(order, i) * control_point[i]`.
        coefs: Vec<Vector>,
    },
}

/// Builds the evaluator for `control_points.len() - 1`-th order.
///
/// Returns `None` for fewer than two control points.
#[must_use]
pub fn bezier_fn(control_points: &[Point]) -> Option<BezierFn> {
    match *control_points {
        [] | [_] => None,
        [p1, p2] => Some(BezierFn::Linear(p1, p2)),
        [p1, p2, p3] => Some(BezierFn::Quadratic(p1, p2, p3)),
        [p1, p2, p3, p4] => Some(BezierFn::Cubic(p1, p2, p3, p4)),
        _ => BezierFn::general(control_points),
    }
}

impl BezierFn {
    /// Builds the binomial-coefficient evaluator regardless of order.
    ///
    /// Returns `None` for fewer than two control points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn general(control_points: &[Point]) -> Option<Self> {
        if control_points.len() < 2 {
            return None;
        }
        let order = i32::try_from(control_points.len() - 1).ok()?;

        // C(order, i) = C(order, i - 1) * (order - i + 1) / i
        let mut binomial = 1.0_f32;
        let coefs = control_points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i > 0 {
                    let i = i as f32;
                    binomial = binomial * (order as f32 - i + 1.0) / i;
                }
                p.coords * binomial
            })
            .collect();

        Some(Self::General { order, coefs })
    }

    /// Curve order (control point count minus one).
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn order(&self) -> usize {
        match self {
            Self::Linear(..) => 1,
            Self::Quadratic(..) => 2,
            Self::Cubic(..) => 3,
            Self::General { order, .. } => *order as usize,
        }
    }

    /// Evaluates the curve at `t`.
    ///
    /// `t` within [`crate::math::TOLERANCE`] of 0 or 1 returns the first or
    /// last control point exactly.
    #[must_use]
    pub fn evaluate(&self, t: f32) -> Point {
        let s = 1.0 - t;
        match self {
            Self::Linear(p1, p2) => Point::from(p1.coords * s + p2.coords * t),
            Self::Quadratic(p1, p2, p3) => Point::from(
                p1.coords * s * s + p2.coords * 2.0 * t * s + p3.coords * t * t,
            ),
            Self::Cubic(p1, p2, p3, p4) => Point::from(
                p1.coords * s * s * s
                    + p2.coords * 3.0 * s * s * t
                    + p3.coords * 3.0 * s * t * t
                    + p4.coords * t * t * t,
            ),
            Self::General { order, coefs } => {
                let (Some(first), Some(last)) = (coefs.first(), coefs.last()) else {
                    return Point::origin();
                };
                // The recurrence divides by t or (1 - t); both ends bypass it.
                if float_eq(t, 0.0) {
                    return Point::from(*first);
                }
                if float_eq(t, 1.0) {
                    return Point::from(*last);
                }

                // Walk from the end whose starting power is larger so the
                // multiplier does not underflow near that end.
                let mut res = Vector::zeros();
                if t <= 0.5 {
                    let ratio = t / s;
                    let mut t_mul = s.powi(*order);
                    for coef in coefs {
                        res += coef * t_mul;
                        t_mul *= ratio;
                    }
                } else {
                    let ratio = s / t;
                    let mut t_mul = t.powi(*order);
                    for coef in coefs.iter().rev() {
                        res += coef * t_mul;
                        t_mul *= ratio;
                    }
                }
                Point::from(res)
            }
        }
    }
}

/// A Bezier curve with its regularly sampled polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    control_points: Vec<Point>,
    curve_points: Vec<Point>,
    samples: usize,
}

impl BezierCurve {
    /// Creates a curve without control points that samples `samples + 1`
    /// points once control points are set.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is zero.
    pub fn new(samples: usize) -> Result<Self> {
        if samples == 0 {
            return Err(
                ConfigError::InvalidParameter("bezier curve needs at least one sample".into())
                    .into(),
            );
        }
        Ok(Self {
            control_points: Vec::new(),
            curve_points: Vec::with_capacity(samples + 1),
            samples,
        })
    }

    /// Creates a curve and samples it immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is zero.
    pub fn with_control_points(control_points: Vec<Point>, samples: usize) -> Result<Self> {
        let mut curve = Self::new(samples)?;
        curve.set_control_points(control_points);
        Ok(curve)
    }

    /// Creates a curve of the given order with random control points spread
    /// across a `width × height` area.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` is outside `1..=params.max_order` or
    /// `params.samples` is zero.
    pub fn random<R: Rng>(
        rng: &mut R,
        order: usize,
        params: &BezierParams,
        width: i32,
        height: i32,
    ) -> Result<Self> {
        params.validate_order(order)?;
        let points = random_control_points(rng, order + 1, width, height);
        Self::with_control_points(points, params.samples)
    }

    #[must_use]
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Mutable access for in-place edits. Call [`BezierCurve::update`] afterwards.
    pub fn control_points_mut(&mut self) -> &mut Vec<Point> {
        &mut self.control_points
    }

    /// Replaces the control points and resamples.
    pub fn set_control_points(&mut self, control_points: Vec<Point>) {
        self.control_points = control_points;
        self.update();
    }

    /// Appends a control point and resamples.
    pub fn push_control_point(&mut self, point: Point) {
        self.control_points.push(point);
        self.update();
    }

    #[must_use]
    pub fn curve_points(&self) -> &[Point] {
        &self.curve_points
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Curve order, or zero without enough control points.
    #[must_use]
    pub fn order(&self) -> usize {
        self.control_points.len().saturating_sub(1)
    }

    /// Resamples the curve from the current control points.
    ///
    /// With fewer than two control points the sampled curve is cleared.
    #[allow(clippy::cast_precision_loss)]
    pub fn update(&mut self) {
        self.curve_points.clear();

        let Some(func) = bezier_fn(&self.control_points) else {
            warn!(
                control_points = self.control_points.len(),
                "not enough control points to build a bezier curve"
            );
            return;
        };

        let samples = self.samples as f32;
        self.curve_points
            .extend((0..=self.samples).map(|i| func.evaluate(i as f32 / samples)));
    }

    /// Draws the dashed control polygon and the control point markers.
    pub fn draw_control_points<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        color_points: Color,
        color_lines: Color,
    ) {
        for pair in self.control_points.windows(2) {
            renderer.draw_dotted_segment(
                pair[0],
                pair[1],
                CONTROL_DASH_LEN,
                CONTROL_DASH_THICKNESS,
                color_lines,
            );
        }
        for &p in &self.control_points {
            renderer.draw_point(p, color_points, CONTROL_POINT_RADIUS);
        }
    }

    /// Draws the sampled polyline.
    pub fn draw_curve<R: Renderer + ?Sized>(&self, renderer: &mut R, color: Color) {
        for pair in self.curve_points.windows(2) {
            renderer.draw_segment(pair[0], pair[1], color);
        }
    }
}

/// Random control points for a curve spanning a `width × height` area.
///
/// Point `i` is drawn from the `i`-th of `count` equal vertical strips so the
/// resulting control polygon runs left to right.
pub fn random_control_points<R: Rng>(
    rng: &mut R,
    count: usize,
    width: i32,
    height: i32,
) -> Vec<Point> {
    let Ok(n) = i32::try_from(count) else {
        return Vec::new();
    };
    if n == 0 {
        return Vec::new();
    }
    let strip = width / n;
    (0..n)
        .map(|i| random_point(rng, strip * i, strip * (i + 1), 0, height))
        .collect()
}
