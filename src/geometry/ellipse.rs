use std::f32::consts::{FRAC_PI_2, TAU};

use crate::config::AnimationParams;
use crate::error::{GeometryError, Result};
use crate::math::{Point, Vector};
use crate::render::{Color, Renderer};

use super::Polygon;

/// Default number of tessellation steps.
pub const DEFAULT_STEPS: u32 = 40;

/// An ellipse approximated by a fixed closed polygon.
///
/// The centre and radii are stored explicitly. [`Ellipse::center`] reports
/// the stored centre rather than the vertex average, which drifts because the
/// sampling is not exactly symmetric in floating point.
///
/// Vertex `i` for `i` in `0..=steps` sits at parameter
/// `t = π/2 + 2π·i/steps` on `(cx + a·sin t, cy + b·cos t)`, so vertex 0 is
/// `(cx + a, cy)` and the last vertex repeats the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    outline: Polygon,
    center: Point,
    a: f32,
    b: f32,
}

impl Ellipse {
    /// Tessellates an ellipse with horizontal radius `a` and vertical radius `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(center: Point, a: f32, b: f32, steps: u32) -> Result<Self> {
        if steps == 0 {
            return Err(
                GeometryError::Degenerate("ellipse needs at least one step".into()).into(),
            );
        }

        let outline = (0..=steps)
            .map(|i| {
                let t = FRAC_PI_2 + TAU * (i as f32 / steps as f32);
                Point::new(center.x + a * t.sin(), center.y + b * t.cos())
            })
            .collect();

        Ok(Self {
            outline,
            center,
            a,
            b,
        })
    }

    /// Tessellates with the step count from `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if `params.ellipse_steps` is zero.
    pub fn with_params(center: Point, a: f32, b: f32, params: &AnimationParams) -> Result<Self> {
        Self::new(center, a, b, params.ellipse_steps)
    }

    /// Returns the stored centre.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Horizontal radius.
    #[must_use]
    pub fn a(&self) -> f32 {
        self.a
    }

    /// Vertical radius.
    #[must_use]
    pub fn b(&self) -> f32 {
        self.b
    }

    /// The tessellated outline.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.outline
    }

    /// Moves the ellipse so its stored centre becomes `new_center`.
    pub fn set_center(&mut self, new_center: Point) {
        self.shift(new_center - self.center);
    }

    /// Translates the outline and the stored centre.
    pub fn shift(&mut self, delta: Vector) {
        self.outline.shift(delta);
        self.center += delta;
    }

    /// Rotates the outline about the stored centre.
    pub fn rotate(&mut self, angle: f32) {
        self.outline.rotate_about(angle, self.center);
    }

    /// Draws the outline plus markers for the stored centre and the vertex
    /// average, making their divergence visible.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, line: Color, point: Color) {
        let radius = self.a.min(self.b) / 15.0;
        renderer.draw_point(self.center, Color::GREEN, radius);
        renderer.draw_point(self.outline.center(), point, radius);
        self.outline.draw(renderer, line, Color::BLANK);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::point_2d::distance;

    #[test]
    fn first_vertex_anchor() {
        let e = Ellipse::new(Point::origin(), 200.0, 100.0, 40).unwrap();
        let p0 = e.polygon().point(0);
        // sin(π/2) = 1, cos(π/2) ≈ -4.4e-8 in f32.
        assert_abs_diff_eq!(p0.x, 200.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p0.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn vertex_count_and_closure() {
        let e = Ellipse::new(Point::new(5.0, 5.0), 20.0, 10.0, 40).unwrap();
        assert_eq!(e.polygon().len(), 41);
        let first = e.polygon().point(0);
        let last = e.polygon().point(40);
        assert!(distance(first, last) < 1e-3);
        // A quarter turn further: t = π, bottom of the ellipse in y-up terms.
        let q = e.polygon().point(10);
        assert_abs_diff_eq!(q.x, 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(q.y, -5.0, epsilon = 1e-4);
    }

    #[test]
    fn step_count_from_params() {
        let params = AnimationParams::default();
        let e = Ellipse::with_params(Point::origin(), 20.0, 10.0, &params).unwrap();
        assert_eq!(e, Ellipse::new(Point::origin(), 20.0, 10.0, DEFAULT_STEPS).unwrap());

        let coarse = AnimationParams {
            ellipse_steps: 8,
            ..params
        };
        let e = Ellipse::with_params(Point::origin(), 20.0, 10.0, &coarse).unwrap();
        assert_eq!(e.polygon().len(), 9);

        let broken = AnimationParams {
            ellipse_steps: 0,
            ..params
        };
        assert!(Ellipse::with_params(Point::origin(), 1.0, 1.0, &broken).is_err());
    }

    #[test]
    fn zero_steps_is_rejected() {
        assert!(Ellipse::new(Point::origin(), 1.0, 1.0, 0).is_err());
    }

    #[test]
    fn vertices_lie_on_ellipse() {
        let c = Point::new(-3.0, 8.0);
        let e = Ellipse::new(c, 6.0, 2.0, 17).unwrap();
        for v in e.polygon().vertices() {
            let u = (v.x - c.x) / 6.0;
            let w = (v.y - c.y) / 2.0;
            assert_abs_diff_eq!(u * u + w * w, 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn stored_center_survives_transforms() {
        let mut e = Ellipse::new(Point::new(100.0, 50.0), 30.0, 10.0, 7).unwrap();
        e.rotate(0.8);
        assert_eq!(e.center(), Point::new(100.0, 50.0));

        e.shift(Vector::new(1.0, 2.0));
        assert_eq!(e.center(), Point::new(101.0, 52.0));

        e.set_center(Point::new(-10.0, 0.0));
        assert_eq!(e.center(), Point::new(-10.0, 0.0));
    }

    #[test]
    fn stored_center_differs_from_vertex_average() {
        // Odd step count plus the duplicated closing vertex biases the mean.
        let e = Ellipse::new(Point::origin(), 200.0, 100.0, 7).unwrap();
        let avg = e.polygon().center();
        assert!(distance(avg, e.center()) > 1.0);
    }
}
