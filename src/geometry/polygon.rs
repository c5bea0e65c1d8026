use crate::math::point_2d::{distance, rotate_point};
use crate::math::{Point, Vector};
use crate::render::{Color, Renderer};

/// Radius of vertex markers drawn by [`Polygon::draw`].
const VERTEX_RADIUS: f32 = 5.0;

/// Radius of the centre marker drawn by [`Polygon::draw_center`].
const CENTER_RADIUS: f32 = 7.0;

/// A closed polygon: an ordered vertex list where the last vertex connects
/// back to the first.
///
/// The centre is the plain vertex average, not the area centroid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon from an initial vertex list.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            vertices: points.into_iter().collect(),
        }
    }

    /// Appends a vertex.
    pub fn add_point(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Returns vertex `idx`, or the origin when `idx` is out of range.
    #[must_use]
    pub fn point(&self, idx: usize) -> Point {
        self.vertices.get(idx).copied().unwrap_or_else(Point::origin)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Mutable vertex access. The vertex count cannot change through it.
    pub fn vertices_mut(&mut self) -> &mut [Point] {
        &mut self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sum of all edge lengths including the closing edge. Zero for fewer
    /// than two vertices.
    #[must_use]
    pub fn perimeter(&self) -> f32 {
        if self.vertices.len() <= 1 {
            return 0.0;
        }
        self.edges().map(|(a, b)| distance(a, b)).sum()
    }

    /// Iterates edges `(v[i], v[i+1])`, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Arithmetic mean of the vertices. An empty polygon reports the origin.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self) -> Point {
        if self.vertices.is_empty() {
            return Point::origin();
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector::zeros(), |acc, p| acc + p.coords);
        Point::from(sum / self.vertices.len() as f32)
    }

    /// Moves the polygon so that [`Polygon::center`] becomes `new_center`.
    pub fn set_center(&mut self, new_center: Point) {
        let shift = new_center - self.center();
        self.shift(shift);
    }

    /// Translates every vertex by `delta`.
    pub fn shift(&mut self, delta: Vector) {
        for p in &mut self.vertices {
            *p += delta;
        }
    }

    /// Rotates every vertex by `angle` radians about [`Polygon::center`].
    pub fn rotate(&mut self, angle: f32) {
        let center = self.center();
        self.rotate_about(angle, center);
    }

    /// Rotates every vertex by `angle` radians about `center`.
    pub fn rotate_about(&mut self, angle: f32, center: Point) {
        for p in &mut self.vertices {
            *p = rotate_point(*p, angle, center);
        }
    }

    /// Draws the outline and a marker on every vertex.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, line: Color, point: Color) {
        for (a, b) in self.edges() {
            renderer.draw_segment(a, b, line);
        }
        for &v in &self.vertices {
            renderer.draw_point(v, point, VERTEX_RADIUS);
        }
    }

    /// Draws a marker at the vertex average.
    pub fn draw_center<R: Renderer + ?Sized>(&self, renderer: &mut R, color: Color) {
        renderer.draw_point(self.center(), color, CENTER_RADIUS);
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
