use crate::error::{GeometryError, Result};
use crate::math::{Point, Vector};
use crate::render::{Color, Renderer};

use super::{Ellipse, Polygon};

/// A drawable, animatable shape.
///
/// Every shape exposes its outline as a [`Polygon`]; the variants differ in
/// how the centre is defined.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A free polygon whose centre is the vertex average.
    Polygon(Polygon),
    /// A tessellated ellipse whose centre is stored explicitly.
    Ellipse(Ellipse),
}

impl Shape {
    /// The vertex list of the shape.
    #[must_use]
    pub fn outline(&self) -> &Polygon {
        match self {
            Self::Polygon(p) => p,
            Self::Ellipse(e) => e.polygon(),
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        match self {
            Self::Polygon(p) => p.center(),
            Self::Ellipse(e) => e.center(),
        }
    }

    pub fn set_center(&mut self, new_center: Point) {
        match self {
            Self::Polygon(p) => p.set_center(new_center),
            Self::Ellipse(e) => e.set_center(new_center),
        }
    }

    pub fn shift(&mut self, delta: Vector) {
        match self {
            Self::Polygon(p) => p.shift(delta),
            Self::Ellipse(e) => e.shift(delta),
        }
    }

    /// Rotates about [`Shape::center`].
    pub fn rotate(&mut self, angle: f32) {
        match self {
            Self::Polygon(p) => p.rotate(angle),
            Self::Ellipse(e) => e.rotate(angle),
        }
    }

    #[must_use]
    pub fn perimeter(&self) -> f32 {
        self.outline().perimeter()
    }

    /// Vertex `idx`, or the origin when out of range.
    #[must_use]
    pub fn point(&self, idx: usize) -> Point {
        self.outline().point(idx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outline().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outline().is_empty()
    }

    /// Appends a vertex to a polygon.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::FixedTessellation`] for ellipses.
    pub fn add_point(&mut self, point: Point) -> Result<()> {
        match self {
            Self::Polygon(p) => {
                p.add_point(point);
                Ok(())
            }
            Self::Ellipse(_) => Err(GeometryError::FixedTessellation.into()),
        }
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, line: Color, point: Color) {
        match self {
            Self::Polygon(p) => {
                p.draw(renderer, line, point);
                p.draw_center(renderer, point);
            }
            Self::Ellipse(e) => e.draw(renderer, line, point),
        }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}
