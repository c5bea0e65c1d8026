//! Drawing collaborator interface.
//!
//! The engine never talks to a window or GPU. Shapes and curves describe
//! themselves through the three primitives of [`Renderer`], which a host
//! implements on top of whatever immediate-mode backend it uses.

use crate::math::Point;

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from a packed `0xRRGGBBAA` value.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        let [r, g, b, a] = hex.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Returns the same color with alpha scaled by `alpha` in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fade(self, alpha: f32) -> Self {
        let a = (f32::from(self.a) * alpha.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Fully transparent; drawing with it is a no-op for most backends.
    pub const BLANK: Self = Self::rgba(0, 0, 0, 0);
    pub const RED: Self = Self::rgba(230, 41, 55, 255);
    pub const GREEN: Self = Self::rgba(0, 228, 48, 255);
    pub const YELLOW: Self = Self::rgba(253, 249, 0, 255);
    pub const ORANGE: Self = Self::rgba(255, 161, 0, 255);
    pub const PURPLE: Self = Self::rgba(200, 122, 255, 255);
    pub const GRAY: Self = Self::rgba(130, 130, 130, 255);
    pub const BACKGROUND: Self = Self::from_hex(0x1818_18ff);
}

/// Immediate-mode drawing backend consumed by the engine's draw routines.
pub trait Renderer {
    /// Draws a one-pixel line from `p1` to `p2`.
    fn draw_segment(&mut self, p1: Point, p2: Point, color: Color);

    /// Draws a filled disc.
    fn draw_point(&mut self, center: Point, color: Color, radius: f32);

    /// Draws a dashed line of the given thickness.
    ///
    /// [`crate::math::dash_2d::dashes`] computes the dash layout.
    fn draw_dotted_segment(
        &mut self,
        start: Point,
        end: Point,
        segment_len: f32,
        thickness: f32,
        color: Color,
    );
}
