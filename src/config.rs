//! Construction parameters and host layout.

use crate::error::{ConfigError, Result};
use crate::geometry::ellipse::DEFAULT_STEPS;

/// Parameters controlling polygon animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    /// Units travelled per second for a moving speed of one.
    pub speed_scale: f32,
    /// Tessellation steps for ellipses created by hosts.
    pub ellipse_steps: u32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            speed_scale: 100.0,
            ellipse_steps: DEFAULT_STEPS,
        }
    }
}

/// Parameters controlling Bezier curve construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BezierParams {
    /// Number of sampled segments per curve.
    pub samples: usize,
    /// Highest order accepted from user input.
    pub max_order: usize,
}

impl Default for BezierParams {
    fn default() -> Self {
        Self {
            samples: 100,
            max_order: 10,
        }
    }
}

impl BezierParams {
    /// Checks that `order` lies in `1..=max_order`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] otherwise.
    pub fn validate_order(&self, order: usize) -> Result<usize> {
        if (1..=self.max_order).contains(&order) {
            Ok(order)
        } else {
            Err(ConfigError::InvalidParameter(format!(
                "bezier order {order} outside 1..={}",
                self.max_order
            ))
            .into())
        }
    }
}

/// Axis-aligned rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Geometry of the side panel hosting animation controls, derived from the
/// screen size at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub panel: Rect,
    pub row_height: f32,
    pub row_gap: f32,
}

impl PanelLayout {
    const PANEL_RIGHT_OFFSET: f32 = 400.0;
    const PANEL_WIDTH: f32 = 360.0;
    const PANEL_MARGIN: f32 = 40.0;

    /// Panel docked to the right edge of a `width × height` screen.
    #[must_use]
    pub fn for_screen(width: f32, height: f32) -> Self {
        Self {
            panel: Rect::new(
                width - Self::PANEL_RIGHT_OFFSET,
                Self::PANEL_MARGIN,
                Self::PANEL_WIDTH,
                height - 2.0 * Self::PANEL_MARGIN,
            ),
            row_height: 30.0,
            row_gap: 10.0,
        }
    }

    /// Rectangle of the `index`-th control row, occupying the right half of
    /// the panel.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn row(&self, index: usize) -> Rect {
        let half = self.panel.width / 2.0;
        Rect::new(
            self.panel.x + half,
            self.panel.y + index as f32 * (self.row_height + self.row_gap),
            half - self.row_gap,
            self.row_height,
        )
    }

    /// Number of rows that fit in the panel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn capacity(&self) -> usize {
        let pitch = self.row_height + self.row_gap;
        if pitch <= 0.0 || self.panel.height <= 0.0 {
            return 0;
        }
        ((self.panel.height + self.row_gap) / pitch).floor() as usize
    }
}
