//! Tab background shapes.
//!
//! A rounded rectangle is drawn as four corner circles plus five rectangles
//! (four edge strips and the inner fill) so it only needs `fill_rect` and
//! `fill_ellipse` from the surface.

use std::fmt;
use std::str::FromStr;

use crate::core::{Point, Rect, Rgba, Size};
use crate::error::NavBarError;

use super::DrawSurface;

/// Supported tab background shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabShape {
    Rectangle,
    RoundedRectangle,
}

impl TabShape {
    pub fn as_str(self) -> &'static str {
        match self {
            TabShape::Rectangle => "Rectangle",
            TabShape::RoundedRectangle => "RoundedRectangle",
        }
    }
}

impl FromStr for TabShape {
    type Err = NavBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rectangle" => Ok(TabShape::Rectangle),
            "RoundedRectangle" => Ok(TabShape::RoundedRectangle),
            other => Err(NavBarError::UnsupportedShape(other.to_string())),
        }
    }
}

impl fmt::Display for TabShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outline drawn around a tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub thickness: f32,
    pub color: Rgba,
}

/// Resolved look of a tab background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub shape: TabShape,
    pub radius: f32,
    pub border: Option<Border>,
}

/// Rectangles making up a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedParts {
    /// Bounding boxes of the corner circles: lower-left, lower-right,
    /// upper-right, upper-left.
    pub corners: [Rect; 4],
    /// Bottom, right, top and left edge strips, then the inner fill.
    pub fills: [Rect; 5],
    /// Radius actually used after clamping to the rect.
    pub radius: f32,
}

/// Radius limited to half the smaller side; never negative.
pub fn clamp_radius(rect: &Rect, radius: f32) -> f32 {
    let limit = (rect.w.min(rect.h) / 2.0).max(0.0);
    if radius.is_nan() {
        return 0.0;
    }
    radius.clamp(0.0, limit)
}

/// Decomposes `rect` into corner circles and fill rectangles.
pub fn rounded_parts(rect: &Rect, radius: f32) -> RoundedParts {
    let r = clamp_radius(rect, radius);
    let Rect { x, y, w, h } = *rect;
    let d = 2.0 * r;
    let inner_w = (w - d).max(0.0);
    let inner_h = (h - d).max(0.0);

    RoundedParts {
        corners: [
            Rect::new(x, y, d, d),
            Rect::new(x + w - d, y, d, d),
            Rect::new(x + w - d, y + h - d, d, d),
            Rect::new(x, y + h - d, d, d),
        ],
        fills: [
            Rect::new(x + r, y, inner_w, r),
            Rect::new(x + w - r, y + r, r, inner_h),
            Rect::new(x + r, y + h - r, inner_w, r),
            Rect::new(x, y + r, r, inner_h),
            Rect::new(x + r, y + r, inner_w, inner_h),
        ],
        radius: r,
    }
}

/// Fills a rounded rectangle through its decomposition.
pub fn fill_rounded_rect(surface: &mut dyn DrawSurface, rect: &Rect, radius: f32, color: Rgba) {
    let parts = rounded_parts(rect, radius);
    for corner in &parts.corners {
        surface.fill_ellipse(corner.pos(), corner.size(), color);
    }
    for fill in &parts.fills {
        surface.fill_rect(fill.pos(), fill.size(), color);
    }
}

fn non_negative(rect: Rect) -> Rect {
    Rect::new(rect.x, rect.y, rect.w.max(0.0), rect.h.max(0.0))
}

/// Draws one tab background with `fill`.
///
/// With a border the fill is inset by the border thickness and the outline is
/// stroked at the outer bounds.
pub fn draw_tab_shape(surface: &mut dyn DrawSurface, rect: &Rect, fill: Rgba, style: &ShapeStyle) {
    let fill_rect = match style.border {
        Some(border) => non_negative(rect.inset(border.thickness)),
        None => *rect,
    };

    match style.shape {
        TabShape::Rectangle => surface.fill_rect(fill_rect.pos(), fill_rect.size(), fill),
        TabShape::RoundedRectangle => fill_rounded_rect(surface, &fill_rect, style.radius, fill),
    }

    let Some(border) = style.border else {
        return;
    };
    let pos = Point::new(rect.x, rect.y);
    let size = Size::new(rect.w.max(0.0), rect.h.max(0.0));
    match style.shape {
        TabShape::Rectangle => surface.stroke_rect(pos, size, border.thickness, border.color),
        TabShape::RoundedRectangle => {
            let r = clamp_radius(rect, style.radius);
            surface.stroke_rounded_rect(pos, size, border.thickness, r, border.color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render_shapes.rs"]
mod tests;
