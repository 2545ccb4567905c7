//! Arrow drawn over a half tab to mark the cut edge.

use crate::core::{Point, Rect, Rgba};

use super::DrawSurface;

/// Which way the arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChevronDirection {
    /// More tabs lie beyond the bar's left edge.
    Left,
    /// More tabs lie beyond the bar's right edge.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChevronStyle {
    /// Horizontal and vertical gap between the tab rect and the arrow.
    pub margin: (f32, f32),
    /// Arm thickness, also used as the stroke width.
    pub thickness: f32,
    pub color: Rgba,
}

/// Seven-point outline of the arrow inside `rect`.
///
/// The left arrow has its apex at the left margin, mid height; the right
/// arrow mirrors every x about the rect's horizontal center.
pub fn chevron_points(rect: &Rect, margin: (f32, f32), thickness: f32, direction: ChevronDirection) -> [Point; 7] {
    let Rect { x, y, w, h } = *rect;
    let (mw, mh) = margin;
    let t = thickness;

    let xs = [
        x + mw,
        x + w - mw - t,
        x + w - mw,
        x + mw + t,
        x + w - mw,
        x + w - mw - t,
        x + mw,
    ];
    let mid = y + h / 2.0;
    let ys = [mid, y + h - mh, y + h - mh, mid, y + mh, y + mh, mid];

    let center_x = x + w / 2.0;
    let mirror = |vx: f32| match direction {
        ChevronDirection::Left => vx,
        ChevronDirection::Right => center_x - (vx - center_x),
    };

    std::array::from_fn(|i| Point::new(mirror(xs[i]), ys[i]))
}

pub fn draw_chevron(surface: &mut dyn DrawSurface, rect: &Rect, style: &ChevronStyle, direction: ChevronDirection) {
    let points = chevron_points(rect, style.margin, style.thickness, direction);
    surface.stroke_polyline(&points, style.thickness, style.color);
}
