//! Bar/content split and tab size hints.

use crate::core::{Point, Rect, Size, finite_or_warn};

use super::limit;

/// Spacing used when none is configured.
pub const DEFAULT_SPACING: f32 = 0.1;

/// Number of tabs that fit in the bar at once when tabs may extend past it.
pub const EXTENDED_VISIBLE_TABS: usize = 4;

/// Where the container sits and how much of its parent it claims.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerMetrics {
    pub parent_pos: Point,
    pub parent_size: Size,
    /// Container size as a fraction of the parent, per axis.
    pub size_hint: (f32, f32),
}

impl ContainerMetrics {
    /// A container filling a parent at the origin.
    pub fn full(width: f32, height: f32) -> Self {
        Self {
            parent_pos: Point::new(0.0, 0.0),
            parent_size: Size::new(width, height),
            size_hint: (1.0, 1.0),
        }
    }

    /// The container's own rectangle; non-finite inputs collapse to zero.
    pub fn rect(&self) -> Rect {
        let x = finite_or_warn(self.parent_pos.x, 0.0, "container x");
        let y = finite_or_warn(self.parent_pos.y, 0.0, "container y");
        let w = finite_or_warn(self.parent_size.w * self.size_hint.0, 0.0, "container width").max(0.0);
        let h = finite_or_warn(self.parent_size.h * self.size_hint.1, 0.0, "container height").max(0.0);
        Rect::new(x, y, w, h)
    }
}

/// Inputs of one geometry resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryInput {
    pub container: ContainerMetrics,
    pub bar_height: f32,
    pub tab_spacing: Option<f32>,
    pub tab_size_hint: (Option<f32>, Option<f32>),
    pub extend_past_bounds: bool,
    pub orient_to_top: bool,
    pub tab_count: usize,
}

/// Resolved geometry snapshot of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub bar: Rect,
    pub content: Rect,
    /// `(width, height)` of a tab as fractions of the bar.
    pub tab_size_hint: (f32, f32),
    /// Inter-tab gap as a fraction of bar width.
    pub tab_spacing_hint: f32,
}

impl Geometry {
    pub fn tab_width(&self) -> f32 {
        self.bar.w * self.tab_size_hint.0
    }

    pub fn tab_height(&self) -> f32 {
        self.bar.h * self.tab_size_hint.1
    }

    pub fn spacing(&self) -> f32 {
        self.bar.w * self.tab_spacing_hint
    }

    /// Width of one tab plus the gap that follows it.
    pub fn element_width(&self) -> f32 {
        self.tab_width() + self.spacing()
    }
}

/// Configured spacing, defaulted and clamped to `[0, 1]`.
pub fn resolve_spacing(spacing: Option<f32>) -> f32 {
    match spacing {
        None => DEFAULT_SPACING,
        Some(s) => limit(s, 0.0, 1.0),
    }
}

/// Splits the container into `(bar, content)`.
///
/// The bar takes `bar_height` of the container height, on top when
/// `orient_to_top` is set and at the bottom otherwise.
pub fn split_container(container: &ContainerMetrics, bar_height: f32, orient_to_top: bool) -> (Rect, Rect) {
    let c = container.rect();
    let bar_h = c.h * limit(bar_height, 0.0, 1.0);
    let content_h = c.h - bar_h;

    if orient_to_top {
        (
            Rect::new(c.x, c.y + content_h, c.w, bar_h),
            Rect::new(c.x, c.y, c.w, content_h),
        )
    } else {
        (
            Rect::new(c.x, c.y, c.w, bar_h),
            Rect::new(c.x, c.y + bar_h, c.w, content_h),
        )
    }
}

/// Resolves `(tab_width, tab_height, spacing)` hints.
///
/// Extended rows size tabs so `EXTENDED_VISIBLE_TABS` fit at once unless an
/// explicit width is given. Contained rows ignore any width hint and divide
/// the bar between `tab_count` tabs; zero tabs are sized as one.
///
/// The extended gap is `(1 - 4w) / 5`, so an explicit width above `0.25`
/// yields a negative gap: tabs overlap and a one-step change of the active
/// tab can move the row by more than one element width.
pub fn tab_size_hints(
    spacing: f32,
    hint: (Option<f32>, Option<f32>),
    extend_past_bounds: bool,
    tab_count: usize,
) -> (f32, f32, f32) {
    let height = hint.1.map_or(1.0, |h| limit(h, 0.0, 1.0));

    if extend_past_bounds {
        let visible = EXTENDED_VISIBLE_TABS as f32;
        let width = match hint.0 {
            Some(w) => limit(w, 0.0, 1.0),
            None => 1.0 / (visible * (1.0 + spacing) + spacing),
        };
        let gaps = (1.0 - visible * width) / (visible + 1.0);
        return (width, height, gaps);
    }

    let n = tab_count.max(1) as f32;
    let width = finite_or_warn(1.0 / (n * (1.0 + spacing) + spacing), 1.0, "tab width hint");
    let gaps = finite_or_warn((1.0 - n * width) / (n + 1.0), 0.0, "tab spacing hint");
    (width, height, gaps)
}

/// Runs the full geometry calculation for one pass.
pub fn resolve_geometry(input: &GeometryInput) -> Geometry {
    let (bar, content) = split_container(&input.container, input.bar_height, input.orient_to_top);
    let spacing = resolve_spacing(input.tab_spacing);
    let (w, h, gaps) = tab_size_hints(
        spacing,
        input.tab_size_hint,
        input.extend_past_bounds,
        input.tab_count,
    );

    Geometry {
        bar,
        content,
        tab_size_hint: (w, h),
        tab_spacing_hint: gaps,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout_geometry.rs"]
mod tests;
