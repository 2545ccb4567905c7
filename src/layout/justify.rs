//! Horizontal anchoring of the tab row.
//!
//! A row is left-justified while the active tab is still within the left half
//! of the bar (always, for contained rows), right-justified once the tail of
//! the row fits in the right half, and otherwise centered on the active tab.

use super::Geometry;

/// Horizontal anchor policy of a tab row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justification {
    Left,
    Right,
    CenterOnActive,
}

/// Pixel metrics of a tab row inside its bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    pub bar_x: f32,
    pub bar_width: f32,
    pub tab_width: f32,
    pub spacing: f32,
    pub tab_count: usize,
    pub active: usize,
    pub extend_past_bounds: bool,
}

impl RowMetrics {
    pub fn from_geometry(g: &Geometry, tab_count: usize, active: usize, extend_past_bounds: bool) -> Self {
        Self {
            bar_x: g.bar.x,
            bar_width: g.bar.w,
            tab_width: g.tab_width(),
            spacing: g.spacing(),
            tab_count,
            active,
            extend_past_bounds,
        }
    }

    pub fn element_width(&self) -> f32 {
        self.tab_width + self.spacing
    }

    /// Distance from the bar's left edge to the active tab.
    pub fn dist_from_left(&self) -> f32 {
        self.spacing + self.active as f32 * self.element_width()
    }

    /// Width the row occupies from the active tab to its end.
    pub fn dist_from_right(&self) -> f32 {
        self.tab_count.saturating_sub(self.active) as f32 * self.element_width()
    }

    /// Picks the anchor policy. Left wins whenever it applies, so the row
    /// never jumps while the active index walks right from 0.
    pub fn justification(&self) -> Justification {
        let half = 0.5 * self.bar_width;
        if self.dist_from_left() < half || !self.extend_past_bounds {
            Justification::Left
        } else if self.dist_from_right() < half {
            Justification::Right
        } else {
            Justification::CenterOnActive
        }
    }

    /// Absolute x of the tab at `index` under `justification`.
    pub fn tab_x_with(&self, index: usize, justification: Justification) -> f32 {
        let e = self.element_width();
        match justification {
            Justification::Left => self.bar_x + self.spacing + index as f32 * e,
            Justification::Right => {
                let from_end = self.tab_count as f32 - index as f32;
                (self.bar_x + self.bar_width) - from_end * e
            }
            Justification::CenterOnActive => {
                let active_x = self.bar_x + (self.bar_width - self.tab_width) / 2.0;
                let displacement = index as f32 - self.active as f32;
                active_x + displacement * e
            }
        }
    }

    /// Absolute x of the tab at `index` under the row's own policy.
    pub fn tab_x(&self, index: usize) -> f32 {
        self.tab_x_with(index, self.justification())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout_justify.rs"]
mod tests;
