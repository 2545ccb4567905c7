//! Classifies a tab against the bar's horizontal bounds.

/// How much of a tab lies inside the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Full,
    /// Cut by the bar's left edge.
    HalfLeft,
    /// Cut by the bar's right edge.
    HalfRight,
    Hidden,
}

impl Visibility {
    pub fn is_half(self) -> bool {
        matches!(self, Visibility::HalfLeft | Visibility::HalfRight)
    }
}

/// Classifies the span `[tab_x, tab_x + tab_width]` against
/// `[bar_x, bar_x + bar_width]`.
///
/// A tab wider than the bar straddles both edges; the left edge wins.
/// Non-finite input is hidden.
pub fn classify(tab_x: f32, tab_width: f32, bar_x: f32, bar_width: f32) -> Visibility {
    if !(tab_x.is_finite() && tab_width.is_finite() && bar_x.is_finite() && bar_width.is_finite()) {
        return Visibility::Hidden;
    }

    let tab_right = tab_x + tab_width;
    let bar_right = bar_x + bar_width;

    let straddles_left = tab_x < bar_x && tab_right > bar_x;
    let straddles_right = tab_right > bar_right && tab_x < bar_right;

    if straddles_left {
        Visibility::HalfLeft
    } else if straddles_right {
        Visibility::HalfRight
    } else if tab_x >= bar_x && tab_right <= bar_right {
        Visibility::Full
    } else {
        Visibility::Hidden
    }
}
