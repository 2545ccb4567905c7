use serde::{Deserialize, Serialize};

use super::ColorScheme;

/// Everything that shapes a nav bar's layout and look.
///
/// Fractions are relative to the container (bar height) or to the bar
/// (spacing, size hints). `None` in a hint means "derive it automatically".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavBarConfig {
    /// Share of the container height claimed by the bar.
    pub bar_height: f32,
    /// Gap between tabs as a fraction of bar width; `None` means 0.1.
    pub tab_spacing: Option<f32>,
    /// Explicit `(width, height)` tab fractions.
    pub tab_size_hint: (Option<f32>, Option<f32>),
    /// Shape name, resolved when a pass is rendered.
    pub tab_shape: String,
    pub tab_radius: f32,
    pub tab_border_thickness: f32,
    pub tab_border_enable: bool,
    /// Overrides every tab label's font size when set.
    pub tab_font_size: Option<f32>,
    pub orient_to_top: bool,
    pub extend_past_bounds: bool,
    /// Treat half-visible tabs as hidden instead of drawing a half tab.
    pub remove_incomplete_tabs: bool,
    pub valign: BarAlign,
    pub chevron_margin: (f32, f32),
    pub chevron_width: f32,
    pub colors: ColorScheme,
}

impl Default for NavBarConfig {
    fn default() -> Self {
        Self {
            bar_height: 0.1,
            tab_spacing: Some(0.1),
            tab_size_hint: (None, None),
            tab_shape: "Rectangle".to_string(),
            tab_radius: 5.0,
            tab_border_thickness: 5.0,
            tab_border_enable: false,
            tab_font_size: None,
            orient_to_top: true,
            extend_past_bounds: false,
            remove_incomplete_tabs: false,
            valign: BarAlign::Center,
            chevron_margin: (20.0, 10.0),
            chevron_width: 5.0,
            colors: ColorScheme::default(),
        }
    }
}

/// Vertical placement of tabs inside the bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BarAlign {
    Top,
    #[default]
    Center,
    Bottom,
}
