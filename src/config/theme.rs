use serde::{Deserialize, Serialize};

use crate::core::Rgba;

/// Fill colors used by a layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Content area fill.
    pub background: Rgba,
    /// Bar strip fill behind the tabs.
    pub tab_background: Rgba,
    /// Inactive tab fill.
    pub tab_fill: Rgba,
    pub tab_border: Rgba,
    /// Active tab fill.
    pub highlight: Rgba,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::classic()
    }
}

impl ColorScheme {
    /// Primary-color scheme; the out-of-the-box look.
    pub fn classic() -> Self {
        Self {
            background: Rgba::new(1.0, 1.0, 1.0, 1.0),
            tab_background: Rgba::new(1.0, 0.0, 0.0, 1.0),
            tab_fill: Rgba::new(0.0, 1.0, 0.0, 1.0),
            tab_border: Rgba::new(0.0, 0.0, 1.0, 1.0),
            highlight: Rgba::new(0.1, 1.0, 0.1, 1.0),
        }
    }

    /// Dark grey bar with grey tabs and a green highlight.
    pub fn slate() -> Self {
        Self {
            background: Rgba::new(0.2, 0.2, 0.2, 1.0),
            tab_background: Rgba::new(0.2, 0.2, 0.2, 1.0),
            tab_fill: Rgba::new(0.5, 0.5, 0.5, 1.0),
            tab_border: Rgba::new(0.1, 0.1, 0.1, 1.0),
            highlight: Rgba::new(0.2, 1.0, 0.3, 1.0),
        }
    }
}

/// Named color presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SchemeChoice {
    #[default]
    Classic,
    Slate,
}

impl SchemeChoice {
    pub fn resolve(&self) -> ColorScheme {
        match self {
            SchemeChoice::Classic => ColorScheme::classic(),
            SchemeChoice::Slate => ColorScheme::slate(),
        }
    }
}
