use crate::core::Rgba;

/// Stable identity of a tab across layout passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub u64);

/// Horizontal text alignment of a tab label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
    Justify,
    #[default]
    Auto,
}

/// Vertical text alignment of a tab label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVAlign {
    #[default]
    Bottom,
    Middle,
    Center,
    Top,
}

/// Label text and its style.
#[derive(Debug, Clone, PartialEq)]
pub struct TabStyle {
    pub text: String,
    pub font_size: f32,
    /// Also colors the chevron when the tab is cut by the bar edge.
    pub text_color: Rgba,
    pub bold: bool,
    pub underline: bool,
    pub halign: TextHAlign,
    pub valign: TextVAlign,
    /// Text box bounds; `None` lets the label size itself.
    pub text_size: (Option<f32>, Option<f32>),
}

impl Default for TabStyle {
    fn default() -> Self {
        Self {
            text: "Tab".to_string(),
            font_size: 5.0,
            text_color: Rgba::WHITE,
            bold: false,
            underline: false,
            halign: TextHAlign::Auto,
            valign: TextVAlign::Bottom,
            text_size: (None, None),
        }
    }
}

impl TabStyle {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// A registered tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: TabId,
    pub style: TabStyle,
}

impl Tab {
    pub fn new(id: TabId, style: TabStyle) -> Self {
        Self { id, style }
    }

    pub fn text(&self) -> &str {
        &self.style.text
    }
}

/// A child of the nav bar's container.
///
/// Only children that expose the tab capability are registered as tabs;
/// everything else the host adds is left alone.
pub trait NavChild {
    fn child_id(&self) -> TabId;

    /// The tab capability, when this child has one.
    fn tab_style(&self) -> Option<&TabStyle>;
}

impl NavChild for Tab {
    fn child_id(&self) -> TabId {
        self.id
    }

    fn tab_style(&self) -> Option<&TabStyle> {
        Some(&self.style)
    }
}
