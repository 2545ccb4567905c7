//! One layout pass: geometry, justification, overflow and drawing.

use crate::config::{BarAlign, NavBarConfig};
use crate::core::{Rect, Rgba, finite_or_warn};
use crate::error::NavBarError;
use crate::layout::{
    ContainerMetrics, Geometry, GeometryInput, Justification, RowMetrics, Visibility, overflow,
    resolve_geometry,
};
use crate::render::chevron::{self, ChevronDirection, ChevronStyle};
use crate::render::shapes::{self, Border, ShapeStyle, TabShape};
use crate::render::DrawSurface;

use super::registry::TabRegistry;
use super::tab::{TabId, TabStyle};

/// Where a label goes and what it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabLabel<'a> {
    /// Empty for half and hidden tabs.
    pub text: &'a str,
    pub rect: Rect,
    pub font_size: f32,
    pub style: &'a TabStyle,
}

/// Host-side collaborator for text labels and tab content panes.
pub trait TabHost {
    fn place_label(&mut self, id: TabId, label: &TabLabel<'_>);

    /// Positions a tab's content pane; only enabled tabs are visible.
    fn place_content(&mut self, id: TabId, rect: Rect, visible: bool);
}

/// Host that ignores labels and content.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl TabHost for NullHost {
    fn place_label(&mut self, _id: TabId, _label: &TabLabel<'_>) {}

    fn place_content(&mut self, _id: TabId, _rect: Rect, _visible: bool) {}
}

/// Outcome for one tab in a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabPlacement {
    pub id: TabId,
    pub index: usize,
    /// Full tab rect, possibly outside the bar.
    pub rect: Rect,
    pub visibility: Visibility,
    /// Rect actually drawn; `None` for hidden tabs.
    pub drawn: Option<Rect>,
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub geometry: Geometry,
    pub justification: Justification,
    pub active: Option<usize>,
    pub tabs: Vec<TabPlacement>,
}

impl LayoutSnapshot {
    pub fn count(&self, visibility: Visibility) -> usize {
        self.tabs.iter().filter(|t| t.visibility == visibility).count()
    }
}

fn tab_y(bar: &Rect, tab_height: f32, valign: BarAlign) -> f32 {
    let vertical_spacing = (bar.h - tab_height) / 2.0;
    match valign {
        BarAlign::Top => bar.y + 2.0 * vertical_spacing,
        BarAlign::Center => bar.y + vertical_spacing,
        BarAlign::Bottom => bar.y,
    }
}

fn shape_style(config: &NavBarConfig, shape: TabShape) -> ShapeStyle {
    let border = config.tab_border_enable.then(|| Border {
        thickness: finite_or_warn(config.tab_border_thickness, 0.0, "tab border thickness").max(0.0),
        color: config.colors.tab_border,
    });
    ShapeStyle {
        shape,
        radius: finite_or_warn(config.tab_radius, 0.0, "tab radius"),
        border,
    }
}

fn chevron_style(config: &NavBarConfig, color: Rgba) -> ChevronStyle {
    let (mx, my) = config.chevron_margin;
    ChevronStyle {
        margin: (
            finite_or_warn(mx, 0.0, "chevron margin x"),
            finite_or_warn(my, 0.0, "chevron margin y"),
        ),
        thickness: finite_or_warn(config.chevron_width, 0.0, "chevron width").max(0.0),
        color,
    }
}

/// Runs one pass against `surface` and `host`.
///
/// The shape name is resolved before anything is drawn, so an unsupported
/// shape fails the pass without emitting a single command.
pub(super) fn run(
    config: &NavBarConfig,
    container: &ContainerMetrics,
    registry: &TabRegistry,
    surface: &mut dyn DrawSurface,
    host: &mut dyn TabHost,
) -> Result<LayoutSnapshot, NavBarError> {
    let shape: TabShape = config.tab_shape.parse()?;
    let style = shape_style(config, shape);

    let tab_count = registry.len();
    let geometry = resolve_geometry(&GeometryInput {
        container: *container,
        bar_height: config.bar_height,
        tab_spacing: config.tab_spacing,
        tab_size_hint: config.tab_size_hint,
        extend_past_bounds: config.extend_past_bounds,
        orient_to_top: config.orient_to_top,
        tab_count,
    });

    surface.clear();
    let colors = &config.colors;
    surface.fill_rect(geometry.content.pos(), geometry.content.size(), colors.background);
    surface.fill_rect(geometry.bar.pos(), geometry.bar.size(), colors.tab_background);

    let active = registry.active_index();
    let row = RowMetrics::from_geometry(
        &geometry,
        tab_count,
        active.unwrap_or(0),
        config.extend_past_bounds,
    );
    let justification = row.justification();
    let tab_height = geometry.tab_height();
    let y = tab_y(&geometry.bar, tab_height, config.valign);

    let mut placements = Vec::with_capacity(tab_count);
    for (index, tab) in registry.tabs().iter().enumerate() {
        let rect = Rect::new(row.tab_x_with(index, justification), y, row.tab_width, tab_height);
        let mut visibility = overflow::classify(rect.x, rect.w, geometry.bar.x, geometry.bar.w);
        if config.remove_incomplete_tabs && visibility.is_half() {
            visibility = Visibility::Hidden;
        }
        log::trace!("tab {index} ({:?}) at x={:.1}: {visibility:?}", tab.id, rect.x);

        let fill = if Some(index) == active {
            colors.highlight
        } else {
            colors.tab_fill
        };
        let font_size = config.tab_font_size.unwrap_or(tab.style.font_size);

        let drawn = match visibility {
            Visibility::Full => {
                shapes::draw_tab_shape(surface, &rect, fill, &style);
                host.place_label(
                    tab.id,
                    &TabLabel {
                        text: &tab.style.text,
                        rect,
                        font_size,
                        style: &tab.style,
                    },
                );
                Some(rect)
            }
            Visibility::HalfLeft | Visibility::HalfRight => {
                let half_w = rect.w * 0.5;
                let (half_x, direction) = if visibility == Visibility::HalfLeft {
                    (rect.x + half_w, ChevronDirection::Left)
                } else {
                    (rect.x, ChevronDirection::Right)
                };
                let half = Rect::new(half_x, rect.y, half_w, rect.h);
                shapes::draw_tab_shape(surface, &half, fill, &style);
                host.place_label(
                    tab.id,
                    &TabLabel {
                        text: "",
                        rect: half,
                        font_size,
                        style: &tab.style,
                    },
                );
                let chevron = chevron_style(config, tab.style.text_color);
                chevron::draw_chevron(surface, &half, &chevron, direction);
                Some(half)
            }
            Visibility::Hidden => {
                host.place_label(
                    tab.id,
                    &TabLabel {
                        text: "",
                        rect,
                        font_size,
                        style: &tab.style,
                    },
                );
                None
            }
        };

        host.place_content(tab.id, geometry.content, registry.is_enabled(tab.id));
        placements.push(TabPlacement {
            id: tab.id,
            index,
            rect,
            visibility,
            drawn,
        });
    }

    let snapshot = LayoutSnapshot {
        geometry,
        justification,
        active,
        tabs: placements,
    };
    log::debug!(
        "layout pass: {tab_count} tab(s), {justification:?}, full={} half={} hidden={}",
        snapshot.count(Visibility::Full),
        snapshot.count(Visibility::HalfLeft) + snapshot.count(Visibility::HalfRight),
        snapshot.count(Visibility::Hidden),
    );
    Ok(snapshot)
}
