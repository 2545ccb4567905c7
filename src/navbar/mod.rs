//! The nav bar: tab registry, configuration and the dirty-flag layout pass.
//!
//! Every mutation marks the bar dirty. [`NavBar::update`] consumes the flag
//! and runs at most one pass, so several changes between two frames cost a
//! single layout. Hosts that need a pass regardless call [`NavBar::layout`].

mod pass;
pub mod registry;
pub mod tab;

pub use pass::{LayoutSnapshot, NullHost, TabHost, TabLabel, TabPlacement};
pub use registry::TabRegistry;
pub use tab::{NavChild, Tab, TabId, TabStyle, TextHAlign, TextVAlign};

use crate::config::{BarAlign, ColorScheme, NavBarConfig};
use crate::error::NavBarError;
use crate::layout::{ContainerMetrics, limit};
use crate::render::DrawSurface;

/// Clamps fractional options to `[0, 1]`.
fn sanitize(mut config: NavBarConfig) -> NavBarConfig {
    config.bar_height = limit(config.bar_height, 0.0, 1.0);
    config.tab_spacing = config.tab_spacing.map(|s| limit(s, 0.0, 1.0));
    config.tab_size_hint = (
        config.tab_size_hint.0.map(|w| limit(w, 0.0, 1.0)),
        config.tab_size_hint.1.map(|h| limit(h, 0.0, 1.0)),
    );
    config
}

pub struct NavBar {
    config: NavBarConfig,
    container: ContainerMetrics,
    registry: TabRegistry,
    dirty: bool,
    activated: bool,
    /// Set while an empty contained bar has already been reported.
    warned_empty: bool,
}

impl NavBar {
    pub fn new(config: NavBarConfig, container: ContainerMetrics) -> Self {
        Self {
            config: sanitize(config),
            container,
            registry: TabRegistry::new(),
            dirty: true,
            activated: false,
            warned_empty: false,
        }
    }

    pub fn config(&self) -> &NavBarConfig {
        &self.config
    }

    pub fn container(&self) -> &ContainerMetrics {
        &self.container
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Requests a layout pass on the next [`NavBar::update`].
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ── configuration ────────────────────────────────────────────────

    pub fn set_config(&mut self, config: NavBarConfig) {
        self.config = sanitize(config);
        self.dirty = true;
    }

    /// Edits the configuration in place; fractions are clamped afterwards.
    pub fn edit_config(&mut self, edit: impl FnOnce(&mut NavBarConfig)) {
        let mut config = self.config.clone();
        edit(&mut config);
        self.set_config(config);
    }

    pub fn set_bar_height(&mut self, fraction: f32) {
        self.edit_config(|c| c.bar_height = fraction);
    }

    pub fn set_tab_spacing(&mut self, fraction: Option<f32>) {
        self.edit_config(|c| c.tab_spacing = fraction);
    }

    pub fn set_tab_size_hint(&mut self, width: Option<f32>, height: Option<f32>) {
        self.edit_config(|c| c.tab_size_hint = (width, height));
    }

    /// Stores the shape by name; unknown names fail the next pass.
    pub fn set_tab_shape(&mut self, shape: impl Into<String>) {
        let shape = shape.into();
        self.edit_config(|c| c.tab_shape = shape);
    }

    pub fn set_extend_past_bounds(&mut self, extend: bool) {
        self.edit_config(|c| c.extend_past_bounds = extend);
    }

    pub fn set_orient_to_top(&mut self, top: bool) {
        self.edit_config(|c| c.orient_to_top = top);
    }

    pub fn set_valign(&mut self, valign: BarAlign) {
        self.edit_config(|c| c.valign = valign);
    }

    pub fn set_colors(&mut self, colors: ColorScheme) {
        self.edit_config(|c| c.colors = colors);
    }

    pub fn set_remove_incomplete_tabs(&mut self, remove: bool) {
        self.edit_config(|c| c.remove_incomplete_tabs = remove);
    }

    pub fn set_tab_font_size(&mut self, size: Option<f32>) {
        self.edit_config(|c| c.tab_font_size = size);
    }

    /// Moves or resizes the container.
    pub fn set_container(&mut self, container: ContainerMetrics) {
        if container != self.container {
            self.container = container;
            self.dirty = true;
        }
    }

    // ── tabs ─────────────────────────────────────────────────────────

    pub fn add_tab(&mut self, tab: Tab) -> bool {
        let added = self.registry.add(tab);
        self.dirty |= added;
        added
    }

    pub fn remove_tab(&mut self, id: TabId) -> Option<Tab> {
        let removed = self.registry.remove(id);
        self.dirty |= removed.is_some();
        removed
    }

    /// Re-scans the container's children after the host changed them.
    pub fn on_children_changed<'a>(&mut self, children: impl IntoIterator<Item = &'a dyn NavChild>) -> usize {
        let added = self.registry.discover(children);
        if added > 0 {
            self.activated = true;
        }
        self.dirty = true;
        added
    }

    /// Explicit navigation also counts as the first activation.
    pub fn switch_to(&mut self, id: TabId) -> bool {
        self.dirty = true;
        let found = self.registry.switch_to(id);
        self.activated |= found;
        found
    }

    pub fn next(&mut self) -> Option<usize> {
        let index = self.registry.next();
        self.dirty |= index.is_some();
        self.activated |= index.is_some();
        index
    }

    pub fn prev(&mut self) -> Option<usize> {
        let index = self.registry.prev();
        self.dirty |= index.is_some();
        self.activated |= index.is_some();
        index
    }

    pub fn current(&self) -> Result<&Tab, NavBarError> {
        self.registry.current()
    }

    /// Shows or hides a tab's content pane.
    pub fn enable(&mut self, id: TabId, enabled: bool) {
        self.registry.enable(id, enabled);
        self.dirty = true;
    }

    // ── layout ───────────────────────────────────────────────────────

    /// Runs a pass if anything changed since the last successful one.
    pub fn update(
        &mut self,
        surface: &mut dyn DrawSurface,
        host: &mut dyn TabHost,
    ) -> Result<Option<LayoutSnapshot>, NavBarError> {
        if !self.dirty {
            return Ok(None);
        }
        self.layout(surface, host).map(Some)
    }

    /// Runs a pass unconditionally. A failed pass leaves the bar dirty.
    pub fn layout(
        &mut self,
        surface: &mut dyn DrawSurface,
        host: &mut dyn TabHost,
    ) -> Result<LayoutSnapshot, NavBarError> {
        if !self.activated {
            if let Some(first) = self.registry.get(0) {
                let id = first.id;
                self.registry.switch_to(id);
                self.activated = true;
            }
        }

        let empty = self.registry.is_empty() && !self.config.extend_past_bounds;
        if empty && !self.warned_empty {
            log::warn!("contained nav bar has no tabs; sizing as a single tab");
        }
        self.warned_empty = empty;

        let snapshot = pass::run(&self.config, &self.container, &self.registry, surface, host)?;
        self.dirty = false;
        Ok(snapshot)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navbar_pass.rs"]
mod tests;
