//! Ordered tab list, active index and per-tab enable state.

use std::collections::HashMap;

use crate::error::NavBarError;

use super::tab::{NavChild, Tab, TabId};

/// Active index after removing `removed_index` from a list of `len_before`
/// tabs, or `None` when no tab remains or the index was invalid.
pub fn normalized_active_index_after_remove(
    active: usize,
    len_before: usize,
    removed_index: usize,
) -> Option<usize> {
    if len_before == 0 || removed_index >= len_before {
        return None;
    }

    let len_after = len_before - 1;
    if len_after == 0 {
        return None;
    }

    let next_active = if active > removed_index {
        active.saturating_sub(1)
    } else {
        active
    };

    Some(next_active.min(len_after - 1))
}

#[derive(Debug, Default, Clone)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: usize,
    /// Enable state keyed by id. Kept apart from `tabs` because switching to
    /// an unregistered tab still toggles that tab's state.
    enabled: HashMap<TabId, bool>,
    discovered: bool,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.position(id).is_some()
    }

    /// Active index; `None` while the registry is empty.
    pub fn active_index(&self) -> Option<usize> {
        (!self.tabs.is_empty()).then_some(self.active)
    }

    pub fn is_enabled(&self, id: TabId) -> bool {
        self.enabled.get(&id).copied().unwrap_or(false)
    }

    /// Sets whether a tab's content is shown. Works for any id.
    pub fn enable(&mut self, id: TabId, enabled: bool) {
        self.enabled.insert(id, enabled);
    }

    /// Appends a tab, initially disabled. Returns `false` if the id is taken.
    pub fn add(&mut self, tab: Tab) -> bool {
        if self.contains(tab.id) {
            return false;
        }
        self.enabled.insert(tab.id, false);
        self.tabs.push(tab);
        true
    }

    /// Removes a tab and keeps the active index on a surviving tab.
    pub fn remove(&mut self, id: TabId) -> Option<Tab> {
        let index = self.position(id)?;
        let was_active = index == self.active;
        let next = normalized_active_index_after_remove(self.active, self.tabs.len(), index);
        let tab = self.tabs.remove(index);
        self.enabled.remove(&id);
        self.active = next.unwrap_or(0);

        if was_active {
            if let Some(t) = self.tabs.get(self.active) {
                self.enabled.insert(t.id, true);
            }
        }
        Some(tab)
    }

    /// Registers every tab-capable child not yet known.
    ///
    /// Hosts hand children over in reverse declaration order, so the first
    /// discovery that finds tabs reverses them and enables the first one.
    /// Any discovery that adds tabs resets the active index to 0.
    /// Returns the number of tabs added.
    pub fn discover<'a>(&mut self, children: impl IntoIterator<Item = &'a dyn NavChild>) -> usize {
        let start = self.tabs.len();
        for child in children {
            let Some(style) = child.tab_style() else {
                continue;
            };
            let id = child.child_id();
            if self.contains(id) {
                continue;
            }
            self.enabled.insert(id, false);
            self.tabs.push(Tab::new(id, style.clone()));
        }

        let added = self.tabs.len() - start;
        if added == 0 {
            return 0;
        }

        if !self.discovered {
            self.discovered = true;
            self.tabs[start..].reverse();
        }

        if let Some(prev) = self.tabs.get(self.active) {
            let prev_id = prev.id;
            self.enabled.insert(prev_id, false);
        }
        self.active = 0;
        let first = self.tabs[0].id;
        self.enabled.insert(first, true);

        log::debug!("discovered {added} tab(s), {} registered", self.tabs.len());
        added
    }

    /// Makes `id` the active tab.
    ///
    /// The previously active tab is disabled and `id` enabled even when `id`
    /// is not registered; the active index only moves when it is.
    /// Returns whether `id` was found.
    pub fn switch_to(&mut self, id: TabId) -> bool {
        if let Some(old) = self.tabs.get(self.active) {
            let old_id = old.id;
            self.enabled.insert(old_id, false);
        }
        self.enabled.insert(id, true);

        match self.position(id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => {
                log::debug!("switch_to({id:?}): not registered, active index unchanged");
                false
            }
        }
    }

    /// Moves to the next tab, wrapping to the first. No-op when empty.
    pub fn next(&mut self) -> Option<usize> {
        let len = self.tabs.len();
        if len == 0 {
            return None;
        }
        let index = (self.active + 1) % len;
        self.switch_to(self.tabs[index].id);
        Some(index)
    }

    /// Moves to the previous tab, wrapping to the last. No-op when empty.
    pub fn prev(&mut self) -> Option<usize> {
        let len = self.tabs.len();
        if len == 0 {
            return None;
        }
        let index = (self.active + len - 1) % len;
        self.switch_to(self.tabs[index].id);
        Some(index)
    }

    /// The active tab.
    pub fn current(&self) -> Result<&Tab, NavBarError> {
        self.tabs.get(self.active).ok_or(NavBarError::OutOfRange {
            index: self.active,
            len: self.tabs.len(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navbar_registry.rs"]
mod tests;
