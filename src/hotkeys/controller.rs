//! Hotkey configuration - named bindings and the reload notification.
//!
//! Physical-key resolution happens in the host's input layer; this
//! controller only carries the configured `(action name, category,
//! arguments)` triples and tells windows when the set changed so they can
//! rebuild their action registries.

use std::cell::RefCell;

use crate::signal::Signal;

/// Which component a hotkey is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyCategory {
    /// Window-level actions (tab navigation, zoom, popups, ...).
    Window,
    /// Actions handled inside a split.
    Split,
    /// Actions handled by the split's input box.
    SplitInput,
}

/// One configured binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    /// Symbolic action name the binding resolves to.
    pub name: String,
    /// Routing category.
    pub category: HotkeyCategory,
    /// Ordered arguments passed to the handler on every press.
    pub arguments: Vec<String>,
}

impl Hotkey {
    pub fn new(
        name: impl Into<String>,
        category: HotkeyCategory,
        arguments: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            arguments,
        }
    }
}

/// Holds the configured hotkeys and notifies on reload.
pub struct HotkeyController {
    hotkeys: RefCell<Vec<Hotkey>>,
    /// Emitted after the hotkey set is replaced; windows rebuild their
    /// registries in response.
    pub items_updated: Signal<()>,
}

impl HotkeyController {
    pub fn new() -> Self {
        Self {
            hotkeys: RefCell::new(Vec::new()),
            items_updated: Signal::new(),
        }
    }

    /// Replace the whole configuration and notify subscribers.
    pub fn set_hotkeys(&self, hotkeys: Vec<Hotkey>) {
        *self.hotkeys.borrow_mut() = hotkeys;
        self.items_updated.emit(&());
    }

    /// Bindings routed to `category`.
    pub fn hotkeys_for_category(&self, category: HotkeyCategory) -> Vec<Hotkey> {
        self.hotkeys
            .borrow()
            .iter()
            .filter(|h| h.category == category)
            .cloned()
            .collect()
    }

    pub fn hotkey_count(&self) -> usize {
        self.hotkeys.borrow().len()
    }
}

impl Default for HotkeyController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_category_filter() {
        let controller = HotkeyController::new();
        controller.set_hotkeys(vec![
            Hotkey::new("openTab", HotkeyCategory::Window, vec!["next".into()]),
            Hotkey::new("sendMessage", HotkeyCategory::SplitInput, vec![]),
            Hotkey::new("zoom", HotkeyCategory::Window, vec!["in".into()]),
        ]);

        let window_keys = controller.hotkeys_for_category(HotkeyCategory::Window);
        assert_eq!(window_keys.len(), 2);
        assert_eq!(window_keys[0].name, "openTab");
        assert_eq!(window_keys[0].arguments, vec!["next".to_string()]);
    }

    #[test]
    fn test_reload_emits_items_updated() {
        let controller = HotkeyController::new();
        let reloads = Rc::new(RefCell::new(0u32));

        let r = reloads.clone();
        controller
            .items_updated
            .connect(move |_| *r.borrow_mut() += 1);

        controller.set_hotkeys(vec![]);
        controller.set_hotkeys(vec![Hotkey::new("quit", HotkeyCategory::Window, vec![])]);

        assert_eq!(*reloads.borrow(), 2);
        assert_eq!(controller.hotkey_count(), 1);
    }
}
