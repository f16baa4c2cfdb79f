//! Notebook - the ordered tab container a window presents its pages in.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::split::SplitContainer;

/// Orientation of the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabDirection {
    Horizontal,
    Vertical,
}

/// Content hosted by one tab.
///
/// Pages are a closed set of kinds; operations that only make sense on a
/// split container are reachable only through the `Splits` arm, so callers
/// match instead of downcasting.
pub enum Page {
    /// A grid of chat splits - the kind every window action creates.
    Splits(SplitContainer),
}

impl Page {
    pub fn as_splits(&self) -> Option<&SplitContainer> {
        match self {
            Page::Splits(container) => Some(container),
        }
    }

    pub fn as_splits_mut(&mut self) -> Option<&mut SplitContainer> {
        match self {
            Page::Splits(container) => Some(container),
        }
    }
}

/// One tab strip entry.
struct TabEntry {
    page: Rc<RefCell<Page>>,
    /// Whether the entry is shown in the tab strip.
    visible: bool,
}

/// Ordered tab container.
///
/// Tab identity is positional: indices shift when siblings are inserted,
/// removed, or rearranged. After every operation the selected index is
/// `None` iff the notebook is empty, and otherwise within `[0, count)`.
pub struct Notebook {
    items: Vec<TabEntry>,
    selected: Option<usize>,
    tab_direction: TabDirection,
    show_tabs: bool,
}

impl Notebook {
    /// Create an empty notebook with a horizontal tab strip.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            tab_direction: TabDirection::Horizontal,
            show_tabs: true,
        }
    }

    pub fn page_count(&self) -> usize {
        self.items.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_page(&self) -> Option<Rc<RefCell<Page>>> {
        self.selected.map(|i| self.items[i].page.clone())
    }

    /// Selected page, creating a first tab if the notebook is empty.
    pub fn get_or_add_selected_page(&mut self) -> Rc<RefCell<Page>> {
        match self.selected_page() {
            Some(page) => page,
            None => self.add_page(true),
        }
    }

    /// Append a new splits page, optionally selecting it.
    pub fn add_page(&mut self, select: bool) -> Rc<RefCell<Page>> {
        let page = Rc::new(RefCell::new(Page::Splits(SplitContainer::new())));
        self.items.push(TabEntry {
            page: page.clone(),
            visible: true,
        });
        if select || self.selected.is_none() {
            self.selected = Some(self.items.len() - 1);
        }
        page
    }

    /// Remove the selected tab; its page is dropped with it.
    pub fn remove_current_page(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        self.items.remove(index);

        self.selected = if self.items.is_empty() {
            None
        } else {
            // Keep the position, pulled back if the tail was removed
            Some(index.min(self.items.len() - 1))
        };
    }

    /// Select the tab at `index`. Out-of-range indices are rejected
    /// without feedback.
    pub fn select_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
        }
    }

    /// Select the next tab, wrapping past the end.
    pub fn select_next_tab(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some((index + 1) % self.items.len());
        }
    }

    /// Select the previous tab, wrapping past the start.
    pub fn select_previous_tab(&mut self) {
        if let Some(index) = self.selected {
            let count = self.items.len();
            self.selected = Some((index + count - 1) % count);
        }
    }

    /// Select the highest-index tab.
    pub fn select_last_tab(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(self.items.len() - 1);
        }
    }

    /// Select the tab hosting `page`, matched by pointer identity.
    pub fn select_page(&mut self, page: &Rc<RefCell<Page>>) {
        if let Some(index) = self.items.iter().position(|e| Rc::ptr_eq(&e.page, page)) {
            self.selected = Some(index);
        }
    }

    /// Reposition the selected tab to `to`. The caller validates bounds;
    /// out-of-range targets and an empty notebook are rejected.
    pub fn rearrange_selected_page(&mut self, to: usize) {
        let Some(from) = self.selected else {
            return;
        };
        if to >= self.items.len() {
            return;
        }
        let entry = self.items.remove(from);
        self.items.insert(to, entry);
        self.selected = Some(to);
    }

    pub fn tab_direction(&self) -> TabDirection {
        self.tab_direction
    }

    /// Reorient the tab strip. Idempotent; safe to apply redundantly.
    pub fn set_tab_direction(&mut self, direction: TabDirection) {
        self.tab_direction = direction;
    }

    pub fn show_tabs(&self) -> bool {
        self.show_tabs
    }

    /// Show or hide the whole tab strip.
    pub fn set_show_tabs(&mut self, show: bool) {
        self.show_tabs = show;
    }

    /// Show or hide one tab strip entry.
    pub fn set_tab_visible(&mut self, index: usize, visible: bool) {
        if let Some(entry) = self.items.get_mut(index) {
            entry.visible = visible;
        }
    }

    pub fn tab_visible(&self, index: usize) -> bool {
        self.items.get(index).map(|e| e.visible).unwrap_or(false)
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook_with(count: usize) -> Notebook {
        let mut notebook = Notebook::new();
        for _ in 0..count {
            notebook.add_page(false);
        }
        notebook
    }

    #[test]
    fn test_empty_notebook_has_no_selection() {
        let mut notebook = Notebook::new();
        assert_eq!(notebook.selected_index(), None);
        notebook.select_next_tab();
        notebook.select_last_tab();
        assert_eq!(notebook.selected_index(), None);
    }

    #[test]
    fn test_first_page_selected_implicitly() {
        let mut notebook = Notebook::new();
        notebook.add_page(false);
        assert_eq!(notebook.selected_index(), Some(0));
    }

    #[test]
    fn test_next_previous_wrap() {
        let mut notebook = notebook_with(3);
        notebook.select_index(2);

        notebook.select_next_tab();
        assert_eq!(notebook.selected_index(), Some(0));

        notebook.select_previous_tab();
        assert_eq!(notebook.selected_index(), Some(2));
    }

    #[test]
    fn test_select_index_rejects_out_of_range() {
        let mut notebook = notebook_with(3);
        notebook.select_index(1);
        notebook.select_index(3);
        notebook.select_index(usize::MAX);
        assert_eq!(notebook.selected_index(), Some(1));
    }

    #[test]
    fn test_select_last() {
        let mut notebook = notebook_with(4);
        notebook.select_index(0);
        notebook.select_last_tab();
        assert_eq!(notebook.selected_index(), Some(3));
    }

    #[test]
    fn test_remove_tail_pulls_selection_back() {
        let mut notebook = notebook_with(3);
        notebook.select_index(2);
        notebook.remove_current_page();
        assert_eq!(notebook.page_count(), 2);
        assert_eq!(notebook.selected_index(), Some(1));
    }

    #[test]
    fn test_remove_last_page_clears_selection() {
        let mut notebook = notebook_with(1);
        notebook.remove_current_page();
        assert_eq!(notebook.page_count(), 0);
        assert_eq!(notebook.selected_index(), None);
    }

    #[test]
    fn test_rearrange_moves_selected_entry() {
        let mut notebook = notebook_with(3);
        notebook.select_index(0);
        let page = notebook.selected_page().unwrap();

        notebook.rearrange_selected_page(2);

        assert_eq!(notebook.selected_index(), Some(2));
        assert!(Rc::ptr_eq(&notebook.selected_page().unwrap(), &page));
    }

    #[test]
    fn test_rearrange_rejects_out_of_range() {
        let mut notebook = notebook_with(3);
        notebook.select_index(1);
        notebook.rearrange_selected_page(3);
        assert_eq!(notebook.selected_index(), Some(1));
    }

    #[test]
    fn test_select_page_by_identity() {
        let mut notebook = Notebook::new();
        let first = notebook.add_page(true);
        notebook.add_page(true);
        assert_eq!(notebook.selected_index(), Some(1));

        notebook.select_page(&first);
        assert_eq!(notebook.selected_index(), Some(0));
    }

    #[test]
    fn test_get_or_add_creates_first_tab() {
        let mut notebook = Notebook::new();
        let page = notebook.get_or_add_selected_page();
        assert_eq!(notebook.page_count(), 1);
        assert!(page.borrow().as_splits().is_some());
        // A second call returns the same page
        assert!(Rc::ptr_eq(&notebook.get_or_add_selected_page(), &page));
    }

    #[test]
    fn test_tab_strip_flags() {
        let mut notebook = notebook_with(2);
        assert!(notebook.show_tabs());
        notebook.set_show_tabs(false);
        assert!(!notebook.show_tabs());

        assert!(notebook.tab_visible(0));
        notebook.set_tab_visible(0, false);
        assert!(!notebook.tab_visible(0));
    }
}
