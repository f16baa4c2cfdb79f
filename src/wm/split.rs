//! Split - a single chat view, and the container that lays splits out in a tab.

use bitflags::bitflags;

bitflags! {
    /// Message filter predicates attached to a split.
    ///
    /// Opaque to the window core: the message layer interprets the bits, the
    /// window only carries them between a split and its closed-split record.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FilterSet: u8 {
        const SUBSCRIPTIONS = 0b0001;
        const MODERATION    = 0b0010;
        const HIGHLIGHTS    = 0b0100;
        const SYSTEM        = 0b1000;
    }
}

/// A single chat view bound to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    channel: String,
    filters: FilterSet,
}

impl Split {
    /// Create a split with no channel and no filters.
    pub fn new() -> Self {
        Self {
            channel: String::new(),
            filters: FilterSet::empty(),
        }
    }

    /// Bind the split to a channel by identity. Resolution of the identity
    /// to a live channel happens in the chat layer, not here.
    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.channel = channel.into();
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
    }

    pub fn filters(&self) -> FilterSet {
        self.filters
    }
}

impl Default for Split {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered splits shown together in one tab page.
pub struct SplitContainer {
    splits: Vec<Split>,
    /// Index of the selected split, `None` when empty.
    selected: Option<usize>,
}

impl SplitContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            splits: Vec::new(),
            selected: None,
        }
    }

    pub fn split_count(&self) -> usize {
        self.splits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    /// Append an existing split, optionally selecting it.
    pub fn append_split(&mut self, split: Split, select: bool) {
        self.splits.push(split);
        if select || self.selected.is_none() {
            self.selected = Some(self.splits.len() - 1);
        }
    }

    /// Append a fresh, unbound split and select it.
    pub fn append_new_split(&mut self) -> &mut Split {
        self.append_split(Split::new(), true);
        let index = self.splits.len() - 1;
        &mut self.splits[index]
    }

    pub fn selected_split(&self) -> Option<&Split> {
        self.selected.map(|i| &self.splits[i])
    }

    pub fn selected_split_mut(&mut self) -> Option<&mut Split> {
        self.selected.map(move |i| &mut self.splits[i])
    }

    pub fn splits(&self) -> &[Split] {
        &self.splits
    }
}

impl Default for SplitContainer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_selects_first_split() {
        let mut container = SplitContainer::new();
        assert!(container.selected_split().is_none());

        let mut split = Split::new();
        split.set_channel("pajlada");
        container.append_split(split, false);

        // First split becomes selected even without an explicit select
        assert_eq!(container.selected_split().unwrap().channel(), "pajlada");
    }

    #[test]
    fn test_append_with_select_moves_selection() {
        let mut container = SplitContainer::new();
        container.append_new_split().set_channel("a");

        let mut second = Split::new();
        second.set_channel("b");
        container.append_split(second, true);

        assert_eq!(container.split_count(), 2);
        assert_eq!(container.selected_split().unwrap().channel(), "b");
    }

    #[test]
    fn test_append_without_select_keeps_selection() {
        let mut container = SplitContainer::new();
        container.append_new_split().set_channel("a");

        let mut second = Split::new();
        second.set_channel("b");
        container.append_split(second, false);

        assert_eq!(container.selected_split().unwrap().channel(), "a");
    }

    #[test]
    fn test_split_carries_filters() {
        let mut split = Split::new();
        split.set_filters(FilterSet::HIGHLIGHTS | FilterSet::MODERATION);
        assert!(split.filters().contains(FilterSet::HIGHLIGHTS));
        assert!(!split.filters().contains(FilterSet::SYSTEM));
    }
}
