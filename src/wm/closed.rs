//! Closed-split records - a LIFO stack backing the reopen action.

use std::cell::RefCell;
use std::rc::Weak;

use super::notebook::Page;
use super::split::FilterSet;

/// What a split looked like when it was closed.
pub struct ClosedSplitRecord {
    /// The page the split lived on. May be stale: the tab can be removed
    /// after the record is pushed, so reopening upgrades and falls back.
    pub tab: Weak<RefCell<Page>>,
    /// Channel the split was bound to.
    pub channel: String,
    /// Filters the split carried.
    pub filters: FilterSet,
}

/// Stack of recently closed splits, most recent on top.
///
/// Owned by the window; the layer that removes a split pushes the record,
/// the reopen action pops it. Unbounded: nothing evicts old records.
pub struct ClosedSplits {
    stack: Vec<ClosedSplitRecord>,
}

impl ClosedSplits {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, record: ClosedSplitRecord) {
        self.stack.push(record);
    }

    /// Pop the most recently closed split, `None` when the stack is empty.
    pub fn pop(&mut self) -> Option<ClosedSplitRecord> {
        self.stack.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }
}

impl Default for ClosedSplits {
    fn default() -> Self {
        Self::new()
    }
}
