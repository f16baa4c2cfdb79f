//! Window content management - tabs, splits, and the reopen stack.
//!
//! This module provides the state the window's actions operate on:
//!
//! - **notebook**: Ordered tab container with selection and navigation
//! - **split**: Individual chat splits and the per-tab split container
//! - **closed**: LIFO record of removed splits, backing the reopen action
//!
//! # Module Hierarchy
//!
//! ```text
//! wm/
//! ├── mod.rs      - Module exports
//! ├── notebook.rs - Notebook (tab container) + Page kinds
//! ├── split.rs    - Split and SplitContainer
//! └── closed.rs   - ClosedSplits stack
//! ```

pub mod closed;
pub mod notebook;
pub mod split;

pub use closed::{ClosedSplitRecord, ClosedSplits};
pub use notebook::{Notebook, Page, TabDirection};
pub use split::{FilterSet, Split, SplitContainer};
