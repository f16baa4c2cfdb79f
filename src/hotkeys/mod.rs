//! Hotkey-driven action dispatch.
//!
//! Two halves, both owned by composition rather than ambient state:
//!
//! - **controller**: The configured `(name, category, arguments)` bindings
//!   plus the reload notification windows subscribe to
//! - **registry**: The per-window name → handler map actions dispatch
//!   through
//!
//! The flow: a keypress is resolved to a [`Hotkey`] upstream, the window
//! looks up its name in its [`ActionRegistry`], the handler validates the
//! bound arguments and either mutates window state or returns a user-facing
//! error string.

pub mod controller;
pub mod registry;

pub use controller::{Hotkey, HotkeyCategory, HotkeyController};
pub use registry::{ActionHandler, ActionRegistry, ActionResult};
