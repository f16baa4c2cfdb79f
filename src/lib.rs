//! chatdeck - tab and split window management core for a desktop chat client.
//!
//! This crate is the logic behind a chat client's main window: a registry of
//! named, hotkey-bound actions over a tabbed notebook of chat splits,
//! plus the navigation state those actions mutate.
//!
//! # Features
//!
//! - **Action Registry**: Symbolic action names mapped to argument-taking
//!   handlers, rebuilt whenever the hotkey configuration reloads
//! - **Tab Navigation**: Absolute, relative, and symbolic tab selection,
//!   and tab repositioning with explicit-index validation
//! - **Reopen Stack**: LIFO record of closed splits, restored onto their
//!   original tab when it still exists
//! - **Mode Toggles**: Tri-state streamer mode and two-state tab visibility
//!   driven by one shared command vocabulary
//! - **UI Scale**: Stepped zoom against a clamped settings value
//! - **Reactive Chrome**: Window title, user label, and tab orientation
//!   follow account and settings changes
//!
//! # Architecture
//!
//! ```text
//! Window (composition root)
//! ├── ActionRegistry (hotkeys::registry)  - name -> handler dispatch
//! ├── Notebook (wm::notebook)             - ordered tabs of Pages
//! │   └── SplitContainer (wm::split)      - splits within one tab
//! ├── ClosedSplits (wm::closed)           - reopen stack
//! └── collaborators, injected:
//!     Settings, AccountController, HotkeyController, WindowHost
//! ```
//!
//! Everything is single-threaded and synchronous: handlers, navigation, and
//! change notifications all run to completion on the one UI thread, and no
//! operation is reentrant-safe. State is shared through `Rc`/`RefCell`,
//! mirroring that model.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use chatdeck::{
//!     AccountController, HotkeyController, Settings, Split, SplitContainer,
//!     Window, WindowDeps, WindowHost, WindowType,
//! };
//!
//! struct Host;
//! impl WindowHost for Host {
//!     fn show_settings_dialog(&mut self) {}
//!     fn show_quick_switcher(&mut self) {}
//!     fn force_layout_channel_views(&mut self) {}
//!     fn popup_split(&mut self, _split: &Split) {}
//!     fn popup_window(&mut self, _page: &SplitContainer) {}
//!     fn quit(&mut self) {}
//! }
//!
//! let window = Window::new(
//!     WindowType::Main,
//!     WindowDeps {
//!         settings: Rc::new(Settings::new(|| false)),
//!         accounts: Rc::new(AccountController::new()),
//!         hotkeys: Rc::new(HotkeyController::new()),
//!         host: Rc::new(RefCell::new(Host)),
//!     },
//! );
//!
//! // A keypress upstream resolved to "openTab" with argument "next":
//! if let Err(message) = window.run_action("openTab", &["next".to_string()]) {
//!     eprintln!("{message}");
//! }
//! ```

pub mod accounts;
pub mod hotkeys;
pub mod settings;
pub mod signal;
pub mod window;
pub mod wm;

pub use accounts::{Account, AccountController};
pub use hotkeys::{ActionRegistry, ActionResult, Hotkey, HotkeyCategory, HotkeyController};
pub use settings::{Settings, SettingsError, StreamerModeSetting};
pub use signal::Signal;
pub use window::{Window, WindowDeps, WindowHost, WindowType, VERSION};
pub use wm::{
    ClosedSplitRecord, ClosedSplits, FilterSet, Notebook, Page, Split, SplitContainer,
    TabDirection,
};
