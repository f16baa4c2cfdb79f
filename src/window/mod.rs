//! Window shell - composition root for one chat window.
//!
//! A [`Window`] owns the tab notebook and the closed-split stack, builds the
//! action registry over them, and keeps two pieces of derived state in sync
//! with its collaborators:
//!
//! - The window title and user label follow the current account
//! - The tab strip orientation follows the `tab_direction` setting
//!   (main and popup windows only)
//!
//! All collaborators are injected at construction, so windows can be driven
//! entirely by fakes in tests. Everything runs synchronously on the one UI
//! thread.

mod actions;
#[cfg(debug_assertions)]
mod debug;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::accounts::{Account, AccountController};
use crate::hotkeys::{ActionRegistry, ActionResult, Hotkey, HotkeyController};
use crate::settings::Settings;
use crate::wm::{ClosedSplits, Notebook, Split, SplitContainer};

use actions::{register_window_actions, ActionContext};

/// Crate version shown in window titles.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Role of a window within the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// The primary window.
    Main,
    /// A secondary tabbed window.
    Popup,
    /// A bare popped-out split.
    Frameless,
}

/// Application surfaces the window delegates to but does not own.
///
/// Dialogs, popped-out widgets, and process shutdown live in the host; the
/// window only tells the host what the user asked for.
pub trait WindowHost {
    /// Open the settings dialog for this window.
    fn show_settings_dialog(&mut self);
    /// Open the quick switcher.
    fn show_quick_switcher(&mut self);
    /// Relayout all channel views after a display-affecting setting change.
    fn force_layout_channel_views(&mut self);
    /// Pop the given split out into its own frameless window.
    fn popup_split(&mut self, split: &Split);
    /// Pop the given page out into a new tabbed window.
    fn popup_window(&mut self, page: &SplitContainer);
    /// Shut the application down.
    fn quit(&mut self);
    /// Inject a fabricated message into the chat layer. Only the debug
    /// rotation actions call this; hosts may ignore it.
    fn add_fake_message(&mut self, message: &str) {
        let _ = message;
    }
}

/// Collaborators a window is built from.
pub struct WindowDeps {
    pub settings: Rc<Settings>,
    pub accounts: Rc<AccountController>,
    pub hotkeys: Rc<HotkeyController>,
    pub host: Rc<RefCell<dyn WindowHost>>,
}

/// Derived display strings, recomputed on account change.
struct Chrome {
    title: String,
    user_label: String,
}

fn chrome_for(account: &Account) -> Chrome {
    let mut title = format!("Chatdeck {VERSION}");
    match account.user_name() {
        Some(name) => {
            title.push_str(" - ");
            title.push_str(name);
            Chrome {
                title,
                user_label: name.to_string(),
            }
        }
        None => {
            title.push_str(" - not logged in");
            Chrome {
                title,
                user_label: "anonymous".to_string(),
            }
        }
    }
}

/// One chat window: tab container, closed-split stack, action registry.
pub struct Window {
    window_type: WindowType,
    actions: Rc<RefCell<ActionRegistry>>,
    notebook: Rc<RefCell<Notebook>>,
    closed_splits: Rc<RefCell<ClosedSplits>>,
    chrome: Rc<RefCell<Chrome>>,
    settings: Rc<Settings>,
    accounts: Rc<AccountController>,
    hotkeys: Rc<HotkeyController>,
}

impl Window {
    /// Build a window over the given collaborators, register its actions,
    /// and wire the reactive subscriptions.
    pub fn new(window_type: WindowType, deps: WindowDeps) -> Self {
        let notebook = Rc::new(RefCell::new(Notebook::new()));
        let closed_splits = Rc::new(RefCell::new(ClosedSplits::new()));
        let actions = Rc::new(RefCell::new(ActionRegistry::new()));
        let chrome = Rc::new(RefCell::new(chrome_for(&deps.accounts.current())));

        let ctx = ActionContext {
            notebook: notebook.clone(),
            closed_splits: closed_splits.clone(),
            settings: deps.settings.clone(),
            host: deps.host.clone(),
        };
        Self::register_all(&mut actions.borrow_mut(), &ctx);

        // Rebuild the registry from scratch whenever the hotkey
        // configuration reloads, so no handler holds a stale context.
        {
            let actions = actions.clone();
            let ctx = ctx.clone();
            deps.hotkeys.items_updated.connect(move |_| {
                debug!("Hotkey configuration reloaded, rebuilding window actions");
                let mut registry = actions.borrow_mut();
                registry.clear();
                Self::register_all(&mut registry, &ctx);
            });
        }

        // Title and user label follow the current account.
        {
            let chrome = chrome.clone();
            deps.accounts.current_user_changed.connect(move |account| {
                *chrome.borrow_mut() = chrome_for(account);
            });
        }

        // Tab strip orientation follows the setting for main and popup
        // windows; applying the current value is idempotent.
        if matches!(window_type, WindowType::Main | WindowType::Popup) {
            let nb = notebook.clone();
            deps.settings.tab_direction_changed.connect(move |direction| {
                nb.borrow_mut().set_tab_direction(*direction);
            });
            notebook
                .borrow_mut()
                .set_tab_direction(deps.settings.tab_direction());
        }

        Self {
            window_type,
            actions,
            notebook,
            closed_splits,
            chrome,
            settings: deps.settings,
            accounts: deps.accounts,
            hotkeys: deps.hotkeys,
        }
    }

    fn register_all(registry: &mut ActionRegistry, ctx: &ActionContext) {
        register_window_actions(registry, ctx);
        #[cfg(debug_assertions)]
        debug::register_debug_actions(registry, ctx);
    }

    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    /// Dispatch a named action with the given arguments.
    ///
    /// A non-empty error is the handler's user-facing message; the caller
    /// surfaces it as a transient warning. Handlers have already logged it.
    pub fn run_action(&self, name: &str, args: &[String]) -> ActionResult {
        self.actions.borrow_mut().dispatch(name, args)
    }

    /// Dispatch the action a resolved hotkey is bound to, with the argument
    /// list stored in its configuration.
    pub fn run_hotkey(&self, hotkey: &Hotkey) -> ActionResult {
        self.run_action(&hotkey.name, &hotkey.arguments)
    }

    /// Whether an action is currently registered.
    pub fn has_action(&self, name: &str) -> bool {
        self.actions.borrow().contains(name)
    }

    /// Current window title.
    pub fn title(&self) -> String {
        self.chrome.borrow().title.clone()
    }

    /// Short account label shown in the title bar.
    pub fn user_label(&self) -> String {
        self.chrome.borrow().user_label.clone()
    }

    pub fn notebook(&self) -> Rc<RefCell<Notebook>> {
        self.notebook.clone()
    }

    pub fn closed_splits(&self) -> Rc<RefCell<ClosedSplits>> {
        self.closed_splits.clone()
    }

    pub fn settings(&self) -> &Rc<Settings> {
        &self.settings
    }

    pub fn accounts(&self) -> &Rc<AccountController> {
        &self.accounts
    }

    pub fn hotkeys(&self) -> &Rc<HotkeyController> {
        &self.hotkeys
    }
}
