//! Account collaborator - current user tracking with change notification.

use std::cell::RefCell;

use crate::signal::Signal;

/// The user a window is currently displaying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    /// Not logged in.
    Anonymous,
    /// Logged in under the given user name.
    Named(String),
}

impl Account {
    pub fn is_anon(&self) -> bool {
        matches!(self, Account::Anonymous)
    }

    /// User name, if logged in.
    pub fn user_name(&self) -> Option<&str> {
        match self {
            Account::Anonymous => None,
            Account::Named(name) => Some(name),
        }
    }
}

/// Tracks the current account and notifies windows when it changes.
pub struct AccountController {
    current: RefCell<Account>,
    /// Emitted after the current account changes.
    pub current_user_changed: Signal<Account>,
}

impl AccountController {
    /// Start anonymous.
    pub fn new() -> Self {
        Self {
            current: RefCell::new(Account::Anonymous),
            current_user_changed: Signal::new(),
        }
    }

    pub fn current(&self) -> Account {
        self.current.borrow().clone()
    }

    pub fn set_current(&self, account: Account) {
        *self.current.borrow_mut() = account.clone();
        // Borrow released above; subscribers may read `current()` again.
        self.current_user_changed.emit(&account);
    }
}

impl Default for AccountController {
    fn default() -> Self {
        Self::new()
    }
}
