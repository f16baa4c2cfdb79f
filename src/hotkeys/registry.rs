//! Action registry - named, argument-taking handlers bound to hotkeys.

use std::collections::HashMap;

use tracing::warn;

/// What a handler invocation produced: `Ok(())` for success, `Err` carrying
/// a user-facing message. Handlers never panic across this boundary and
/// never mutate state before their argument validation has passed.
pub type ActionResult = Result<(), String>;

/// A registered handler. Takes the ordered argument list the hotkey was
/// configured with.
pub type ActionHandler = Box<dyn FnMut(&[String]) -> ActionResult>;

/// Maps symbolic action names to handlers.
///
/// The registry holds no domain state of its own; handlers capture `Rc`
/// clones of whatever window state they mutate. The full set is rebuilt
/// (clear-then-re-add) whenever the hotkey configuration reloads, so no
/// handler outlives the configuration it was registered under.
pub struct ActionRegistry {
    actions: HashMap<String, ActionHandler>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register `handler` under `name`, replacing any previous handler.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl FnMut(&[String]) -> ActionResult + 'static,
    ) {
        self.actions.insert(name.into(), Box::new(handler));
    }

    /// Invoke the handler registered under `name`.
    ///
    /// Keypress-to-name resolution happens upstream, so `name` is expected
    /// to be registered; a miss is reported rather than panicking.
    pub fn dispatch(&mut self, name: &str, args: &[String]) -> ActionResult {
        match self.actions.get_mut(name) {
            Some(handler) => handler(args),
            None => {
                warn!("Dispatch of unregistered action: {}", name);
                Err(format!("Unknown action: {name}"))
            }
        }
    }

    /// Drop every registration. Used on hotkey configuration reload.
    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_invokes_handler_with_args() {
        let mut registry = ActionRegistry::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = seen.clone();
        registry.register("record", move |args| {
            s.borrow_mut().extend(args.iter().cloned());
            Ok(())
        });

        let args = vec!["one".to_string(), "two".to_string()];
        assert_eq!(registry.dispatch("record", &args), Ok(()));
        assert_eq!(*seen.borrow(), args);
    }

    #[test]
    fn test_handler_error_is_returned() {
        let mut registry = ActionRegistry::new();
        registry.register("fail", |_| Err("it broke".to_string()));
        assert_eq!(registry.dispatch("fail", &[]), Err("it broke".to_string()));
    }

    #[test]
    fn test_dispatch_unknown_name() {
        let mut registry = ActionRegistry::new();
        let result = registry.dispatch("nope", &[]);
        assert!(result.unwrap_err().contains("nope"));
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut registry = ActionRegistry::new();
        registry.register("a", |_| Ok(()));
        registry.register("b", |_| Ok(()));
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains("a"));
    }

    #[test]
    fn test_reregister_replaces_handler() {
        let mut registry = ActionRegistry::new();
        registry.register("x", |_| Err("old".to_string()));
        registry.register("x", |_| Err("new".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.dispatch("x", &[]), Err("new".to_string()));
    }

    #[test]
    fn test_handlers_may_hold_mutable_state() {
        let mut registry = ActionRegistry::new();
        let mut calls = 0u32;
        registry.register("count", move |_| {
            calls += 1;
            Err(calls.to_string())
        });
        assert_eq!(registry.dispatch("count", &[]), Err("1".to_string()));
        assert_eq!(registry.dispatch("count", &[]), Err("2".to_string()));
    }
}
