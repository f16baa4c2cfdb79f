//! Window action handlers.
//!
//! Each handler takes the ordered argument list its hotkey was configured
//! with and returns [`ActionResult`]: `Ok(())` on success, `Err` carrying
//! the user-facing message. Validation happens before any mutation, so a
//! failed handler has changed nothing. Usage errors are also logged at
//! warning level; benign boundary conditions (relative move past the strip
//! edge, reopen on an empty stack) are silent successes.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::hotkeys::{ActionRegistry, ActionResult};
use crate::settings::{Settings, StreamerModeSetting};
use crate::wm::{ClosedSplits, Notebook, Split};

use super::WindowHost;

/// Zoom step applied per `zoom in` / `zoom out`.
const ZOOM_STEP: f32 = 0.1;

/// State the window actions close over. Handlers hold `Rc` clones, so the
/// registry can be rebuilt without touching the state itself.
#[derive(Clone)]
pub(super) struct ActionContext {
    pub notebook: Rc<RefCell<Notebook>>,
    pub closed_splits: Rc<RefCell<ClosedSplits>>,
    pub settings: Rc<Settings>,
    pub host: Rc<RefCell<dyn WindowHost>>,
}

/// First argument of a one-argument action, or the "called without
/// arguments" usage error.
fn require_arg<'a>(args: &'a [String], action: &str, expected: &str) -> Result<&'a str, String> {
    match args.first() {
        Some(arg) => Ok(arg),
        None => {
            warn!(
                "{} shortcut called without arguments. Takes only one argument: {}",
                action, expected
            );
            Err(format!(
                "{action} shortcut called without arguments. Takes only one argument: {expected}"
            ))
        }
    }
}

/// The shared on/off/toggle command vocabulary.
///
/// `setStreamerMode` and `setTabVisibility` are the same algorithm; the
/// tri-state variant additionally accepts `auto`. No argument means toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToggleCommand {
    Off,
    On,
    Toggle,
    Auto,
}

impl ToggleCommand {
    fn parse(args: &[String], action: &str, allow_auto: bool) -> Result<Self, String> {
        let Some(arg) = args.first() else {
            return Ok(Self::Toggle);
        };
        match arg.as_str() {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            "toggle" => Ok(Self::Toggle),
            "auto" if allow_auto => Ok(Self::Auto),
            _ => {
                warn!("Invalid argument for {} hotkey: {}", action, arg);
                let valid = if allow_auto {
                    "\"on\", \"off\", \"toggle\" or \"auto\""
                } else {
                    "\"on\", \"off\" or \"toggle\""
                };
                Err(format!(
                    "Invalid argument for {action} hotkey: {arg}. Use {valid}."
                ))
            }
        }
    }
}

/// Register every window action. Called at construction and again, after a
/// `clear()`, whenever the hotkey configuration reloads.
pub(super) fn register_window_actions(registry: &mut ActionRegistry, ctx: &ActionContext) {
    // Open settings
    registry.register("openSettings", {
        let ctx = ctx.clone();
        move |_| {
            ctx.host.borrow_mut().show_settings_dialog();
            Ok(())
        }
    });

    // Create a new split on the current page
    registry.register("newSplit", {
        let ctx = ctx.clone();
        move |_| {
            let page = ctx.notebook.borrow_mut().get_or_add_selected_page();
            let mut page = page.borrow_mut();
            if let Some(container) = page.as_splits_mut() {
                container.append_new_split();
            }
            Ok(())
        }
    });

    // Select a tab: last, next, previous, or an absolute index
    registry.register("openTab", {
        let ctx = ctx.clone();
        move |args| {
            let target = require_arg(args, "openTab", "tab specifier")?;
            let mut notebook = ctx.notebook.borrow_mut();
            match target {
                "last" => notebook.select_last_tab(),
                "next" => notebook.select_next_tab(),
                "previous" => notebook.select_previous_tab(),
                _ => match target.parse::<i64>() {
                    Ok(index) => {
                        // Out-of-range (including negative) absolute targets
                        // are the container's reject path, not an error here.
                        if index >= 0 {
                            notebook.select_index(index as usize);
                        }
                    }
                    Err(_) => {
                        warn!("Invalid argument for openTab shortcut");
                        return Err(format!(
                            "Invalid argument for openTab shortcut: \"{target}\". \
                             Use \"last\", \"next\", \"previous\" or an integer."
                        ));
                    }
                },
            }
            Ok(())
        }
    });

    // Pop the selected split or the whole page out of the window
    registry.register("popup", {
        let ctx = ctx.clone();
        move |args| {
            if args.is_empty() {
                warn!("popup action called without arguments");
                return Err(
                    "popup action called without arguments. Takes only one: \
                     \"split\" or \"window\"."
                        .to_string(),
                );
            }
            match args[0].as_str() {
                "split" => {
                    if let Some(page) = ctx.notebook.borrow().selected_page() {
                        let page = page.borrow();
                        if let Some(split) =
                            page.as_splits().and_then(|c| c.selected_split())
                        {
                            ctx.host.borrow_mut().popup_split(split);
                        }
                    }
                }
                "window" => {
                    if let Some(page) = ctx.notebook.borrow().selected_page() {
                        let page = page.borrow();
                        if let Some(container) = page.as_splits() {
                            ctx.host.borrow_mut().popup_window(container);
                        }
                    }
                }
                _ => {
                    return Err("Invalid popup target. Use \"split\" or \"window\".".to_string());
                }
            }
            Ok(())
        }
    });

    // Adjust the UI scale
    registry.register("zoom", {
        let ctx = ctx.clone();
        move |args| {
            let direction = require_arg(args, "zoom", "\"in\", \"out\", or \"reset\"")?;
            let change = match direction {
                "reset" => {
                    ctx.settings.set_ui_scale(1.0);
                    return Ok(());
                }
                "in" => ZOOM_STEP,
                "out" => -ZOOM_STEP,
                _ => {
                    warn!("Invalid zoom direction, use \"in\", \"out\", or \"reset\"");
                    return Err(
                        "Invalid zoom direction, use \"in\", \"out\", or \"reset\"".to_string()
                    );
                }
            };
            // The settings own the clamp; this only proposes a value.
            ctx.settings
                .set_clamped_ui_scale(ctx.settings.clamped_ui_scale() + change);
            Ok(())
        }
    });

    registry.register("newTab", {
        let ctx = ctx.clone();
        move |_| {
            ctx.notebook.borrow_mut().add_page(true);
            Ok(())
        }
    });

    registry.register("removeTab", {
        let ctx = ctx.clone();
        move |_| {
            ctx.notebook.borrow_mut().remove_current_page();
            Ok(())
        }
    });

    // Restore the most recently closed split
    registry.register("reopenSplit", {
        let ctx = ctx.clone();
        move |_| {
            let Some(record) = ctx.closed_splits.borrow_mut().pop() else {
                return Ok(());
            };

            let mut notebook = ctx.notebook.borrow_mut();
            let page = record
                .tab
                .upgrade()
                .filter(|page| page.borrow().as_splits().is_some())
                .unwrap_or_else(|| notebook.get_or_add_selected_page());
            notebook.select_page(&page);

            let mut split = Split::new();
            split.set_channel(record.channel);
            split.set_filters(record.filters);
            if let Some(container) = page.borrow_mut().as_splits_mut() {
                container.append_split(split, true);
            }
            Ok(())
        }
    });

    // Hide messages similar to recent ones
    registry.register("toggleLocalR9K", {
        let ctx = ctx.clone();
        move |_| {
            ctx.settings.set_hide_similar(!ctx.settings.hide_similar());
            ctx.host.borrow_mut().force_layout_channel_views();
            Ok(())
        }
    });

    registry.register("openQuickSwitcher", {
        let ctx = ctx.clone();
        move |_| {
            ctx.host.borrow_mut().show_quick_switcher();
            Ok(())
        }
    });

    registry.register("quit", {
        let ctx = ctx.clone();
        move |_| {
            ctx.host.borrow_mut().quit();
            Ok(())
        }
    });

    // Reposition the selected tab
    registry.register("moveTab", {
        let ctx = ctx.clone();
        move |args| {
            let target = require_arg(
                args,
                "moveTab",
                "new index (number, \"next\" or \"previous\")",
            )?;
            debug!("moveTab target: {}", target);

            let mut notebook = ctx.notebook.borrow_mut();

            // Track whether the candidate was generated from a relative
            // direction or supplied as an explicit literal.
            let (candidate, generated): (i64, bool) = match target {
                "next" => match notebook.selected_index() {
                    Some(selected) => (selected as i64 + 1, true),
                    None => return Ok(()),
                },
                "previous" => match notebook.selected_index() {
                    Some(selected) => (selected as i64 - 1, true),
                    None => return Ok(()),
                },
                _ => match target.parse::<i64>() {
                    Ok(index) => (index, false),
                    Err(_) => {
                        warn!("Invalid argument for moveTab shortcut");
                        return Err(format!(
                            "Invalid argument for moveTab shortcut: {target}. \
                             Use \"next\" or \"previous\" or an integer."
                        ));
                    }
                },
            };

            if candidate < 0 || candidate >= notebook.page_count() as i64 {
                if generated {
                    // Normal at the strip edge, e.g. moving the last tab right
                    return Ok(());
                }
                warn!("Invalid index for moveTab shortcut: {}", candidate);
                return Err(format!("Invalid index for moveTab shortcut: {candidate}."));
            }

            notebook.rearrange_selected_page(candidate as usize);
            Ok(())
        }
    });

    // Streamer mode: tri-state toggle
    registry.register("setStreamerMode", {
        let ctx = ctx.clone();
        move |args| {
            let command = ToggleCommand::parse(args, "setStreamerMode", true)?;
            let mode = match command {
                ToggleCommand::Off => StreamerModeSetting::Disabled,
                ToggleCommand::On => StreamerModeSetting::Enabled,
                ToggleCommand::Auto => StreamerModeSetting::AutoDetect,
                // Toggle flips the effective state and persists a plain
                // on/off, never auto-detect.
                ToggleCommand::Toggle => {
                    if ctx.settings.is_in_streamer_mode() {
                        StreamerModeSetting::Disabled
                    } else {
                        StreamerModeSetting::Enabled
                    }
                }
            };
            ctx.settings.set_streamer_mode(mode);
            Ok(())
        }
    });

    // Tab strip visibility: two-state sibling of setStreamerMode
    registry.register("setTabVisibility", {
        let ctx = ctx.clone();
        move |args| {
            let command = ToggleCommand::parse(args, "setTabVisibility", false)?;
            let mut notebook = ctx.notebook.borrow_mut();
            let show = match command {
                ToggleCommand::Off => false,
                ToggleCommand::On => true,
                // parse() never yields Auto for the two-state variant
                ToggleCommand::Toggle | ToggleCommand::Auto => !notebook.show_tabs(),
            };
            notebook.set_show_tabs(show);
            Ok(())
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_command_defaults_to_toggle() {
        assert_eq!(
            ToggleCommand::parse(&[], "setStreamerMode", true),
            Ok(ToggleCommand::Toggle)
        );
    }

    #[test]
    fn test_toggle_command_keywords() {
        assert_eq!(
            ToggleCommand::parse(&args(&["off"]), "setStreamerMode", true),
            Ok(ToggleCommand::Off)
        );
        assert_eq!(
            ToggleCommand::parse(&args(&["on"]), "setStreamerMode", true),
            Ok(ToggleCommand::On)
        );
        assert_eq!(
            ToggleCommand::parse(&args(&["auto"]), "setStreamerMode", true),
            Ok(ToggleCommand::Auto)
        );
    }

    #[test]
    fn test_toggle_command_auto_needs_allowance() {
        let err = ToggleCommand::parse(&args(&["auto"]), "setTabVisibility", false).unwrap_err();
        assert!(err.contains("setTabVisibility"));
        assert!(err.contains("auto"));
    }

    #[test]
    fn test_toggle_command_error_names_action_and_literal() {
        let err = ToggleCommand::parse(&args(&["maybe"]), "setStreamerMode", true).unwrap_err();
        assert!(err.contains("setStreamerMode"));
        assert!(err.contains("maybe"));
        assert!(err.contains("\"toggle\""));
    }

    #[test]
    fn test_require_arg() {
        assert_eq!(
            require_arg(&args(&["next"]), "openTab", "tab specifier"),
            Ok("next")
        );
        let err = require_arg(&[], "openTab", "tab specifier").unwrap_err();
        assert!(err.starts_with("openTab"));
        assert!(err.contains("tab specifier"));
    }
}
