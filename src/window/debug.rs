//! Debug-build actions that inject sample messages into the chat layer.
//!
//! Rotation state is an explicit field of [`SampleRotation`], owned by the
//! handler that advances it - never hidden function-local state.

use crate::hotkeys::ActionRegistry;

use super::actions::ActionContext;

/// Cycles through a fixed set of sample message lines.
struct SampleRotation {
    index: usize,
    samples: &'static [&'static str],
}

impl SampleRotation {
    fn new(samples: &'static [&'static str]) -> Self {
        Self { index: 0, samples }
    }

    fn next(&mut self) -> &'static str {
        let sample = self.samples[self.index % self.samples.len()];
        self.index += 1;
        sample
    }
}

const MISC_SAMPLES: &[&str] = &[
    "plain offline-chat message",
    "message from a moderator with a badge",
    "first-time chatter greeting",
];

const SYSTEM_SAMPLES: &[&str] = &[
    "subscription announcement",
    "gifted subscription announcement",
    "channel announcement from a moderator",
];

/// Register the sample-message rotation actions.
pub(super) fn register_debug_actions(registry: &mut ActionRegistry, ctx: &ActionContext) {
    registry.register("addMiscMessage", {
        let host = ctx.host.clone();
        let mut rotation = SampleRotation::new(MISC_SAMPLES);
        move |_| {
            host.borrow_mut().add_fake_message(rotation.next());
            Ok(())
        }
    });

    registry.register("addSystemMessage", {
        let host = ctx.host.clone();
        let mut rotation = SampleRotation::new(SYSTEM_SAMPLES);
        move |_| {
            host.borrow_mut().add_fake_message(rotation.next());
            Ok(())
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut rotation = SampleRotation::new(MISC_SAMPLES);
        let first = rotation.next();
        rotation.next();
        rotation.next();
        assert_eq!(rotation.next(), first);
    }
}
