//! Application settings shared with the window core.
//!
//! This module provides:
//! - The setting values the window's actions read and write (tab direction,
//!   UI scale, streamer mode, similar-message hiding)
//! - A change [`Signal`] per mutable setting, emitted synchronously on set
//! - The UI-scale clamp policy (the window only submits proposed values)
//! - TOML persistence to a caller-supplied path
//!
//! # Streamer mode
//!
//! The persisted value is one of three states: disabled, enabled, or
//! auto-detect. The *effective* boolean is resolved at read time by
//! [`Settings::is_in_streamer_mode`]; in the auto-detect state it defers to
//! a detector callback injected at construction (the host typically probes
//! for a running capture tool there). The "toggle" command handled by the
//! window flips the effective boolean and persists only disabled or enabled;
//! it is an instruction, not a state, and never reaches storage.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::signal::Signal;
use crate::wm::TabDirection;

/// Smallest UI scale the settings accept.
pub const UI_SCALE_MIN: f32 = 0.2;
/// Largest UI scale the settings accept.
pub const UI_SCALE_MAX: f32 = 10.0;

/// Persisted streamer-mode states.
///
/// `Toggle` deliberately has no variant here: it resolves to `Disabled` or
/// `Enabled` before anything is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StreamerModeSetting {
    /// Streamer mode is off.
    Disabled,
    /// Streamer mode is on.
    Enabled,
    /// Resolve at read time via the detector callback.
    AutoDetect,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write settings file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[source] toml::ser::Error),
}

/// On-disk shape of the settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct SettingsSnapshot {
    tab_direction: TabDirection,
    ui_scale: f32,
    streamer_mode: StreamerModeSetting,
    hide_similar: bool,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            tab_direction: TabDirection::Horizontal,
            ui_scale: 1.0,
            streamer_mode: StreamerModeSetting::AutoDetect,
            hide_similar: false,
        }
    }
}

/// Settings collaborator injected into windows at construction.
///
/// Values live in `Cell`s and are read/written on the one UI thread; each
/// setter stores the value and then emits the matching signal so subscribers
/// observe the post-write state.
pub struct Settings {
    tab_direction: Cell<TabDirection>,
    ui_scale: Cell<f32>,
    streamer_mode: Cell<StreamerModeSetting>,
    hide_similar: Cell<bool>,

    /// Emitted after `tab_direction` changes.
    pub tab_direction_changed: Signal<TabDirection>,
    /// Emitted after `ui_scale` changes.
    pub ui_scale_changed: Signal<f32>,
    /// Emitted after `streamer_mode` changes.
    pub streamer_mode_changed: Signal<StreamerModeSetting>,
    /// Emitted after `hide_similar` changes.
    pub hide_similar_changed: Signal<bool>,

    /// Resolves the effective streamer-mode boolean in the auto-detect state.
    streamer_detector: Box<dyn Fn() -> bool>,
}

impl Settings {
    /// Create settings with default values and the given auto-detect probe.
    pub fn new(streamer_detector: impl Fn() -> bool + 'static) -> Self {
        let snapshot = SettingsSnapshot::default();
        Self {
            tab_direction: Cell::new(snapshot.tab_direction),
            ui_scale: Cell::new(snapshot.ui_scale),
            streamer_mode: Cell::new(snapshot.streamer_mode),
            hide_similar: Cell::new(snapshot.hide_similar),
            tab_direction_changed: Signal::new(),
            ui_scale_changed: Signal::new(),
            streamer_mode_changed: Signal::new(),
            hide_similar_changed: Signal::new(),
            streamer_detector: Box::new(streamer_detector),
        }
    }

    /// Load settings from a TOML file, falling back to defaults on any error.
    ///
    /// A missing file is normal on first run; a malformed one is logged at
    /// warning level, both yield defaults.
    pub fn load(path: &Path, streamer_detector: impl Fn() -> bool + 'static) -> Self {
        let settings = Self::new(streamer_detector);
        match Self::read_snapshot(path) {
            Ok(Some(snapshot)) => settings.apply_snapshot(snapshot),
            Ok(None) => {}
            Err(e) => warn!("Ignoring settings file {}: {}", path.display(), e),
        }
        settings
    }

    fn read_snapshot(path: &Path) -> Result<Option<SettingsSnapshot>, SettingsError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(SettingsError::Read)?;
        let snapshot = toml::from_str(&content).map_err(SettingsError::Parse)?;
        Ok(Some(snapshot))
    }

    fn apply_snapshot(&self, snapshot: SettingsSnapshot) {
        self.tab_direction.set(snapshot.tab_direction);
        self.ui_scale
            .set(snapshot.ui_scale.clamp(UI_SCALE_MIN, UI_SCALE_MAX));
        self.streamer_mode.set(snapshot.streamer_mode);
        self.hide_similar.set(snapshot.hide_similar);
    }

    /// Save the current values as TOML.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let snapshot = SettingsSnapshot {
            tab_direction: self.tab_direction.get(),
            ui_scale: self.ui_scale.get(),
            streamer_mode: self.streamer_mode.get(),
            hide_similar: self.hide_similar.get(),
        };
        let content = toml::to_string_pretty(&snapshot).map_err(SettingsError::Serialize)?;
        fs::write(path, content).map_err(SettingsError::Write)
    }

    pub fn tab_direction(&self) -> TabDirection {
        self.tab_direction.get()
    }

    pub fn set_tab_direction(&self, direction: TabDirection) {
        self.tab_direction.set(direction);
        self.tab_direction_changed.emit(&direction);
    }

    /// Raw UI scale as stored.
    pub fn ui_scale(&self) -> f32 {
        self.ui_scale.get()
    }

    /// Set the UI scale without clamping (used by the zoom reset path).
    pub fn set_ui_scale(&self, scale: f32) {
        self.ui_scale.set(scale);
        self.ui_scale_changed.emit(&scale);
    }

    /// UI scale clamped to the accepted range.
    pub fn clamped_ui_scale(&self) -> f32 {
        self.ui_scale.get().clamp(UI_SCALE_MIN, UI_SCALE_MAX)
    }

    /// Clamp a proposed scale to the accepted range and store it.
    pub fn set_clamped_ui_scale(&self, scale: f32) {
        self.set_ui_scale(scale.clamp(UI_SCALE_MIN, UI_SCALE_MAX));
    }

    pub fn streamer_mode(&self) -> StreamerModeSetting {
        self.streamer_mode.get()
    }

    pub fn set_streamer_mode(&self, mode: StreamerModeSetting) {
        self.streamer_mode.set(mode);
        self.streamer_mode_changed.emit(&mode);
    }

    /// Effective streamer-mode boolean: the stored state, with auto-detect
    /// resolved through the injected detector.
    pub fn is_in_streamer_mode(&self) -> bool {
        match self.streamer_mode.get() {
            StreamerModeSetting::Disabled => false,
            StreamerModeSetting::Enabled => true,
            StreamerModeSetting::AutoDetect => (self.streamer_detector)(),
        }
    }

    pub fn hide_similar(&self) -> bool {
        self.hide_similar.get()
    }

    pub fn set_hide_similar(&self, hide: bool) {
        self.hide_similar.set(hide);
        self.hide_similar_changed.emit(&hide);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(|| false)
    }
}
