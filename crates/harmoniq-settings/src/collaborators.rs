//! Narrow accessors onto the application state the settings file mirrors.
//!
//! Each trait covers one owner of persisted state. The settings store only
//! ever reads through the getters on save and writes through the setters on
//! load; it never holds on to a collaborator past a single call.

use serde_json::Value;

/// Two-component float vector used for window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Plugin manager login state.
pub trait PluginManager {
    fn token(&self) -> String;
    fn set_token(&mut self, token: String);
}

/// The main window.
pub trait WindowGeometry {
    fn window_size(&self) -> Vec2;
    fn set_window_size(&mut self, size: Vec2);
    fn window_pos(&self) -> Vec2;
    fn set_window_pos(&mut self, pos: Vec2);
    /// Geometry is only persisted while this is false.
    fn is_maximized(&self) -> bool;
}

/// Cable rendering parameters from the rack toolbar.
pub trait WireStyle {
    fn wire_opacity(&self) -> f32;
    fn set_wire_opacity(&mut self, opacity: f32);
    fn wire_tension(&self) -> f32;
    fn set_wire_tension(&mut self, tension: f32);
}

/// Rack viewport zoom. Values handed to `set_zoom` are already clamped.
pub trait Viewport {
    fn zoom(&self) -> f32;
    fn set_zoom(&mut self, zoom: f32);
}

pub trait AudioEngine {
    fn sample_rate(&self) -> f32;
    fn set_sample_rate(&mut self, sample_rate: f32);
    fn power_meter(&self) -> bool;
    fn set_power_meter(&mut self, enabled: bool);
}

/// Module browser state, persisted as an opaque sub-document.
pub trait ModuleBrowser {
    fn to_json(&self) -> Value;
    fn load_json(&mut self, value: &Value);
}

/// Application-level preferences that have no richer owner.
pub trait Preferences {
    fn allow_cursor_lock(&self) -> bool;
    fn set_allow_cursor_lock(&mut self, allow: bool);
    fn last_path(&self) -> String;
    fn set_last_path(&mut self, path: String);
    fn check_version(&self) -> bool;
    fn set_check_version(&mut self, check: bool);
    fn skip_autosave_on_launch(&self) -> bool;
    fn set_skip_autosave_on_launch(&mut self, skip: bool);
}

/// Everything a save or load reaches into, borrowed for one call.
pub struct SettingsBindings<'a> {
    pub plugins: &'a mut dyn PluginManager,
    pub window: &'a mut dyn WindowGeometry,
    pub wires: &'a mut dyn WireStyle,
    pub viewport: &'a mut dyn Viewport,
    pub engine: &'a mut dyn AudioEngine,
    pub module_browser: &'a mut dyn ModuleBrowser,
    pub preferences: &'a mut dyn Preferences,
}
