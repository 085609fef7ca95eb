//! Persistent user preferences for Harmoniq Studio.
//!
//! The preferences live in a single JSON document (`settings.json` under the
//! user asset root) but the values themselves are owned by many parts of the
//! application: the window, the rack view, the audio engine, the module
//! browser. Those owners are reached through the small accessor traits in
//! [`collaborators`], bundled per call in a [`SettingsBindings`].
//!
//! [`save`] snapshots every collaborator into a [`SettingsDocument`] and writes
//! it. [`load`] reads a document back and pushes each key it recognises to its
//! owner, leaving absent keys untouched. Neither call returns an error; both
//! report an outcome value that call sites are free to ignore.

pub mod collaborators;
mod document;
mod error;
mod store;

use std::path::PathBuf;

use harmoniq_asset::AssetRoots;

pub use collaborators::{
    AudioEngine, ModuleBrowser, PluginManager, Preferences, SettingsBindings, Vec2, Viewport,
    WindowGeometry, WireStyle,
};
pub use document::{apply_value, clamp_zoom, SettingsDocument, MAX_ZOOM, MIN_ZOOM};
pub use error::{ParseFailure, SettingsError};
pub use store::{load, save, LoadOutcome, SaveOutcome};

/// File name of the settings document inside the user root.
pub const SETTINGS_FILE: &str = "settings.json";

/// Default location of the settings document.
pub fn settings_path(roots: &AssetRoots) -> PathBuf {
    roots.user(SETTINGS_FILE)
}
