use serde::Serialize;
use serde_json::{Map, Value};

use crate::collaborators::{SettingsBindings, Vec2};
use crate::error::SettingsError;

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 4.0;

/// One snapshot of every persisted setting, in on-disk key order.
///
/// Built fresh for each save and thrown away once written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<[f32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_pos: Option<[f32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wire_opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wire_tension: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f32>,
    pub allow_cursor_lock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<f32>,
    pub last_path: String,
    #[serde(skip_serializing_if = "is_false")]
    pub skip_autosave_on_launch: bool,
    pub module_browser: Value,
    pub power_meter: bool,
    pub check_version: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// JSON has no NaN or infinity, so such values are left out of the document
/// and the collaborator keeps its current value on the next load.
fn finite(value: f32) -> Option<f32> {
    value.is_finite().then_some(value)
}

fn finite_pair(x: f32, y: f32) -> Option<[f32; 2]> {
    Some([finite(x)?, finite(y)?])
}

impl SettingsDocument {
    /// Query every collaborator for its current value.
    pub fn capture(bindings: &SettingsBindings<'_>) -> Self {
        let (window_size, window_pos) = if bindings.window.is_maximized() {
            (None, None)
        } else {
            let size = bindings.window.window_size();
            let pos = bindings.window.window_pos();
            (finite_pair(size.x, size.y), finite_pair(pos.x, pos.y))
        };

        Self {
            token: bindings.plugins.token(),
            window_size,
            window_pos,
            wire_opacity: finite(bindings.wires.wire_opacity()),
            wire_tension: finite(bindings.wires.wire_tension()),
            zoom: finite(bindings.viewport.zoom()),
            allow_cursor_lock: bindings.preferences.allow_cursor_lock(),
            sample_rate: finite(bindings.engine.sample_rate()),
            last_path: bindings.preferences.last_path(),
            skip_autosave_on_launch: bindings.preferences.skip_autosave_on_launch(),
            module_browser: bindings.module_browser.to_json(),
            power_meter: bindings.engine.power_meter(),
            check_version: bindings.preferences.check_version(),
        }
    }

    /// Render with two-space indentation. Floats are written with the
    /// shortest representation that reads back to the same `f32`.
    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Push every recognised key of `root` into its collaborator.
///
/// Keys are applied independently: a missing key leaves the current value
/// alone, an unknown key is ignored and a value of the wrong type is coerced
/// rather than rejected. Returns the number of keys applied.
pub fn apply_value(root: &Value, bindings: &mut SettingsBindings<'_>) -> usize {
    match root.as_object() {
        Some(object) => apply_object(object, bindings),
        None => 0,
    }
}

fn apply_object(root: &Map<String, Value>, bindings: &mut SettingsBindings<'_>) -> usize {
    let mut applied = 0;

    if let Some(value) = root.get("token") {
        bindings.plugins.set_token(coerce_string(value));
        applied += 1;
    }

    if let Some(size) = root.get("windowSize").and_then(coerce_pair) {
        bindings.window.set_window_size(size);
        applied += 1;
    }

    if let Some(pos) = root.get("windowPos").and_then(coerce_pair) {
        bindings.window.set_window_pos(pos);
        applied += 1;
    }

    if let Some(value) = root.get("wireOpacity") {
        bindings.wires.set_wire_opacity(coerce_f32(value));
        applied += 1;
    }

    if let Some(value) = root.get("wireTension") {
        bindings.wires.set_wire_tension(coerce_f32(value));
        applied += 1;
    }

    if let Some(value) = root.get("zoom") {
        bindings.viewport.set_zoom(clamp_zoom(coerce_f32(value)));
        applied += 1;
    }

    if let Some(value) = root.get("allowCursorLock") {
        bindings.preferences.set_allow_cursor_lock(coerce_bool(value));
        applied += 1;
    }

    if let Some(value) = root.get("sampleRate") {
        bindings.engine.set_sample_rate(coerce_f32(value));
        applied += 1;
    }

    if let Some(value) = root.get("lastPath") {
        bindings.preferences.set_last_path(coerce_string(value));
        applied += 1;
    }

    if let Some(value) = root.get("skipAutosaveOnLaunch") {
        bindings
            .preferences
            .set_skip_autosave_on_launch(coerce_bool(value));
        applied += 1;
    }

    if let Some(value) = root.get("moduleBrowser") {
        bindings.module_browser.load_json(value);
        applied += 1;
    }

    if let Some(value) = root.get("powerMeter") {
        bindings.engine.set_power_meter(coerce_bool(value));
        applied += 1;
    }

    if let Some(value) = root.get("checkVersion") {
        bindings.preferences.set_check_version(coerce_bool(value));
        applied += 1;
    }

    applied
}

/// Clamp a zoom factor into the supported range. NaN maps to the minimum.
pub fn clamp_zoom(zoom: f32) -> f32 {
    if zoom.is_nan() {
        MIN_ZOOM
    } else {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }
}

fn coerce_string(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_owned()
}

fn coerce_f32(value: &Value) -> f32 {
    value.as_f64().unwrap_or(0.0) as f32
}

fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(false, |n| n != 0.0),
        _ => false,
    }
}

fn coerce_pair(value: &Value) -> Option<Vec2> {
    match value.as_array()?.as_slice() {
        [x, y, ..] => Some(Vec2::new(x.as_f64()? as f32, y.as_f64()? as f32)),
        _ => None,
    }
}
