#![allow(dead_code)]

use std::io;
use std::sync::Arc;

use harmoniq_settings::{
    AudioEngine, ModuleBrowser, PluginManager, Preferences, SettingsBindings, Vec2, Viewport,
    WindowGeometry, WireStyle,
};
use parking_lot::Mutex;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockPlugins {
    pub token: String,
}

impl PluginManager for MockPlugins {
    fn token(&self) -> String {
        self.token.clone()
    }

    fn set_token(&mut self, token: String) {
        self.token = token;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockWindow {
    pub size: Vec2,
    pub pos: Vec2,
    pub maximized: bool,
}

impl WindowGeometry for MockWindow {
    fn window_size(&self) -> Vec2 {
        self.size
    }

    fn set_window_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn window_pos(&self) -> Vec2 {
        self.pos
    }

    fn set_window_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockWires {
    pub opacity: f32,
    pub tension: f32,
}

impl WireStyle for MockWires {
    fn wire_opacity(&self) -> f32 {
        self.opacity
    }

    fn set_wire_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn wire_tension(&self) -> f32 {
        self.tension
    }

    fn set_wire_tension(&mut self, tension: f32) {
        self.tension = tension;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockViewport {
    pub zoom: f32,
}

impl Viewport for MockViewport {
    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockEngine {
    pub sample_rate: f32,
    pub power_meter: bool,
}

impl AudioEngine for MockEngine {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    fn power_meter(&self) -> bool {
        self.power_meter
    }

    fn set_power_meter(&mut self, enabled: bool) {
        self.power_meter = enabled;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockBrowser {
    pub state: Value,
    pub loads: usize,
}

impl ModuleBrowser for MockBrowser {
    fn to_json(&self) -> Value {
        self.state.clone()
    }

    fn load_json(&mut self, value: &Value) {
        self.state = value.clone();
        self.loads += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockPrefs {
    pub allow_cursor_lock: bool,
    pub last_path: String,
    pub check_version: bool,
    pub skip_autosave_on_launch: bool,
}

impl Preferences for MockPrefs {
    fn allow_cursor_lock(&self) -> bool {
        self.allow_cursor_lock
    }

    fn set_allow_cursor_lock(&mut self, allow: bool) {
        self.allow_cursor_lock = allow;
    }

    fn last_path(&self) -> String {
        self.last_path.clone()
    }

    fn set_last_path(&mut self, path: String) {
        self.last_path = path;
    }

    fn check_version(&self) -> bool {
        self.check_version
    }

    fn set_check_version(&mut self, check: bool) {
        self.check_version = check;
    }

    fn skip_autosave_on_launch(&self) -> bool {
        self.skip_autosave_on_launch
    }

    fn set_skip_autosave_on_launch(&mut self, skip: bool) {
        self.skip_autosave_on_launch = skip;
    }
}

/// Stand-in for the application object graph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockApp {
    pub plugins: MockPlugins,
    pub window: MockWindow,
    pub wires: MockWires,
    pub viewport: MockViewport,
    pub engine: MockEngine,
    pub browser: MockBrowser,
    pub prefs: MockPrefs,
}

impl MockApp {
    /// Values a fresh install starts with.
    pub fn fresh() -> Self {
        Self {
            plugins: MockPlugins::default(),
            window: MockWindow {
                size: Vec2::new(1024.0, 768.0),
                pos: Vec2::new(0.0, 0.0),
                maximized: false,
            },
            wires: MockWires {
                opacity: 0.5,
                tension: 0.5,
            },
            viewport: MockViewport { zoom: 1.0 },
            engine: MockEngine {
                sample_rate: 44_100.0,
                power_meter: false,
            },
            browser: MockBrowser {
                state: json!({}),
                loads: 0,
            },
            prefs: MockPrefs {
                allow_cursor_lock: true,
                last_path: String::new(),
                check_version: true,
                skip_autosave_on_launch: false,
            },
        }
    }

    /// A user who has changed every setting.
    pub fn customised() -> Self {
        Self {
            plugins: MockPlugins {
                token: "9f2c1e7a-session".into(),
            },
            window: MockWindow {
                size: Vec2::new(1600.5, 900.25),
                pos: Vec2::new(-12.0, 48.75),
                maximized: false,
            },
            wires: MockWires {
                opacity: 0.1,
                tension: 0.333_333_34,
            },
            viewport: MockViewport { zoom: 1.75 },
            engine: MockEngine {
                sample_rate: 96_000.0,
                power_meter: true,
            },
            browser: MockBrowser {
                state: json!({ "favorites": ["Fundamental/VCO-1", "Befaco/EvenVCO"], "sort": "brand" }),
                loads: 0,
            },
            prefs: MockPrefs {
                allow_cursor_lock: false,
                last_path: "/home/ada/patches/drone.hsq".into(),
                check_version: false,
                skip_autosave_on_launch: true,
            },
        }
    }

    pub fn bindings(&mut self) -> SettingsBindings<'_> {
        SettingsBindings {
            plugins: &mut self.plugins,
            window: &mut self.window,
            wires: &mut self.wires,
            viewport: &mut self.viewport,
            engine: &mut self.engine,
            module_browser: &mut self.browser,
            preferences: &mut self.prefs,
        }
    }
}

#[derive(Clone, Default)]
struct LogSink(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a scoped subscriber and return what it logged.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let sink = LogSink::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&sink.0.lock()).into_owned();
    (result, logs)
}
