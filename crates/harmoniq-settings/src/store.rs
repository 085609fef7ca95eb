use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::collaborators::SettingsBindings;
use crate::document::{apply_value, SettingsDocument};
use crate::error::{ParseFailure, SettingsError};

/// What a [`save`] call ended up doing.
///
/// Callers that only care about the "never fails" contract can drop it.
#[derive(Debug)]
pub enum SaveOutcome {
    Written { path: PathBuf, bytes: usize },
    Unwritable(SettingsError),
}

impl SaveOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, SaveOutcome::Written { .. })
    }
}

/// What a [`load`] call ended up doing.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The document parsed; `fields` recognised keys were pushed out.
    Applied { fields: usize },
    /// No file at the path. Expected on first launch.
    Missing,
    /// The file exists but could not be read.
    Unreadable(io::Error),
    /// The file is not valid JSON. Nothing was applied.
    Malformed(ParseFailure),
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied { .. })
    }
}

/// Snapshot every collaborator and write the result to `path`.
///
/// The document goes to a sibling temp file first and is renamed over the
/// destination, so a failed write leaves the previous file intact.
pub fn save(path: impl AsRef<Path>, bindings: &SettingsBindings<'_>) -> SaveOutcome {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "saving settings");

    let document = SettingsDocument::capture(bindings);
    match write_document(path, &document) {
        Ok(bytes) => SaveOutcome::Written {
            path: path.to_path_buf(),
            bytes,
        },
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "settings not written");
            SaveOutcome::Unwritable(err)
        }
    }
}

/// Read `path` and push its recognised keys into the collaborators.
///
/// A missing or unreadable file changes nothing. A malformed file changes
/// nothing either and is reported with a single warning.
pub fn load(path: impl AsRef<Path>, bindings: &mut SettingsBindings<'_>) -> LoadOutcome {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading settings");

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return LoadOutcome::Missing,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "settings not readable");
            return LoadOutcome::Unreadable(err);
        }
    };

    let root = match parse_document(&path.display().to_string(), &bytes) {
        Ok(root) => root,
        Err(failure) => {
            tracing::warn!(
                source = %failure.source_name,
                line = failure.line,
                column = failure.column,
                error = %failure.message,
                "JSON parsing error in settings"
            );
            return LoadOutcome::Malformed(failure);
        }
    };

    let fields = apply_value(&root, bindings);
    tracing::debug!(fields, "settings applied");
    LoadOutcome::Applied { fields }
}

/// Parse a whole document. Only objects and arrays are accepted at the root.
fn parse_document(source_name: &str, bytes: &[u8]) -> Result<Value, ParseFailure> {
    let root: Value =
        serde_json::from_slice(bytes).map_err(|err| ParseFailure::from_json(source_name, &err))?;
    match root {
        Value::Object(_) | Value::Array(_) => Ok(root),
        _ => Err(ParseFailure {
            source_name: source_name.to_owned(),
            line: 1,
            column: 1,
            message: "'[' or '{' expected at document root".to_owned(),
        }),
    }
}

fn write_document(path: &Path, document: &SettingsDocument) -> Result<usize, SettingsError> {
    let json = document.to_json_string()?;
    let tmp_path = temp_path(path);

    let written = fs::write(&tmp_path, json.as_bytes()).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(err) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }
    Ok(json.len())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
