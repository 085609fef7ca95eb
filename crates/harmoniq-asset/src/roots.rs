use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::{AssetCategory, AssetError, PluginHandle, PluginInstall};

/// Directory name used below the per-user configuration directory.
pub const APP_DIR_NAME: &str = "HarmoniqStudio";
/// Directory holding plugin folders below either root.
pub const PLUGINS_DIR: &str = "plugins";

const SHARE_DIR_NAME: &str = "harmoniq-studio";

/// The two process-wide asset roots.
///
/// Immutable once built; clone it or pass it by reference to anything that
/// resolves asset paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoots {
    system_dir: PathBuf,
    user_dir: PathBuf,
}

impl AssetRoots {
    /// Build roots from explicit directories. Nothing is created on disk.
    pub fn new(system_dir: impl Into<PathBuf>, user_dir: impl Into<PathBuf>) -> Self {
        Self {
            system_dir: system_dir.into(),
            user_dir: user_dir.into(),
        }
    }

    /// Detect the roots for this process.
    ///
    /// The system root is derived from the running executable, the user root
    /// from the platform configuration directory. The user root is created if
    /// it does not exist yet, so calling this more than once is harmless.
    pub fn init() -> Result<Self, AssetError> {
        let system_dir = install_dir()?;
        let user_dir = user_config_dir()?;
        fs::create_dir_all(&user_dir)?;
        tracing::info!(
            system = %system_dir.display(),
            user = %user_dir.display(),
            "asset roots initialised"
        );
        Ok(Self {
            system_dir,
            user_dir,
        })
    }

    pub fn system_dir(&self) -> &Path {
        &self.system_dir
    }

    pub fn user_dir(&self) -> &Path {
        &self.user_dir
    }

    /// Path of a system resource. Only read from this location.
    pub fn system(&self, filename: impl AsRef<Path>) -> PathBuf {
        join_below(&self.system_dir, filename.as_ref())
    }

    /// Path of a user resource. Reading and writing are both fine here.
    pub fn user(&self, filename: impl AsRef<Path>) -> PathBuf {
        join_below(&self.user_dir, filename.as_ref())
    }

    /// Path of a resource in the plugin's own folder. Only read from this
    /// location.
    pub fn plugin(&self, plugin: &PluginHandle, filename: impl AsRef<Path>) -> PathBuf {
        join_below(&self.plugin_root(plugin), filename.as_ref())
    }

    /// The folder owned by `plugin`.
    pub fn plugin_root(&self, plugin: &PluginHandle) -> PathBuf {
        let base = match plugin.install {
            PluginInstall::System => &self.system_dir,
            PluginInstall::User => &self.user_dir,
        };
        join_below(&base.join(PLUGINS_DIR), Path::new(&plugin.slug))
    }

    /// Classify an already resolved path.
    ///
    /// Anything below a `plugins` folder counts as a plugin asset even though
    /// it also lives under the system or user root. When one root contains the
    /// other (portable installs), the deeper root wins.
    pub fn category_of(&self, path: &Path) -> Option<AssetCategory> {
        let in_plugins = |root: &Path| {
            path.strip_prefix(root.join(PLUGINS_DIR))
                .map(|rest| rest.components().next().is_some())
                .unwrap_or(false)
        };
        if in_plugins(self.user_dir.as_path()) || in_plugins(self.system_dir.as_path()) {
            return Some(AssetCategory::Plugin);
        }

        let mut roots = [
            (&self.system_dir, AssetCategory::System),
            (&self.user_dir, AssetCategory::User),
        ];
        roots.sort_by_key(|(root, _)| std::cmp::Reverse(root.components().count()));
        roots
            .into_iter()
            .find(|(root, _)| path.starts_with(root))
            .map(|(_, category)| category)
    }
}

/// Append the plain name segments of `relative` to `base`.
///
/// Roots, drive prefixes, `.` and `..` are dropped so the result always stays
/// below `base`.
fn join_below(base: &Path, relative: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            path.push(part);
        }
    }
    path
}

fn install_dir() -> Result<PathBuf, AssetError> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    // `<prefix>/bin/harmoniq` ships its resources in `<prefix>/share/harmoniq-studio`.
    if dir.file_name() == Some(OsStr::new("bin")) {
        if let Some(prefix) = dir.parent() {
            let shared = prefix.join("share").join(SHARE_DIR_NAME);
            if shared.is_dir() {
                return Ok(shared);
            }
        }
    }
    Ok(dir)
}

fn user_config_dir() -> Result<PathBuf, AssetError> {
    let base = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .ok_or(AssetError::NoUserDirectory)?;
    Ok(base.join(APP_DIR_NAME))
}
