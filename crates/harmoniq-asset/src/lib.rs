//! Asset location resolution for Harmoniq Studio.
//!
//! Every file the application touches lives under one of three roots:
//!
//! * the **system** root next to the installed binaries, read only;
//! * the **user** root in the per-user configuration directory, the only
//!   place the application writes to directly (settings, autosaves);
//! * a **plugin** root owned by a single plugin, read only, which sits under
//!   either of the two roots above depending on where the plugin was
//!   installed.
//!
//! The boundary is a convention. Nothing here checks permissions or even
//! touches the disk when resolving; callers performing I/O handle missing
//! files themselves. [`AssetRoots`] is built once at startup and handed to
//! whatever needs it.

mod category;
mod error;
mod plugin;
mod roots;

pub use category::{Access, AssetCategory};
pub use error::AssetError;
pub use plugin::{PluginHandle, PluginInstall};
pub use roots::{AssetRoots, APP_DIR_NAME, PLUGINS_DIR};
