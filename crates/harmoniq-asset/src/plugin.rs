/// Where a plugin was installed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginInstall {
    /// Bundled with the application, below the system root.
    System,
    /// Installed by the user, below the user root.
    User,
}

/// Identity of a loaded plugin, as far as path resolution cares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginHandle {
    pub slug: String,
    pub install: PluginInstall,
}

impl PluginHandle {
    pub fn new(slug: impl Into<String>, install: PluginInstall) -> Self {
        Self {
            slug: slug.into(),
            install,
        }
    }

    pub fn system(slug: impl Into<String>) -> Self {
        Self::new(slug, PluginInstall::System)
    }

    pub fn user(slug: impl Into<String>) -> Self {
        Self::new(slug, PluginInstall::User)
    }
}
