use std::fmt;

/// Intended access for files below an asset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

/// Which root a resolved asset path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Files shipped with the application install.
    System,
    /// Per-user files owned by the application.
    User,
    /// Files shipped inside a plugin's own directory.
    Plugin,
}

impl AssetCategory {
    pub fn access(self) -> Access {
        match self {
            AssetCategory::User => Access::ReadWrite,
            AssetCategory::System | AssetCategory::Plugin => Access::ReadOnly,
        }
    }

    pub fn is_writable(self) -> bool {
        self.access() == Access::ReadWrite
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetCategory::System => "system",
            AssetCategory::User => "user",
            AssetCategory::Plugin => "plugin",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
