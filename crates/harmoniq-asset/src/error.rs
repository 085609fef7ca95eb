use thiserror::Error;

/// Errors raised while establishing the asset roots.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no per-user configuration directory is available")]
    NoUserDirectory,
    #[error("I/O error while preparing asset roots: {0}")]
    Io(#[from] std::io::Error),
}
