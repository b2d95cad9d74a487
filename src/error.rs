use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("no supported CLI found (claude or codex)")]
    NoCliDetected,

    #[error("source skill directory not found: {}", .path.display())]
    MissingSkillSource { path: PathBuf },

    #[error("cannot determine home directory (HOME or USERPROFILE must be set)")]
    NoHomeDir,

    #[error("invalid plugin manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("{} {}: {}", .action, .path.display(), .source)]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InstallError {
    /// Wrap an I/O failure with the action and the path being processed.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
