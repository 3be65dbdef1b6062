//! Data directory resolution.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDirSource {
    /// Explicit override from configuration or the command line.
    Override,
    /// Platform data directory (XDG data home, AppData, ...).
    System,
    /// `.lumen` under the working directory, when no platform dir exists.
    Fallback,
}

/// Where identity and draw records live.
#[derive(Debug, Clone)]
pub struct DataDir {
    path: PathBuf,
    source: DataDirSource,
}

impl DataDir {
    pub fn resolve(override_path: Option<PathBuf>) -> Self {
        if let Some(path) = override_path {
            return Self {
                path,
                source: DataDirSource::Override,
            };
        }
        match dirs::data_dir() {
            Some(base) => Self {
                path: base.join("lumen"),
                source: DataDirSource::System,
            },
            None => Self {
                path: PathBuf::from(".lumen"),
                source: DataDirSource::Fallback,
            },
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn source(&self) -> DataDirSource {
        self.source
    }

    #[must_use]
    pub fn join(&self, child: &str) -> PathBuf {
        self.path.join(child)
    }
}
