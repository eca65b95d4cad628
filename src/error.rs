use std::io;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use thiserror::Error;

/// Every way a build run can fail. All variants surface to the single
/// top-level handler in `main`, which prints the Display string and ends
/// the run; nothing is retried or rolled back.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Could not find file: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Could not find version in {}", path.display())]
    VersionNotFound { path: PathBuf },

    #[error("invalid version string \"{value}\": expected MAJOR.MINOR.PATCH")]
    MalformedVersion { value: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BuildError {
    /// Classify an I/O failure against the path it happened on. A missing
    /// file gets its own kind so the diagnostic can name it; everything
    /// else stays generic.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            BuildError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            BuildError::Other(anyhow!("{}: {err}", path.display()))
        }
    }
}
