use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use regex::Regex;

use crate::error::BuildError;
use crate::fsio;

const VERSION_FIELD: &str = r#"(version:\s*)"([^"]+)""#;

/// A semantic version triple as it appears in the declaration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// The only mutation the build performs: patch + 1, major and minor
    /// untouched.
    pub fn bump_patch(self) -> Version {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch + 1,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = BuildError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || BuildError::MalformedVersion {
            value: value.to_string(),
        };
        let parts = value.split('.').collect::<Vec<_>>();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(malformed());
        };
        Ok(Version {
            major: major.parse().map_err(|_| malformed())?,
            minor: minor.parse().map_err(|_| malformed())?,
            patch: patch.parse().map_err(|_| malformed())?,
        })
    }
}

/// First `version: "..."` occurrence in the text, raw and unvalidated.
pub fn extract_version(content: &str) -> Option<&str> {
    let re = Regex::new(VERSION_FIELD).expect("valid regex");
    re.captures(content)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// The declaration file as a persistent version counter. Reads extract the
/// first `version: "..."` field; writes rewrite EVERY occurrence of the
/// field to the new value, leaving all other bytes untouched.
#[derive(Debug, Clone)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current(&self) -> Result<Version, BuildError> {
        let content = fsio::read_file(&self.path)?;
        let raw = extract_version(&content).ok_or_else(|| BuildError::VersionNotFound {
            path: self.path.clone(),
        })?;
        raw.parse()
    }

    pub fn set(&self, version: &Version) -> Result<(), BuildError> {
        let content = fsio::read_file(&self.path)?;
        let re = Regex::new(VERSION_FIELD).expect("valid regex");
        let updated = re.replace_all(&content, format!("${{1}}\"{version}\""));
        fsio::write_file(&self.path, &updated)
    }
}
