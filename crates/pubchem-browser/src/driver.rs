//! Driver executable discovery.
//!
//! A webdriver directory must contain exactly one visible entry, named after
//! one of the supported driver executables.

use crate::error::{BrowserError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Browser family served by a driver executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    /// `chromedriver`
    Chrome,
    /// `geckodriver`
    Firefox,
}

impl DriverKind {
    /// Recognize a driver from its file name. A `.exe` suffix is accepted.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".exe").unwrap_or(name);
        match stem {
            "chromedriver" => Some(Self::Chrome),
            "geckodriver" => Some(Self::Firefox),
            _ => None,
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chrome => f.write_str("Chrome"),
            Self::Firefox => f.write_str("Firefox"),
        }
    }
}

/// A located driver executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverExecutable {
    pub kind: DriverKind,
    pub path: PathBuf,
}

/// Find the single driver executable inside `dir`.
///
/// Hidden entries (names starting with `.`) are ignored.
pub fn locate_driver(dir: &Path) -> Result<DriverExecutable> {
    if !dir.is_dir() {
        return Err(BrowserError::DriverDirectory {
            path: dir.display().to_string(),
        });
    }

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        candidates.push((name, entry.path()));
    }
    candidates.sort();

    if candidates.len() != 1 {
        return Err(BrowserError::DriverCount {
            dir: dir.display().to_string(),
            found: candidates.into_iter().map(|(name, _)| name).collect(),
        });
    }

    let (name, path) = candidates.remove(0);
    let kind =
        DriverKind::from_file_name(&name).ok_or(BrowserError::UnrecognizedDriver { name })?;

    debug!(kind = %kind, path = %path.display(), "located driver executable");

    Ok(DriverExecutable { kind, path })
}
