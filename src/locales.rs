//! Locale override discovery and loading.
//!
//! A locale is one `<name>.yaml` file in the locales directory; the file stem
//! is the locale identifier used in output file names. The directory is
//! optional: a project with no locales configured generates the base
//! document pair only.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::codec;
use crate::error::GenerateError;

/// One locale override file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub name: String,
    pub path: PathBuf,
}

/// List locale overrides under `dir`, sorted lexicographically by file name
/// so repeated runs produce artifacts in the same order.
///
/// # Errors
///
/// Returns [`GenerateError::Discovery`] when the listing itself fails. A
/// directory that does not exist simply yields no locales.
pub fn discover(dir: &Path) -> Result<Vec<Locale>, GenerateError> {
    let pattern = dir.join("*.yaml").to_string_lossy().into_owned();
    let entries =
        glob::glob(&pattern).map_err(|e| GenerateError::discovery(pattern.as_str(), e))?;

    let mut out = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| GenerateError::discovery(pattern.as_str(), e))?;
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        out.push(Locale {
            name: stem.to_string(),
            path,
        });
    }
    out.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(out)
}

impl Locale {
    /// Decode this locale's override document.
    pub fn load(&self) -> Result<Value, GenerateError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| GenerateError::io(&self.path, e))?;
        codec::decode_yaml(&self.path.display().to_string(), &text)
    }
}

// -------------------------------- Tests ---------------------------------- //
