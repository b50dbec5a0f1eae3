//! File-backed and in-memory preference stores.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::backend::{PrefsBackend, PrefsError};

/// Preference store kept in a TOML string-map file.
///
/// The whole map is read once on open and rewritten on every flush; the
/// store holds a handful of short strings, so there is nothing to stream.
pub struct FilePrefs {
  path: PathBuf,
  entries: BTreeMap<String, String>,
}

impl FilePrefs {
  /// Opens the store at `path`, reading existing entries if the file exists.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
    let path = path.into();
    let entries = if path.exists() {
      let contents = std::fs::read_to_string(&path)?;
      toml::from_str(&contents).map_err(PrefsError::Parse)?
    } else {
      BTreeMap::new()
    };
    Ok(Self { path, entries })
  }

  /// The file this store flushes to.
  pub fn path(&self) -> &std::path::Path {
    &self.path
  }
}

impl PrefsBackend for FilePrefs {
  fn get_string(&self, key: &str) -> Option<String> {
    self.entries.get(key).cloned()
  }

  fn set_string(&mut self, key: &str, value: &str) {
    self.entries.insert(key.to_string(), value.to_string());
  }

  fn flush(&mut self) -> Result<(), PrefsError> {
    if let Some(parent) = self.path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(&self.entries).map_err(PrefsError::Serialize)?;
    std::fs::write(&self.path, contents)?;
    Ok(())
  }
}

/// In-memory preference store. The default, and the test double.
#[derive(Default)]
pub struct MemoryPrefs {
  entries: BTreeMap<String, String>,
}

impl MemoryPrefs {
  pub fn new() -> Self {
    Self::default()
  }
}

impl PrefsBackend for MemoryPrefs {
  fn get_string(&self, key: &str) -> Option<String> {
    self.entries.get(key).cloned()
  }

  fn set_string(&mut self, key: &str, value: &str) {
    self.entries.insert(key.to_string(), value.to_string());
  }

  fn flush(&mut self) -> Result<(), PrefsError> {
    Ok(())
  }
}
