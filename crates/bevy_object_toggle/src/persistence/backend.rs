//! Preference-store backend trait.
//!
//! Persistence is an injected dependency: the toggle systems only ever see
//! [`PrefsBackend`], so saved state can live in a file, in memory, or in
//! whatever a host supplies, without the toggle logic changing.

use std::error::Error;
use std::{fmt, io};

/// Error type for preference-store operations.
#[derive(Debug)]
pub enum PrefsError {
  /// Standard I/O error.
  Io(io::Error),
  /// The stored file could not be parsed.
  Parse(toml::de::Error),
  /// The store could not be serialized.
  Serialize(toml::ser::Error),
}

impl fmt::Display for PrefsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(e) => write!(f, "I/O error: {e}"),
      Self::Parse(e) => write!(f, "parse error: {e}"),
      Self::Serialize(e) => write!(f, "serialize error: {e}"),
    }
  }
}

impl Error for PrefsError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Parse(e) => Some(e),
      Self::Serialize(e) => Some(e),
    }
  }
}

impl From<io::Error> for PrefsError {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

/// A string key-value preference store.
///
/// `set_string` only updates the in-process view; `flush` makes the store
/// durable. Callers flush immediately after every save.
pub trait PrefsBackend: Send + Sync {
  /// Returns the stored value for `key`, if any.
  fn get_string(&self, key: &str) -> Option<String>;

  /// Stores `value` under `key`, replacing any previous value.
  fn set_string(&mut self, key: &str, value: &str);

  /// Writes all stored values to durable storage.
  fn flush(&mut self) -> Result<(), PrefsError>;
}
