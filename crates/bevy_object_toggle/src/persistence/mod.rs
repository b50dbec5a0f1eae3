//! Saved on/off states.
//!
//! Every persisted controller serializes its primary list to a single
//! comma-joined string of 0/1 flags, one per target in list order, under the
//! controller's key. The string is written (and flushed) after every fire
//! and read back once, the frame the controller spawns.

mod backend;
mod native;

use bevy::prelude::*;

pub use backend::{PrefsBackend, PrefsError};
pub use native::{FilePrefs, MemoryPrefs};

use crate::components::ObjectToggle;

/// The preference store used by all toggle controllers.
#[derive(Resource)]
pub struct TogglePrefs {
  backend: Box<dyn PrefsBackend>,
}

impl TogglePrefs {
  /// Wraps the given backend.
  pub fn new(backend: Box<dyn PrefsBackend>) -> Self {
    Self { backend }
  }

  /// A store that keeps everything in memory.
  pub fn in_memory() -> Self {
    Self::new(Box::new(MemoryPrefs::new()))
  }

  pub fn get_string(&self, key: &str) -> Option<String> {
    self.backend.get_string(key)
  }

  pub fn set_string(&mut self, key: &str, value: &str) {
    self.backend.set_string(key, value);
  }

  pub fn flush(&mut self) -> Result<(), PrefsError> {
    self.backend.flush()
  }
}

/// Encodes on/off flags as the stored `"1,0,..."` string.
fn encode_flags(flags: &[bool]) -> String {
  flags
    .iter()
    .map(|&on| if on { "1" } else { "0" })
    .collect::<Vec<_>>()
    .join(",")
}

/// Decodes a stored string back into flags. `"1"` is on, anything else off.
fn decode_flags(raw: &str) -> Vec<bool> {
  raw.split(',').map(|flag| flag == "1").collect()
}

/// Serializes the controller's target states and flushes the store.
///
/// One flag per primary slot, in list order. A despawned target has no
/// visibility left to read and is recorded as off.
pub(crate) fn save_states(
  toggle: &ObjectToggle,
  visibilities: &Query<&mut Visibility>,
  prefs: &mut TogglePrefs,
) {
  let mut flags = Vec::with_capacity(toggle.targets.len());
  for &target in &toggle.targets {
    let on = match visibilities.get(target) {
      Ok(visibility) => !matches!(*visibility, Visibility::Hidden),
      Err(_) => {
        warn!("Toggle target {target} is gone; saving its slot as off");
        false
      }
    };
    flags.push(on);
  }

  prefs.set_string(&toggle.save_key, &encode_flags(&flags));
  if let Err(e) = prefs.flush() {
    error!("Failed to flush toggle prefs: {e}");
  }
}

/// Re-applies saved states to controllers the frame they are added.
///
/// Flags are matched to targets by position and the pairing truncates to the
/// shorter side: extra saved flags are ignored, extra targets keep their
/// current state. Controllers with persistence off, or without a stored
/// value, are left alone.
pub(crate) fn restore_saved_states(
  prefs: Res<TogglePrefs>,
  added: Query<&ObjectToggle, Added<ObjectToggle>>,
  mut visibilities: Query<&mut Visibility>,
) {
  for toggle in added.iter() {
    if !toggle.persistence_enabled {
      continue;
    }
    let Some(raw) = prefs.get_string(&toggle.save_key) else {
      continue;
    };

    let flags = decode_flags(&raw);
    for (&target, &on) in toggle.targets.iter().zip(flags.iter()) {
      let Ok(mut visibility) = visibilities.get_mut(target) else {
        continue;
      };
      *visibility = if on {
        Visibility::Inherited
      } else {
        Visibility::Hidden
      };
    }
    debug!(
      "Restored {} of {} target states under '{}'",
      flags.len().min(toggle.targets.len()),
      toggle.targets.len(),
      toggle.save_key
    );
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn encode_joins_flags_in_order() {
    assert_eq!(encode_flags(&[true, false, true]), "1,0,1");
    assert_eq!(encode_flags(&[false]), "0");
    assert_eq!(encode_flags(&[]), "");
  }

  #[test]
  fn decode_treats_anything_but_one_as_off() {
    assert_eq!(decode_flags("1,0,1"), vec![true, false, true]);
    assert_eq!(decode_flags("1,2,x,"), vec![true, false, false, false]);
  }

  #[test]
  fn round_trip_preserves_any_assignment() {
    let flags = [true, true, false, true, false];
    assert_eq!(decode_flags(&encode_flags(&flags)), flags);
  }

  #[test]
  fn memory_backend_round_trips() {
    let mut prefs = MemoryPrefs::new();
    assert_eq!(prefs.get_string("k"), None);
    prefs.set_string("k", "1,0");
    prefs.flush().unwrap();
    assert_eq!(prefs.get_string("k").as_deref(), Some("1,0"));
  }
}
