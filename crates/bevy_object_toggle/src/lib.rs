//! Object Toggle - trigger-driven visibility toggling for Bevy.
//!
//! This crate provides a single scene behavior: when a tagged body overlaps
//! a sensor zone, the zone's configured set of objects is toggled on or off,
//! optionally fading their material alpha, flashing a substitute material,
//! and persisting the resulting on/off states to a preference store.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

pub mod components;
pub mod debug_ui;
pub mod fade;
pub mod flash;
pub mod memo;
mod orchestrator;
pub mod persistence;
pub mod schedule;
mod trigger;

pub use components::{FireToggle, ObjectToggle, TriggerTag};
pub use debug_ui::ToggleDebugUiPlugin;
pub use fade::Fading;
pub use flash::Flashing;
pub use memo::OriginalMaterials;
pub use persistence::{FilePrefs, MemoryPrefs, PrefsBackend, PrefsError, TogglePrefs};
pub use schedule::ToggleSet;

/// Configuration for the toggle preference store.
///
/// State is persisted by providing a path to a prefs file. Without a path,
/// saved states live only in memory and die with the app.
///
/// # Example
/// ```ignore
/// // File-backed store
/// let config = PrefsConfig::at("saves/toggles.toml");
///
/// // In-memory store (tests, or persistence left off everywhere)
/// let config = PrefsConfig::in_memory();
/// ```
#[derive(Clone, Debug, Default)]
pub struct PrefsConfig {
  /// Path to the prefs file. None = in-memory store.
  pub path: Option<PathBuf>,
}

impl PrefsConfig {
  /// Creates a prefs config backed by the given file.
  pub fn at(path: impl Into<PathBuf>) -> Self {
    Self {
      path: Some(path.into()),
    }
  }

  /// In-memory store, nothing written to disk.
  pub fn in_memory() -> Self {
    Self { path: None }
  }

  /// Returns true if the store is file-backed.
  pub fn is_file_backed(&self) -> bool {
    self.path.is_some()
  }
}

/// Plugin for trigger-driven object toggling.
///
/// This plugin provides:
/// - Sensor-overlap trigger detection against a configured tag
/// - Instant or alpha-fading visibility toggles for a primary object list
/// - Temporary pressed-material flashes with original-material restore
/// - Saved on/off states, re-applied when a controller spawns
///
/// Attach an [`ObjectToggle`] to a sensor collider entity and mark the
/// overlapping body with a matching [`TriggerTag`]. Writing a [`FireToggle`]
/// message triggers a controller manually, outside the sensor path.
#[derive(Default)]
pub struct ObjectTogglePlugin {
  /// Preference store configuration.
  pub prefs: PrefsConfig,
}

impl ObjectTogglePlugin {
  /// Sets the preference store configuration.
  pub fn prefs(mut self, config: PrefsConfig) -> Self {
    self.prefs = config;
    self
  }
}

impl Plugin for ObjectTogglePlugin {
  fn build(&self, app: &mut App) {
    app.add_message::<FireToggle>();
    // Registered here as well so headless apps without the rapier plugin can
    // still build the detection system. add_message is idempotent.
    app.add_message::<CollisionEvent>();

    // Fades and flashes write through ColorMaterial assets; make sure the
    // asset type exists even when no sprite rendering plugin registered it.
    if app.is_plugin_added::<bevy::asset::AssetPlugin>() {
      app.init_asset::<bevy::sprite_render::ColorMaterial>();
    }

    app.init_resource::<OriginalMaterials>();

    let prefs = match &self.prefs.path {
      Some(path) => match FilePrefs::open(path) {
        Ok(backend) => {
          info!("Opened toggle prefs at {}", path.display());
          TogglePrefs::new(Box::new(backend))
        }
        Err(e) => {
          error!(
            "Failed to open toggle prefs at {}: {e}. Falling back to in-memory store.",
            path.display()
          );
          TogglePrefs::in_memory()
        }
      },
      None => TogglePrefs::in_memory(),
    };
    app.insert_resource(prefs);

    app.configure_sets(
      Update,
      (ToggleSet::Detect, ToggleSet::Apply, ToggleSet::Animate).chain(),
    );
    app
      .add_systems(
        Update,
        trigger::detect_trigger_overlaps.in_set(ToggleSet::Detect),
      )
      .add_systems(
        Update,
        (persistence::restore_saved_states, orchestrator::apply_toggles)
          .chain()
          .in_set(ToggleSet::Apply),
      )
      .add_systems(
        Update,
        (fade::drive_fades, flash::drive_flashes).in_set(ToggleSet::Animate),
      );
  }
}
