//! Components and messages making up the toggle configuration surface.

use bevy::prelude::*;
use bevy::sprite_render::ColorMaterial;

/// Default tag matched by a freshly constructed [`ObjectToggle`].
pub const DEFAULT_TARGET_TAG: &str = "HandTag";

/// Default preference-store key for saved on/off states.
///
/// Shared by every controller unless overridden, so two controllers saving
/// under the default key will overwrite each other's state.
pub const DEFAULT_SAVE_KEY: &str = "object_states";

/// A toggle controller, attached to the sensor entity that detects overlaps.
///
/// `targets` is the primary list: each fire inverts every listed entity's
/// visibility. List order is load-bearing for persistence - slot *i* of the
/// saved flag string always refers to `targets[i]`, so the list must stay
/// stable across sessions for saved state to land on the right objects.
#[derive(Component, Clone, Debug)]
pub struct ObjectToggle {
  /// Tag a body must carry for its overlap to fire this controller.
  pub target_tag: String,
  /// Primary list of toggled entities. Order defines persistence slots.
  pub targets: Vec<Entity>,
  /// Fade visibility changes over `fade_duration` instead of snapping.
  pub fade_enabled: bool,
  /// Fade length in seconds. Zero completes on the first animated frame.
  pub fade_duration: f32,
  /// Save target states after every fire and restore them on spawn.
  pub persistence_enabled: bool,
  /// Preference-store key the flag string is saved under.
  pub save_key: String,
  /// Capture original materials of all targets on every fire.
  pub material_change_enabled: bool,
  /// Flash targets with `pressed_material` on every fire.
  pub pressed_flash_enabled: bool,
  /// Substitute material for the pressed flash. None skips the flash.
  pub pressed_material: Option<Handle<ColorMaterial>>,
  /// Flash length in wall-clock seconds.
  pub pressed_duration: f32,
  /// Run the fixed-state pass over the secondary lists on every fire.
  pub secondary_pass_enabled: bool,
  /// Secondary list forced visible. Order irrelevant.
  pub enable_targets: Vec<Entity>,
  /// Secondary list forced hidden, applied after the enable list, so an
  /// entity in both lists ends hidden.
  pub disable_targets: Vec<Entity>,
}

impl Default for ObjectToggle {
  fn default() -> Self {
    Self {
      target_tag: DEFAULT_TARGET_TAG.to_string(),
      targets: Vec::new(),
      fade_enabled: true,
      fade_duration: 1.0,
      persistence_enabled: true,
      save_key: DEFAULT_SAVE_KEY.to_string(),
      material_change_enabled: false,
      pressed_flash_enabled: false,
      pressed_material: None,
      pressed_duration: 1.0,
      secondary_pass_enabled: false,
      enable_targets: Vec::new(),
      disable_targets: Vec::new(),
    }
  }
}

impl ObjectToggle {
  /// Creates a controller over the given primary list.
  pub fn with_targets(targets: impl Into<Vec<Entity>>) -> Self {
    Self {
      targets: targets.into(),
      ..default()
    }
  }

  /// Sets the tag overlapping bodies must carry.
  pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
    self.target_tag = tag.into();
    self
  }

  /// Enables fading with the given duration in seconds.
  pub fn fade(mut self, duration: f32) -> Self {
    self.fade_enabled = true;
    self.fade_duration = duration;
    self
  }

  /// Disables fading; toggles snap.
  pub fn instant(mut self) -> Self {
    self.fade_enabled = false;
    self
  }

  /// Enables persistence under the given key.
  pub fn persisted(mut self, key: impl Into<String>) -> Self {
    self.persistence_enabled = true;
    self.save_key = key.into();
    self
  }

  /// Disables persistence for this controller.
  pub fn unpersisted(mut self) -> Self {
    self.persistence_enabled = false;
    self
  }

  /// Enables the pressed-material flash.
  pub fn pressed_flash(mut self, material: Handle<ColorMaterial>, duration: f32) -> Self {
    self.pressed_flash_enabled = true;
    self.pressed_material = Some(material);
    self.pressed_duration = duration;
    self
  }

  /// Enables the secondary fixed-state pass over the given lists.
  pub fn secondary(mut self, enable: impl Into<Vec<Entity>>, disable: impl Into<Vec<Entity>>) -> Self {
    self.secondary_pass_enabled = true;
    self.enable_targets = enable.into();
    self.disable_targets = disable.into();
    self
  }
}

/// Tag carried by bodies that can fire trigger zones.
///
/// Compared against [`ObjectToggle::target_tag`] by exact string equality.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct TriggerTag(pub String);

impl TriggerTag {
  pub fn new(tag: impl Into<String>) -> Self {
    Self(tag.into())
  }
}

/// Fires a toggle controller.
///
/// Written by trigger detection on every qualifying overlap, by the debug
/// panel's buttons, and by anything else that wants to fire a controller
/// manually. One message = one full toggle pass; there is no debouncing.
#[derive(bevy::prelude::Message, Debug, Clone, Copy)]
pub struct FireToggle {
  /// The entity carrying the [`ObjectToggle`] to fire.
  pub controller: Entity,
}
