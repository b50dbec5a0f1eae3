//! System sets ordering the toggle pipeline within `Update`.

use bevy::prelude::*;

/// Phases of the toggle pipeline, chained in order each frame.
///
/// Detection runs first so a sensor overlap and the toggle it fires land in
/// the same frame; animation runs last so a freshly started fade writes its
/// starting alpha before the frame renders.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleSet {
  /// Collision events are matched against configured tags.
  Detect,
  /// Fired toggles are applied: visibility flips, tasks start, state saves.
  Apply,
  /// In-flight fades and flashes advance.
  Animate,
}
