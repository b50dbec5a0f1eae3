//! Pressed-material flashes.
//!
//! A flash swaps every renderer of an object to a substitute material for a
//! fixed wall-clock duration, then restores the originals from the memo.
//! Like fades, the component is the object's single flash slot: re-firing
//! mid-flash replaces the task, and because the memo only captures absent
//! entries, the restore still lands on the true originals.

use bevy::prelude::*;
use bevy::sprite_render::{ColorMaterial, MeshMaterial2d};
use bevy::time::Real;

use crate::memo::{OriginalMaterials, collect_renderers};

/// An in-flight pressed-material flash on the carrying entity.
#[derive(Component, Debug)]
pub struct Flashing {
  timer: Timer,
  /// Renderer set captured when the flash started.
  renderers: Vec<Entity>,
}

impl Flashing {
  fn new(duration: f32, renderers: Vec<Entity>) -> Self {
    Self {
      timer: Timer::from_seconds(duration, TimerMode::Once),
      renderers,
    }
  }
}

/// Starts a flash: memoizes originals, swaps in the pressed material, and
/// arms the restore timer.
pub(crate) fn begin_flash(
  commands: &mut Commands,
  target: Entity,
  pressed: &Handle<ColorMaterial>,
  duration: f32,
  children: &Query<&Children>,
  handles: &mut Query<&mut MeshMaterial2d<ColorMaterial>>,
  memo: &mut OriginalMaterials,
) {
  let renderers = collect_renderers(target, children, handles);
  for &renderer in &renderers {
    let Ok(mut handle) = handles.get_mut(renderer) else {
      continue;
    };
    memo.remember(renderer, &handle.0);
    handle.0 = pressed.clone();
  }
  commands.entity(target).insert(Flashing::new(duration, renderers));
}

/// Ticks flash timers on wall-clock time and restores finished flashes.
///
/// Restoration is by renderer identity: each captured renderer gets its own
/// memoized original back. Renderers despawned mid-flash, or missing a memo
/// entry, are skipped.
pub(crate) fn drive_flashes(
  time: Res<Time<Real>>,
  mut commands: Commands,
  memo: Res<OriginalMaterials>,
  mut flashing: Query<(Entity, &mut Flashing)>,
  mut handles: Query<&mut MeshMaterial2d<ColorMaterial>>,
) {
  for (entity, mut flash) in flashing.iter_mut() {
    flash.timer.tick(time.delta());
    if !flash.timer.finished() {
      continue;
    }
    for &renderer in &flash.renderers {
      let Ok(mut handle) = handles.get_mut(renderer) else {
        continue;
      };
      if let Some(original) = memo.original_of(renderer) {
        handle.0 = original.clone();
      }
    }
    commands.entity(entity).remove::<Flashing>();
  }
}
