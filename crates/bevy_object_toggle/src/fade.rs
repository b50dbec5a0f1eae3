//! Timed alpha fades.
//!
//! A fade is a component on the faded entity, advanced once per frame. The
//! component doubles as the entity's transition slot: starting a new fade
//! replaces whatever was in flight, so two fades never fight over the same
//! materials.

use bevy::math::FloatExt;
use bevy::prelude::*;
use bevy::sprite_render::ColorMaterial;

/// An in-flight visibility fade on the carrying entity.
///
/// Holds the material set captured when the fade started; a pressed flash
/// swapping the renderers' materials mid-fade does not redirect the alpha
/// writes.
#[derive(Component, Debug)]
pub struct Fading {
  fade_in: bool,
  duration: f32,
  elapsed: f32,
  materials: Vec<Handle<ColorMaterial>>,
}

impl Fading {
  pub(crate) fn new(fade_in: bool, duration: f32, materials: Vec<Handle<ColorMaterial>>) -> Self {
    Self {
      fade_in,
      duration,
      elapsed: 0.0,
      materials,
    }
  }

  /// True if this fade ends with the entity visible.
  pub fn is_fading_in(&self) -> bool {
    self.fade_in
  }

  fn start_alpha(&self) -> f32 {
    if self.fade_in { 0.0 } else { 1.0 }
  }

  fn end_alpha(&self) -> f32 {
    if self.fade_in { 1.0 } else { 0.0 }
  }
}

/// Advances every in-flight fade by one frame of scaled time.
///
/// While running, writes the interpolated alpha into every captured
/// material; the first frame writes the exact start alpha. On completion the
/// exact end alpha is written first, and only then is a fade-out's entity
/// hidden - the object is never visible at a stale alpha.
pub(crate) fn drive_fades(
  time: Res<Time>,
  mut commands: Commands,
  mut materials: ResMut<Assets<ColorMaterial>>,
  mut fading: Query<(Entity, &mut Fading, &mut Visibility)>,
) {
  for (entity, mut fade, mut visibility) in fading.iter_mut() {
    if fade.elapsed >= fade.duration {
      write_alpha(&mut materials, &fade.materials, fade.end_alpha());
      if !fade.fade_in {
        *visibility = Visibility::Hidden;
      }
      commands.entity(entity).remove::<Fading>();
    } else {
      let t = fade.elapsed / fade.duration;
      let alpha = fade.start_alpha().lerp(fade.end_alpha(), t);
      write_alpha(&mut materials, &fade.materials, alpha);
      fade.elapsed += time.delta_secs();
    }
  }
}

fn write_alpha(
  materials: &mut Assets<ColorMaterial>,
  handles: &[Handle<ColorMaterial>],
  alpha: f32,
) {
  for handle in handles {
    if let Some(material) = materials.get_mut(handle) {
      material.color.set_alpha(alpha);
    }
  }
}
