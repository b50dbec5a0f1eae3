//! The toggle pass: everything that happens when a controller fires.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::sprite_render::{ColorMaterial, MeshMaterial2d};

use crate::components::{FireToggle, ObjectToggle};
use crate::fade::Fading;
use crate::flash::begin_flash;
use crate::memo::{OriginalMaterials, collect_renderers};
use crate::persistence::{self, TogglePrefs};

/// Runs one full toggle pass per [`FireToggle`] message.
///
/// Each primary target's new state is the negation of its visibility at the
/// moment it is processed, not a snapshot taken up front. Despawned targets
/// are skipped silently. The pass itself is synchronous; fades and flashes
/// it starts keep running on later frames, and the secondary and persistence
/// steps do not wait for them.
pub(crate) fn apply_toggles(
  mut fired: MessageReader<FireToggle>,
  mut commands: Commands,
  mut prefs: ResMut<TogglePrefs>,
  mut memo: ResMut<OriginalMaterials>,
  controllers: Query<&ObjectToggle>,
  children: Query<&Children>,
  mut visibilities: Query<&mut Visibility>,
  mut material_handles: Query<&mut MeshMaterial2d<ColorMaterial>>,
) {
  for fire in fired.read() {
    let Ok(toggle) = controllers.get(fire.controller) else {
      continue;
    };

    for &target in &toggle.targets {
      let Ok(mut visibility) = visibilities.get_mut(target) else {
        continue;
      };
      let turning_on = matches!(*visibility, Visibility::Hidden);

      if toggle.fade_enabled {
        if turning_on {
          // Visible immediately so the fade-in plays from alpha zero.
          *visibility = Visibility::Inherited;
        }
        let materials: Vec<_> = collect_renderers(target, &children, &material_handles)
          .into_iter()
          .filter_map(|renderer| material_handles.get(renderer).ok())
          .map(|handle| handle.0.clone())
          .collect();
        commands
          .entity(target)
          .insert(Fading::new(turning_on, toggle.fade_duration, materials));
      } else {
        *visibility = if turning_on {
          Visibility::Inherited
        } else {
          Visibility::Hidden
        };
      }

      if toggle.material_change_enabled {
        for renderer in collect_renderers(target, &children, &material_handles) {
          if let Ok(handle) = material_handles.get(renderer) {
            memo.remember(renderer, &handle.0);
          }
        }
      }

      if toggle.pressed_flash_enabled
        && let Some(pressed) = &toggle.pressed_material
      {
        begin_flash(
          &mut commands,
          target,
          pressed,
          toggle.pressed_duration,
          &children,
          &mut material_handles,
          &mut memo,
        );
      }
    }

    // The fixed-state pass has two call sites with different gating; callers
    // rely on the unconditional one even when the pass flag is off, so the
    // two must not be merged.
    if toggle.secondary_pass_enabled {
      apply_fixed_states(toggle, &mut visibilities);
    }
    if !toggle.enable_targets.is_empty() || !toggle.disable_targets.is_empty() {
      apply_fixed_states(toggle, &mut visibilities);
    }

    if toggle.persistence_enabled {
      persistence::save_states(toggle, &visibilities, &mut prefs);
    }
  }
}

/// Forces the enable list visible, then the disable list hidden.
///
/// The disable list is applied second, so an entity in both lists ends
/// hidden.
fn apply_fixed_states(toggle: &ObjectToggle, visibilities: &mut Query<&mut Visibility>) {
  for &entity in &toggle.enable_targets {
    if let Ok(mut visibility) = visibilities.get_mut(entity) {
      *visibility = Visibility::Inherited;
    }
  }
  for &entity in &toggle.disable_targets {
    if let Ok(mut visibility) = visibilities.get_mut(entity) {
      *visibility = Visibility::Hidden;
    }
  }
}
