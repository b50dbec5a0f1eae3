//! E2E tests for the instant toggle pass and the secondary fixed-state pass.

use bevy::prelude::*;
use bevy::sprite_render::ColorMaterial;
use bevy_object_toggle::{FireToggle, ObjectToggle, ObjectTogglePlugin};

fn test_app() -> App {
  let mut app = App::new();
  app.add_plugins(MinimalPlugins);
  app.add_plugins(bevy::asset::AssetPlugin::default());
  app.init_asset::<ColorMaterial>();
  app.add_plugins(ObjectTogglePlugin::default());
  app
}

fn spawn_object(app: &mut App, visible: bool) -> Entity {
  let visibility = if visible {
    Visibility::Inherited
  } else {
    Visibility::Hidden
  };
  app.world_mut().spawn(visibility).id()
}

fn is_visible(app: &App, entity: Entity) -> bool {
  !matches!(
    *app.world().get::<Visibility>(entity).unwrap(),
    Visibility::Hidden
  )
}

#[test]
fn instant_toggle_inverts_each_target() {
  let mut app = test_app();
  let a = spawn_object(&mut app, true);
  let b = spawn_object(&mut app, false);

  let controller = app
    .world_mut()
    .spawn(
      ObjectToggle::with_targets(vec![a, b])
        .instant()
        .unpersisted(),
    )
    .id();

  app.world_mut().write_message(FireToggle { controller });
  app.update();

  assert!(!is_visible(&app, a), "visible target should turn off");
  assert!(is_visible(&app, b), "hidden target should turn on");
}

#[test]
fn two_fires_in_one_frame_run_twice() {
  let mut app = test_app();
  let a = spawn_object(&mut app, true);

  let controller = app
    .world_mut()
    .spawn(ObjectToggle::with_targets(vec![a]).instant().unpersisted())
    .id();

  // No debouncing: each qualifying event runs a full pass, so a double fire
  // lands back on the starting state.
  app.world_mut().write_message(FireToggle { controller });
  app.world_mut().write_message(FireToggle { controller });
  app.update();

  assert!(is_visible(&app, a));
}

#[test]
fn despawned_target_is_skipped() {
  let mut app = test_app();
  let gone = spawn_object(&mut app, true);
  let alive = spawn_object(&mut app, true);
  app.world_mut().entity_mut(gone).despawn();

  let controller = app
    .world_mut()
    .spawn(
      ObjectToggle::with_targets(vec![gone, alive])
        .instant()
        .unpersisted(),
    )
    .id();

  app.world_mut().write_message(FireToggle { controller });
  app.update();

  assert!(!is_visible(&app, alive), "live target still toggles");
}

#[test]
fn disable_wins_when_entity_is_in_both_secondary_lists() {
  let mut app = test_app();
  let contested = spawn_object(&mut app, true);

  let controller = app
    .world_mut()
    .spawn(
      ObjectToggle::with_targets(vec![])
        .instant()
        .unpersisted()
        .secondary(vec![contested], vec![contested]),
    )
    .id();

  app.world_mut().write_message(FireToggle { controller });
  app.update();

  assert!(!is_visible(&app, contested));
}

#[test]
fn secondary_lists_apply_even_with_the_pass_flag_off() {
  let mut app = test_app();
  let beacon = spawn_object(&mut app, false);
  let barrier = spawn_object(&mut app, true);

  let mut toggle = ObjectToggle::with_targets(vec![]).instant().unpersisted();
  toggle.secondary_pass_enabled = false;
  toggle.enable_targets = vec![beacon];
  toggle.disable_targets = vec![barrier];
  let controller = app.world_mut().spawn(toggle).id();

  app.world_mut().write_message(FireToggle { controller });
  app.update();

  assert!(is_visible(&app, beacon));
  assert!(!is_visible(&app, barrier));
}

#[test]
fn missing_controller_is_a_no_op() {
  let mut app = test_app();
  let a = spawn_object(&mut app, true);

  let controller = app
    .world_mut()
    .spawn(ObjectToggle::with_targets(vec![a]).instant().unpersisted())
    .id();
  app.world_mut().entity_mut(controller).despawn();

  app.world_mut().write_message(FireToggle { controller });
  app.update();

  assert!(is_visible(&app, a), "fire on a dead controller does nothing");
}
