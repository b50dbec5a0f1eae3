//! E2E test driving the toggle through real rapier sensor events.
//!
//! A tagged kinematic ball is walked into a fixed sensor zone; the resulting
//! collision event must fire the zone's controller.

use bevy::prelude::*;
use bevy::sprite_render::ColorMaterial;
use bevy_object_toggle::{ObjectToggle, ObjectTogglePlugin, TriggerTag};
use bevy_rapier2d::prelude::*;

/// Per-update hand movement in world units.
const STEP: f32 = 2.0;

fn test_app() -> App {
  let mut app = App::new();
  app.add_plugins(MinimalPlugins);
  app.add_plugins(bevy::transform::TransformPlugin);
  app.add_plugins(bevy::asset::AssetPlugin::default());
  app.init_asset::<ColorMaterial>();
  app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0));
  app.add_plugins(ObjectTogglePlugin::default());
  app
}

fn spawn_hand(app: &mut App, x: f32, tag: &str) -> Entity {
  app
    .world_mut()
    .spawn((
      Transform::from_xyz(x, 0.0, 0.0),
      GlobalTransform::from(Transform::from_xyz(x, 0.0, 0.0)),
      RigidBody::KinematicPositionBased,
      Collider::ball(5.0),
      TriggerTag::new(tag),
      // Kinematic vs fixed pairs are filtered out by default.
      ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_FIXED,
    ))
    .id()
}

fn step_hand_towards_zone(app: &mut App, hand: Entity) {
  let mut transform = app.world_mut().get_mut::<Transform>(hand).unwrap();
  transform.translation.x -= STEP;
}

#[test]
fn walking_into_the_zone_fires_the_toggle() {
  let mut app = test_app();

  let lamp = app.world_mut().spawn(Visibility::Inherited).id();
  app.world_mut().spawn((
    Transform::default(),
    GlobalTransform::default(),
    Collider::cuboid(10.0, 10.0),
    Sensor,
    ActiveEvents::COLLISION_EVENTS,
    ObjectToggle::with_targets(vec![lamp])
      .with_tag("HandTag")
      .instant()
      .unpersisted(),
  ));
  let hand = spawn_hand(&mut app, 100.0, "HandTag");

  app.update();

  let mut toggled = false;
  for _ in 0..200 {
    step_hand_towards_zone(&mut app, hand);
    app.update();
    if matches!(
      *app.world().get::<Visibility>(lamp).unwrap(),
      Visibility::Hidden
    ) {
      toggled = true;
      break;
    }
  }

  assert!(toggled, "sensor overlap should have fired the toggle");
}

#[test]
fn mismatched_tag_fires_nothing() {
  let mut app = test_app();

  let lamp = app.world_mut().spawn(Visibility::Inherited).id();
  app.world_mut().spawn((
    Transform::default(),
    GlobalTransform::default(),
    Collider::cuboid(10.0, 10.0),
    Sensor,
    ActiveEvents::COLLISION_EVENTS,
    ObjectToggle::with_targets(vec![lamp])
      .with_tag("HandTag")
      .instant()
      .unpersisted(),
  ));
  let hand = spawn_hand(&mut app, 100.0, "FootTag");

  for _ in 0..200 {
    step_hand_towards_zone(&mut app, hand);
    app.update();
  }

  assert!(
    matches!(
      *app.world().get::<Visibility>(lamp).unwrap(),
      Visibility::Inherited
    ),
    "wrong tag must not fire the toggle"
  );
}
