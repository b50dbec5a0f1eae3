//! The player-driven "hand" body that fires trigger zones.

use bevy::prelude::*;
use bevy::sprite_render::{ColorMaterial, MeshMaterial2d};
use bevy_object_toggle::TriggerTag;
use bevy_rapier2d::prelude::*;

use crate::config::ConfigLoaded;

#[derive(Component)]
pub struct Hand;

pub struct HandPlugin;

impl Plugin for HandPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_systems(Startup, spawn_hand)
      .add_systems(Update, move_hand);
  }
}

fn spawn_hand(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<ColorMaterial>>,
  config: Res<ConfigLoaded>,
) {
  let hand = &config.hand;
  commands.spawn((
    Hand,
    Name::new("Hand"),
    Mesh2d(meshes.add(Circle::new(hand.radius))),
    MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgb(0.95, 0.82, 0.55)))),
    Transform::from_xyz(hand.spawn_x, hand.spawn_y, 10.0),
    RigidBody::KinematicPositionBased,
    Collider::ball(hand.radius),
    TriggerTag::new(hand.tag.clone()),
    // Kinematic vs fixed pairs are filtered out by default; the trigger
    // zones are fixed sensors, so opt back in.
    ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_FIXED,
  ));
}

fn move_hand(
  time: Res<Time>,
  keys: Res<ButtonInput<KeyCode>>,
  config: Res<ConfigLoaded>,
  mut hands: Query<&mut Transform, With<Hand>>,
) {
  let mut direction = Vec2::ZERO;
  if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
    direction.x -= 1.0;
  }
  if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
    direction.x += 1.0;
  }
  if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
    direction.y -= 1.0;
  }
  if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
    direction.y += 1.0;
  }
  if direction == Vec2::ZERO {
    return;
  }

  let step = direction.normalize() * config.hand.speed * time.delta_secs();
  for mut transform in &mut hands {
    transform.translation.x += step.x;
    transform.translation.y += step.y;
  }
}
