//! The sandbox room: trigger plates and the objects they toggle.

use bevy::prelude::*;
use bevy::sprite_render::{ColorMaterial, MeshMaterial2d};
use bevy_object_toggle::ObjectToggle;
use bevy_rapier2d::prelude::*;

use crate::config::ConfigLoaded;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Startup, spawn_room);
  }
}

fn spawn_room(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<ColorMaterial>>,
  config: Res<ConfigLoaded>,
) {
  let tag = config.hand.tag.clone();

  // Lamps toggled by the fade plate. Every object gets its own material
  // instance so a fade on one never bleeds onto another.
  let lamp_a = spawn_quad(
    &mut commands,
    &mut meshes,
    &mut materials,
    "Lamp A",
    Vec2::new(-120.0, 70.0),
    Vec2::new(36.0, 36.0),
    Color::srgb(0.95, 0.85, 0.3),
    true,
  );
  let lamp_b = spawn_quad(
    &mut commands,
    &mut meshes,
    &mut materials,
    "Lamp B",
    Vec2::new(-40.0, 70.0),
    Vec2::new(36.0, 36.0),
    Color::srgb(0.9, 0.6, 0.2),
    true,
  );
  // A glow quad under lamp B: a second renderer on the same object, so the
  // fade has to walk children.
  let glow = commands
    .spawn((
      Name::new("Lamp B glow"),
      Mesh2d(meshes.add(Rectangle::new(52.0, 52.0))),
      MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgba(0.9, 0.6, 0.2, 0.4)))),
      Transform::from_xyz(0.0, 0.0, -1.0),
    ))
    .id();
  commands.entity(lamp_b).add_child(glow);

  spawn_plate(
    &mut commands,
    &mut meshes,
    &mut materials,
    "Fade plate",
    Vec2::new(-80.0, -60.0),
    Color::srgb(0.3, 0.7, 0.9),
    ObjectToggle::with_targets(vec![lamp_a, lamp_b])
      .with_tag(tag.clone())
      .fade(config.toggles.fade_duration)
      .persisted("lamp_room"),
  );

  // The door plate snaps, flashes red while pressed, and forces the beacon
  // on and the barrier off on top of toggling the door itself.
  let door = spawn_quad(
    &mut commands,
    &mut meshes,
    &mut materials,
    "Door",
    Vec2::new(120.0, 70.0),
    Vec2::new(28.0, 56.0),
    Color::srgb(0.6, 0.45, 0.3),
    true,
  );
  let beacon = spawn_quad(
    &mut commands,
    &mut meshes,
    &mut materials,
    "Beacon",
    Vec2::new(190.0, 70.0),
    Vec2::new(20.0, 20.0),
    Color::srgb(0.3, 0.9, 0.4),
    false,
  );
  let barrier = spawn_quad(
    &mut commands,
    &mut meshes,
    &mut materials,
    "Barrier",
    Vec2::new(190.0, 20.0),
    Vec2::new(48.0, 10.0),
    Color::srgb(0.7, 0.3, 0.3),
    true,
  );
  let pressed = materials.add(ColorMaterial::from(Color::srgb(1.0, 0.25, 0.2)));

  spawn_plate(
    &mut commands,
    &mut meshes,
    &mut materials,
    "Door plate",
    Vec2::new(80.0, -60.0),
    Color::srgb(0.9, 0.5, 0.3),
    ObjectToggle::with_targets(vec![door])
      .with_tag(tag)
      .instant()
      .unpersisted()
      .pressed_flash(pressed, config.toggles.flash_duration)
      .secondary(vec![beacon], vec![barrier]),
  );
}

#[allow(clippy::too_many_arguments)]
fn spawn_quad(
  commands: &mut Commands,
  meshes: &mut Assets<Mesh>,
  materials: &mut Assets<ColorMaterial>,
  name: &str,
  position: Vec2,
  size: Vec2,
  color: Color,
  visible: bool,
) -> Entity {
  let visibility = if visible {
    Visibility::Inherited
  } else {
    Visibility::Hidden
  };
  commands
    .spawn((
      Name::new(name.to_string()),
      Mesh2d(meshes.add(Rectangle::new(size.x, size.y))),
      MeshMaterial2d(materials.add(ColorMaterial::from(color))),
      Transform::from_xyz(position.x, position.y, 0.0),
      visibility,
    ))
    .id()
}

fn spawn_plate(
  commands: &mut Commands,
  meshes: &mut Assets<Mesh>,
  materials: &mut Assets<ColorMaterial>,
  name: &str,
  position: Vec2,
  color: Color,
  toggle: ObjectToggle,
) {
  commands.spawn((
    Name::new(name.to_string()),
    Mesh2d(meshes.add(Rectangle::new(48.0, 48.0))),
    MeshMaterial2d(materials.add(ColorMaterial::from(color))),
    Transform::from_xyz(position.x, position.y, -2.0),
    Collider::cuboid(24.0, 24.0),
    Sensor,
    ActiveEvents::COLLISION_EVENTS,
    toggle,
  ));
}
