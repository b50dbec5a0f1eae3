mod camera;
mod physics;

use bevy::prelude::*;
pub use camera::GameCamera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(physics::PhysicsPlugin)
      .add_systems(Startup, camera::setup_camera);
  }
}
