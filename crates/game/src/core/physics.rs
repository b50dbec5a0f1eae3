use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
  fn build(&self, app: &mut App) {
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default().with_length_unit(50.0));
  }
}
