mod plugin;

use bevy::{asset::Asset, prelude::*, reflect::TypePath};
pub use plugin::ConfigPlugin;
use serde::Deserialize;

#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
pub struct GameConfig {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub hand: HandConfig,
  pub toggles: TogglesConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
  pub viewport_width: f32,
  pub viewport_height: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct HandConfig {
  pub speed: f32,
  pub radius: f32,
  pub spawn_x: f32,
  pub spawn_y: f32,
  pub tag: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TogglesConfig {
  pub fade_duration: f32,
  pub flash_duration: f32,
  pub prefs_file: String,
}

#[derive(Resource)]
pub struct ConfigHandle(pub Handle<GameConfig>);

#[derive(Resource, Debug, Clone)]
pub struct ConfigLoaded {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub hand: HandConfig,
  pub toggles: TogglesConfig,
}

impl From<GameConfig> for ConfigLoaded {
  fn from(config: GameConfig) -> Self {
    Self {
      window: config.window,
      camera: config.camera,
      hand: config.hand,
      toggles: config.toggles,
    }
  }
}
