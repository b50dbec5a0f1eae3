mod config;
mod core;
mod hand;
mod scene;

use bevy::{
  prelude::*,
  window::{PresentMode, WindowResolution},
};
use bevy_object_toggle::{ObjectTogglePlugin, PrefsConfig, ToggleDebugUiPlugin};

fn main() {
  let config_str = std::fs::read_to_string("assets/config/game.config.toml")
    .expect("Failed to read config file");
  let config: config::GameConfig = toml::from_str(&config_str).expect("Failed to parse config");

  let mut app = App::new();

  app
    .add_plugins(
      DefaultPlugins
        .set(ImagePlugin::default_nearest())
        .set(WindowPlugin {
          primary_window: Some(Window {
            resolution: WindowResolution::new(config.window.width, config.window.height),
            title: config.window.title.clone(),
            present_mode: PresentMode::AutoVsync,
            ..default()
          }),
          ..default()
        }),
    )
    .add_plugins(config::ConfigPlugin)
    .add_plugins(core::CorePlugin)
    .add_plugins(hand::HandPlugin)
    .add_plugins(scene::ScenePlugin);

  app.add_plugins(
    ObjectTogglePlugin::default().prefs(PrefsConfig::at(&config.toggles.prefs_file)),
  );
  app.add_plugins(ToggleDebugUiPlugin);

  app.run();
}
