//! Debug panel for firing controllers by hand.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};

use crate::components::{FireToggle, ObjectToggle};

/// Plugin that lists every toggle controller in an egui window with a fire
/// button per controller - the manual counterpart of walking into the zone.
///
/// Needs a rendering host; add it alongside [`crate::ObjectTogglePlugin`]
/// in apps with a window, and leave it out of headless runs.
pub struct ToggleDebugUiPlugin;

impl Plugin for ToggleDebugUiPlugin {
  fn build(&self, app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
      app.add_plugins(EguiPlugin::default());
    }
    app.add_systems(EguiPrimaryContextPass, render_toggle_panel);
  }
}

fn render_toggle_panel(
  mut contexts: EguiContexts,
  mut fired: MessageWriter<FireToggle>,
  controllers: Query<(Entity, &ObjectToggle, Option<&Name>)>,
) {
  let Ok(ctx) = contexts.ctx_mut() else {
    return;
  };
  egui::Window::new("Toggles")
    .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
    .default_width(220.0)
    .show(ctx, |ui| {
      if controllers.is_empty() {
        ui.label("No toggle controllers in the scene");
        return;
      }
      for (entity, toggle, name) in controllers.iter() {
        ui.horizontal(|ui| {
          let label = match name {
            Some(name) => name.as_str().to_owned(),
            None => format!("{entity}"),
          };
          ui.label(format!("{label} ({} targets)", toggle.targets.len()));
          if ui.button("Fire").clicked() {
            fired.write(FireToggle { controller: entity });
          }
        });
      }
    });
}
