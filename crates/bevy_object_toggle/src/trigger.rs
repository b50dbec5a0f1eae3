//! Sensor-overlap trigger detection.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

use crate::components::{FireToggle, ObjectToggle, TriggerTag};

/// Fires controllers whose sensor was entered by a matching tagged body.
///
/// Only `Started` events qualify; a body resting inside the zone fires
/// nothing further until it leaves and re-enters. Either side of the pair
/// may be the controller, so two overlapping zones can fire each other's
/// controllers off one event.
pub(crate) fn detect_trigger_overlaps(
  mut collisions: MessageReader<CollisionEvent>,
  mut fired: MessageWriter<FireToggle>,
  controllers: Query<&ObjectToggle>,
  tags: Query<&TriggerTag>,
) {
  for event in collisions.read() {
    let CollisionEvent::Started(a, b, _) = event else {
      continue;
    };
    for (zone, other) in [(*a, *b), (*b, *a)] {
      let Ok(toggle) = controllers.get(zone) else {
        continue;
      };
      let Ok(tag) = tags.get(other) else {
        continue;
      };
      if tag.0 == toggle.target_tag {
        debug!("Trigger zone {zone} fired by {other}");
        fired.write(FireToggle { controller: zone });
      }
    }
  }
}
