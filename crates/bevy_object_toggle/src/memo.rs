//! Original-material memo and renderer discovery.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy::sprite_render::{ColorMaterial, MeshMaterial2d};

/// Remembers the first material seen on each renderer entity.
///
/// Populated lazily the first time a renderer is touched by a material
/// change or a pressed flash; entries are never cleared. Keyed by renderer
/// entity, so renderers added or removed after capture cannot shift which
/// original a restore lands on.
#[derive(Resource, Default)]
pub struct OriginalMaterials {
  map: HashMap<Entity, Handle<ColorMaterial>>,
}

impl OriginalMaterials {
  /// Records the renderer's original material if not already known.
  pub fn remember(&mut self, renderer: Entity, handle: &Handle<ColorMaterial>) {
    self.map.entry(renderer).or_insert_with(|| handle.clone());
  }

  /// Returns the renderer's original material, if one was captured.
  pub fn original_of(&self, renderer: Entity) -> Option<&Handle<ColorMaterial>> {
    self.map.get(&renderer)
  }

  /// Number of renderers with a captured original.
  pub fn len(&self) -> usize {
    self.map.len()
  }

  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }
}

/// Collects every renderer under `root`, the root itself included.
///
/// A renderer is any entity carrying a `MeshMaterial2d<ColorMaterial>`.
/// Traversal is depth-first over `Children`.
pub(crate) fn collect_renderers(
  root: Entity,
  children: &Query<&Children>,
  handles: &Query<&mut MeshMaterial2d<ColorMaterial>>,
) -> Vec<Entity> {
  let mut renderers = Vec::new();
  let mut pending = vec![root];
  while let Some(entity) = pending.pop() {
    if handles.contains(entity) {
      renderers.push(entity);
    }
    if let Ok(kids) = children.get(entity) {
      pending.extend(kids.iter());
    }
  }
  renderers
}
