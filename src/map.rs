//! Map data store: the ordered hex records, loaded once from a JSON asset.
//!
//! Loading is fire-and-forget through the asset server. Until it resolves (or
//! if it fails) the [`HexMap`] resource is simply empty, which every consumer
//! handles as "no hexes".

mod entities;
mod loader;
mod systems;

pub use entities::{Difficulty, HexMap, HexRecord};
use loader::HexMapAsset;

use bevy::prelude::*;

/// Per-plugin configuration for the map store.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct MapConfig {
    /// Asset path of the hex list, relative to the asset root.
    pub path: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: "hexes.json".into(),
        }
    }
}

/// Registers the JSON loader, starts the load at startup and resolves it.
pub struct MapPlugin(pub MapConfig);

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MapConfig>()
            .insert_resource(self.0.clone())
            .init_resource::<HexMap>()
            .init_asset::<HexMapAsset>()
            .register_asset_loader(loader::HexMapLoader)
            .add_systems(Startup, systems::begin_map_load)
            .add_systems(
                PreUpdate,
                systems::resolve_map_load.run_if(resource_exists::<entities::MapSource>),
            );
    }
}
