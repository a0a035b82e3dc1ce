use bevy::asset::LoadState;
use bevy::prelude::*;

use super::MapConfig;
use super::entities::{HexMap, MapSource};
use super::loader::HexMapAsset;

/// Kicks off the single asynchronous map load.
pub fn begin_map_load(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<MapConfig>) {
    info!("Loading hex map from {}", cfg.path);
    let handle = asset_server.load::<HexMapAsset>(cfg.path.clone());
    commands.insert_resource(MapSource {
        handle,
        resolved: false,
    });
}

/// Moves the loaded records into [`HexMap`], or logs the failure.
///
/// Runs every frame until the load resolves either way; there is no retry.
pub fn resolve_map_load(
    asset_server: Res<AssetServer>,
    mut assets: ResMut<Assets<HexMapAsset>>,
    mut source: ResMut<MapSource>,
    mut map: ResMut<HexMap>,
    cfg: Res<MapConfig>,
) {
    if source.resolved {
        return;
    }
    let id = source.handle.id();
    match asset_server.load_state(id) {
        LoadState::Loaded => {
            let result = assets
                .remove(id)
                .map(|asset| asset.hexes)
                .ok_or("asset missing after load");
            map.apply_load(&cfg.path, result);
            source.resolved = true;
        }
        LoadState::Failed(err) => {
            map.apply_load(&cfg.path, Err(err));
            source.resolved = true;
        }
        LoadState::NotLoaded | LoadState::Loading => {}
    }
}
