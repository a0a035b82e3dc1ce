use bevy::prelude::*;

use super::entities::{CameraState, MapCamera};
use crate::math;

/// Spawns the `Camera2d` entity tagged with [`MapCamera`].
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("MapCamera"), Camera2d, MapCamera));
}

/// Places the camera at the scene position of [`CameraState`] with scale `1 / zoom`.
///
/// Bevy's 2D camera already centres its origin in the viewport, which supplies
/// the "translate to centre" half of the render transform.
pub fn sync_camera_transform(
    state: Res<CameraState>,
    mut query: Query<&mut Transform, With<MapCamera>>,
) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };
    let target = math::world_to_scene(state.position(), transform.translation.z);
    transform.translation = target;
    transform.scale = Vec3::splat(1.0 / state.zoom());
}
