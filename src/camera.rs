//! Pan/zoom camera over the hex map.
//!
//! [`CameraState`] is the authoritative world-space camera; a system copies it
//! onto the Bevy `Camera2d` every frame. Input handling lives in
//! [`crate::interaction`].

mod entities;
mod systems;

pub use entities::CameraState;

use bevy::prelude::*;

/// Per-plugin configuration for the map camera.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct CameraConfig {
    /// Zoom change per pixel of wheel delta (browser `deltaY` sign).
    pub wheel_sensitivity: f32,
    /// Pixels assumed per wheel "line" on line-mode scroll devices.
    pub pixels_per_line: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            wheel_sensitivity: -0.001,
            pixels_per_line: 100.0,
        }
    }
}

/// Spawns the 2D camera and keeps it in sync with [`CameraState`].
pub struct CameraPlugin(pub CameraConfig);

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraConfig>()
            .register_type::<CameraState>()
            .insert_resource(self.0.clone())
            .init_resource::<CameraState>()
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(PostUpdate, systems::sync_camera_transform);
    }
}
