//! Pointer handling: drag to pan, wheel to zoom, click to inspect a hex.
//!
//! A press starts a drag; releasing within [`InteractionConfig::click_slop`]
//! pixels of total travel counts as a click instead. Clicks are mapped through
//! the camera into world space and hit-tested against the map.

mod entities;
mod systems;

pub use entities::Selection;

use bevy::prelude::*;

use crate::GameState;

/// Per-plugin configuration for pointer handling.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct InteractionConfig {
    /// Maximum pointer travel (pixels) between press and release for a click.
    pub click_slop: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self { click_slop: 4.0 }
    }
}

/// Turns mouse input into camera motion and hex selection.
pub struct InteractionPlugin(pub InteractionConfig);

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<InteractionConfig>()
            .insert_resource(self.0.clone())
            .init_resource::<entities::PointerState>()
            .init_resource::<Selection>()
            .add_message::<entities::CanvasClicked>()
            .add_systems(
                Update,
                (
                    systems::track_pointer,
                    systems::zoom_camera,
                    systems::select_hex.after(systems::track_pointer),
                )
                    .run_if(in_state(GameState::Running)),
            );
    }
}
