//! Hex renderer: filled hex tiles with a difficulty glow and a thin outline.
//!
//! Fills and glow halos are retained `Mesh2d` entities rebuilt whenever the
//! [`crate::map::HexMap`] changes; outlines are immediate-mode gizmos redrawn
//! every frame.

mod entities;
mod systems;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::GameState;
use crate::map::HexMap;

/// Colours and glow tuning for the hex renderer.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct RenderConfig {
    /// Fill for hexes without an owner.
    pub neutral_color: Color,
    /// Fill for hexes owned by the blue team.
    pub blue_color: Color,
    /// Fill for hexes owned by anyone else.
    pub red_color: Color,
    /// Outline stroke colour.
    pub outline_color: Color,
    /// Outline stroke width in pixels.
    pub outline_width: f32,
    /// Number of translucent halos used to fake the glow blur.
    pub glow_steps: u32,
    /// Opacity of the innermost halo.
    pub glow_alpha: f32,
    /// Background clear color.
    pub clear_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            neutral_color: Color::srgb_u8(0x2a, 0x2f, 0x45),
            blue_color: Color::srgb_u8(0x25, 0x63, 0xeb),
            red_color: Color::srgb_u8(0xdc, 0x26, 0x26),
            outline_color: Color::srgb_u8(0x22, 0x22, 0x22),
            outline_width: 1.0,
            glow_steps: 3,
            glow_alpha: 0.35,
            clear_color: Color::srgb(0.04, 0.05, 0.09),
        }
    }
}

/// Draws every hex of the map each frame.
pub struct RenderPlugin(pub RenderConfig);

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<RenderConfig>()
            .register_type::<entities::HexTile>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(Startup, systems::setup_render)
            .add_systems(
                Update,
                systems::rebuild_tiles.run_if(resource_changed::<HexMap>),
            )
            .add_systems(Update, systems::draw_outlines)
            .add_systems(
                EguiPrimaryContextPass,
                systems::draw_hex_labels.run_if(in_state(GameState::Debugging)),
            );
    }
}
