//! HUD and hex dialog: player banner, selected-hex details, attack stub.

mod entities;
mod systems;

pub use entities::HexDialog;

use bevy::prelude::*;

/// Per-plugin configuration for the HUD.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct UiConfig {
    /// How long an attack notice stays on screen (seconds).
    pub notice_seconds: f32,
    /// Dialog panel background.
    pub panel_color: Color,
    /// Text colour for every HUD label.
    pub text_color: Color,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_seconds: 4.0,
            panel_color: Color::srgba(0.08, 0.09, 0.15, 0.95),
            text_color: Color::srgb(0.9, 0.92, 0.96),
        }
    }
}

/// Spawns the HUD and wires the dialog buttons.
pub struct UiPlugin(pub UiConfig);

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<UiConfig>()
            .insert_resource(self.0.clone())
            .init_resource::<HexDialog>()
            .init_resource::<entities::Notice>()
            .add_systems(Startup, (systems::spawn_hud, systems::spawn_dialog))
            .add_systems(
                Update,
                (
                    systems::handle_dialog_buttons,
                    systems::sync_dialog
                        .after(systems::handle_dialog_buttons)
                        .run_if(resource_changed::<HexDialog>),
                    systems::tick_notice.after(systems::handle_dialog_buttons),
                ),
            );
    }
}
