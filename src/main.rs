//! Hex conquest map viewer.
//!
//! Renders a hexagonal territory map that can be dragged and wheel-zoomed.
//! Clicking a hex shows its owner and difficulty, with a placeholder attack.

mod camera;
mod interaction;
mod map;
pub mod math;
mod render;
mod session;
mod ui;

use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy_inspector_egui::quick::WorldInspectorPlugin;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Normal map interaction.
    #[default]
    Running,
    /// Inspector and hex labels shown (Tab to toggle); map input paused.
    Debugging,
}

/// Command-line overrides for the data sources.
#[cfg(feature = "native")]
#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Hex list, relative to the asset directory.
    #[arg(long, default_value = "hexes.json")]
    map: String,
    /// JSON file holding `playerUsername` / `playerTeam`.
    #[arg(long, default_value = "session.json")]
    session: String,
}

#[cfg(feature = "native")]
fn configs() -> (map::MapConfig, session::SessionConfig) {
    use clap::Parser;

    let cli = Cli::parse();
    (
        map::MapConfig { path: cli.map },
        session::SessionConfig {
            path: cli.session,
            ..default()
        },
    )
}

#[cfg(not(feature = "native"))]
fn configs() -> (map::MapConfig, session::SessionConfig) {
    (default(), default())
}

fn main() {
    let (map_config, session_config) = configs();
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hex Conquest".into(),
            canvas: Some("#game".into()),
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(session::SessionPlugin(session_config))
    .add_plugins(map::MapPlugin(map_config))
    .add_plugins(camera::CameraPlugin(camera::CameraConfig::default()))
    .add_plugins(render::RenderPlugin(render::RenderConfig::default()))
    .add_plugins(interaction::InteractionPlugin(
        interaction::InteractionConfig::default(),
    ))
    .add_plugins(ui::UiPlugin(ui::UiConfig::default()))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Debugging)));

    #[cfg(feature = "native")]
    app.add_plugins(RemotePlugin::default())
        .add_plugins(RemoteHttpPlugin::default());

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            GameState::Running => GameState::Debugging,
            GameState::Debugging => GameState::Running,
        };
        info!("Switching to {new_state:?}");
        next.set(new_state);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
