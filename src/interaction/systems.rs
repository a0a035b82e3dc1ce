use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::InteractionConfig;
use super::entities::{CanvasClicked, PointerState, Selection, pick_hex, wheel_delta_pixels};
use crate::camera::{CameraConfig, CameraState};
use crate::map::HexMap;
use crate::ui::HexDialog;

/// Drives the pointer state machine: pans while dragging, emits [`CanvasClicked`].
///
/// Presses that land on a UI node (dialog, buttons) never start a gesture.
pub fn track_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    ui_nodes: Query<&Interaction>,
    mut pointer: ResMut<PointerState>,
    mut camera: ResMut<CameraState>,
    mut clicks: MessageWriter<CanvasClicked>,
    cfg: Res<InteractionConfig>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        if pointer.is_dragging() {
            pointer.leave();
        }
        return;
    };

    if let Some(delta) = pointer.move_to(cursor) {
        camera.pan(delta);
    }

    if buttons.just_pressed(MouseButton::Left) {
        let over_ui = ui_nodes.iter().any(|i| *i != Interaction::None);
        if !over_ui {
            pointer.press(cursor);
        }
    }

    if buttons.just_released(MouseButton::Left)
        && let Some(at) = pointer.release(cursor, cfg.click_slop)
    {
        debug!("Canvas click at ({:.1}, {:.1})", at.x, at.y);
        clicks.write(CanvasClicked {
            cursor: at,
            viewport: window.size(),
        });
    }
}

/// Wheel zoom, independent of any drag in progress.
pub fn zoom_camera(
    mut wheel: MessageReader<MouseWheel>,
    mut camera: ResMut<CameraState>,
    cfg: Res<CameraConfig>,
) {
    for ev in wheel.read() {
        let delta_y = wheel_delta_pixels(ev.unit, ev.y, cfg.pixels_per_line);
        camera.zoom_by(delta_y * cfg.wheel_sensitivity);
    }
}

/// Hit-tests each click; a hit becomes the selection and opens the dialog.
pub fn select_hex(
    mut clicks: MessageReader<CanvasClicked>,
    camera: Res<CameraState>,
    map: Res<HexMap>,
    mut selection: ResMut<Selection>,
    mut dialog: ResMut<HexDialog>,
) {
    for click in clicks.read() {
        let Some(hex) = pick_hex(&camera, &map, click.cursor, click.viewport) else {
            continue;
        };
        info!("Selected hex {}", hex.id);
        selection.select(&hex.id);
        dialog.open(hex);
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use super::*;
    use crate::map::{Difficulty, HexRecord};

    fn app_with_map(map: HexMap) -> App {
        let mut app = App::new();
        app.add_message::<CanvasClicked>()
            .init_resource::<CameraState>()
            .init_resource::<Selection>()
            .init_resource::<HexDialog>()
            .insert_resource(map)
            .add_systems(Update, select_hex);
        app
    }

    #[test]
    fn clicking_a_hex_opens_its_details() {
        let mut app = app_with_map(HexMap::new(vec![
            HexRecord::new("h-0", 0, 0).with_difficulty(Difficulty::Easy),
            HexRecord::new("h-1", 1, 0).with_difficulty(Difficulty::Hard),
        ]));
        let viewport = Vec2::new(800.0, 600.0);
        let target = HexRecord::new("h-1", 1, 0).center();
        let cursor = CameraState::default().world_to_screen(target, viewport);

        app.world_mut().write_message(CanvasClicked { cursor, viewport });
        app.update();

        let dialog = app.world().resource::<HexDialog>();
        assert!(dialog.is_visible());
        assert!(dialog.body().contains("Hex ID: h-1"));
        assert!(dialog.body().contains("Owner: Neutral"));
        assert!(dialog.body().contains("Difficulty: hard"));
        assert_eq!(app.world().resource::<Selection>().id(), Some("h-1"));
    }

    #[test]
    fn clicking_empty_space_changes_nothing() {
        let mut app = app_with_map(HexMap::new(vec![HexRecord::new("h-0", 0, 0)]));
        let viewport = Vec2::new(800.0, 600.0);

        app.world_mut().write_message(CanvasClicked {
            cursor: Vec2::new(5.0, 5.0),
            viewport,
        });
        app.update();

        assert!(!app.world().resource::<HexDialog>().is_visible());
        assert_eq!(app.world().resource::<Selection>().id(), None);
    }

    #[test]
    fn clicking_before_the_map_loads_is_harmless() {
        let mut app = app_with_map(HexMap::default());
        app.world_mut().write_message(CanvasClicked {
            cursor: Vec2::new(400.0, 300.0),
            viewport: Vec2::new(800.0, 600.0),
        });
        app.update();
        assert!(!app.world().resource::<HexDialog>().is_visible());
    }

    // ── track_pointer ───────────────────────────────────────────────

    fn pointer_app() -> App {
        let mut app = App::new();
        app.add_message::<CanvasClicked>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<PointerState>()
            .init_resource::<CameraState>()
            .insert_resource(InteractionConfig::default())
            .add_systems(Update, track_pointer);
        app.world_mut().spawn((Window::default(), PrimaryWindow));
        app
    }

    fn move_cursor(app: &mut App, at: Vec2) {
        let world = app.world_mut();
        let mut windows = world.query_filtered::<&mut Window, With<PrimaryWindow>>();
        let mut window = windows.single_mut(world).unwrap();
        window.set_cursor_position(Some(at));
    }

    /// Sets the left button state and runs one frame.
    fn step(app: &mut App, at: Vec2, button: impl FnOnce(&mut ButtonInput<MouseButton>)) {
        move_cursor(app, at);
        {
            let mut input = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
            input.clear();
            button(&mut input);
        }
        app.update();
    }

    fn clicks(app: &App) -> usize {
        app.world().resource::<Messages<CanvasClicked>>().len()
    }

    #[test]
    fn drag_pans_camera_without_clicking() {
        let mut app = pointer_app();
        step(&mut app, Vec2::new(100.0, 100.0), |b| b.press(MouseButton::Left));
        step(&mut app, Vec2::new(120.0, 100.0), |_| {});
        step(&mut app, Vec2::new(120.0, 100.0), |b| b.release(MouseButton::Left));

        let camera = app.world().resource::<CameraState>();
        assert_eq!(camera.position(), Vec2::new(-20.0, 0.0));
        assert_eq!(clicks(&app), 0);
        assert!(!app.world().resource::<PointerState>().is_dragging());
    }

    #[test]
    fn still_press_and_release_writes_a_click() {
        let mut app = pointer_app();
        let at = Vec2::new(300.0, 200.0);
        step(&mut app, at, |b| b.press(MouseButton::Left));
        step(&mut app, at, |b| b.release(MouseButton::Left));

        assert_eq!(clicks(&app), 1);
        assert_eq!(app.world().resource::<CameraState>().position(), Vec2::ZERO);
    }

    #[test]
    fn press_over_ui_is_ignored() {
        let mut app = pointer_app();
        app.world_mut().spawn(Interaction::Pressed);
        let at = Vec2::new(300.0, 200.0);
        step(&mut app, at, |b| b.press(MouseButton::Left));
        step(&mut app, Vec2::new(340.0, 200.0), |_| {});
        step(&mut app, at, |b| b.release(MouseButton::Left));

        assert_eq!(clicks(&app), 0);
        assert_eq!(app.world().resource::<CameraState>().position(), Vec2::ZERO);
    }
}
