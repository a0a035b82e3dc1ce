use bevy::input::mouse::MouseScrollUnit;
use bevy::prelude::*;

use crate::camera::CameraState;
use crate::map::{HexMap, HexRecord};

/// Pointer gesture state: `Idle → Dragging → Idle` on press / release / leave.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq)]
pub enum PointerState {
    #[default]
    Idle,
    Dragging {
        /// Cursor position at the previous update.
        last: Vec2,
        /// Total path length since the press.
        travel: f32,
    },
}

impl PointerState {
    pub fn press(&mut self, at: Vec2) {
        *self = Self::Dragging {
            last: at,
            travel: 0.0,
        };
    }

    /// Screen-space motion since the last update while dragging.
    pub fn move_to(&mut self, at: Vec2) -> Option<Vec2> {
        let Self::Dragging { last, travel } = self else {
            return None;
        };
        let delta = at - *last;
        *last = at;
        *travel += delta.length();
        (delta != Vec2::ZERO).then_some(delta)
    }

    /// Ends the gesture; yields the click position if it never left the slop radius.
    pub fn release(&mut self, at: Vec2, click_slop: f32) -> Option<Vec2> {
        match std::mem::take(self) {
            Self::Dragging { travel, .. } if travel <= click_slop => Some(at),
            _ => None,
        }
    }

    /// Pointer left the surface: abandon the gesture without a click.
    pub fn leave(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// The most recently clicked hex, by id. Survives closing the dialog.
#[derive(Resource, Default, Debug)]
pub struct Selection(Option<String>);

impl Selection {
    pub fn select(&mut self, id: &str) {
        self.0 = Some(id.to_owned());
    }

    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// A click on the map surface, in viewport pixels.
#[derive(Message, Clone, Copy, Debug)]
pub struct CanvasClicked {
    /// Cursor position, origin top-left.
    pub cursor: Vec2,
    /// Viewport size at the time of the click.
    pub viewport: Vec2,
}

/// Hex under a viewport pixel, if any.
pub fn pick_hex<'a>(
    camera: &CameraState,
    map: &'a HexMap,
    cursor: Vec2,
    viewport: Vec2,
) -> Option<&'a HexRecord> {
    if map.is_empty() {
        return None;
    }
    map.hit_test(camera.screen_to_world(cursor, viewport))
}

/// Converts a Bevy wheel reading into browser-style `deltaY` pixels.
///
/// Bevy reports scrolling up (away from the user) as positive `y`; `deltaY`
/// is positive when scrolling down.
pub fn wheel_delta_pixels(unit: MouseScrollUnit, y: f32, pixels_per_line: f32) -> f32 {
    let pixels = match unit {
        MouseScrollUnit::Line => y * pixels_per_line,
        MouseScrollUnit::Pixel => y,
    };
    -pixels
}
