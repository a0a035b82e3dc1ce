use bevy::prelude::*;

use crate::interaction::Selection;
use crate::map::{HexMap, HexRecord};
use crate::session::DEFAULT_TEAM;

/// Visibility and text of the hex details dialog.
#[derive(Resource, Default, Debug)]
pub struct HexDialog {
    visible: bool,
    body: String,
}

impl HexDialog {
    /// Shows the details of `hex`.
    pub fn open(&mut self, hex: &HexRecord) {
        self.body = hex_details(hex);
        self.visible = true;
    }

    /// Hides the dialog; the selection stays as it was.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Dialog text for a hex: id, owner (or `Neutral`), difficulty.
pub fn hex_details(hex: &HexRecord) -> String {
    format!(
        "Hex ID: {}\nOwner: {}\nDifficulty: {}",
        hex.id,
        hex.owner.as_deref().unwrap_or(DEFAULT_TEAM),
        hex.difficulty
    )
}

/// Placeholder attack on the selected hex.
///
/// Returns the message to surface and closes the dialog; without a selection
/// (or if the selected hex is no longer on the map) nothing happens.
pub fn attack(selection: &Selection, map: &HexMap, dialog: &mut HexDialog) -> Option<String> {
    let hex = map.get(selection.id()?)?;
    dialog.close();
    Some(format!(
        "Solve a {} problem to capture Hex {}!",
        hex.difficulty, hex.id
    ))
}

/// Transient message line under the banner.
#[derive(Resource, Default, Debug)]
pub struct Notice {
    pub text: String,
    remaining: f32,
}

impl Notice {
    pub fn show(&mut self, text: String, seconds: f32) {
        self.text = text;
        self.remaining = seconds;
    }

    /// Counts down; returns `true` on the update that expires the notice.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.text.clear();
            return true;
        }
        false
    }
}

/// Marker for the "username · Team x" label.
#[derive(Component)]
pub struct PlayerBanner;

/// Marker for the notice label.
#[derive(Component)]
pub struct NoticeText;

/// Marker for the dialog panel root.
#[derive(Component)]
pub struct DialogRoot;

/// Marker for the dialog body text.
#[derive(Component)]
pub struct DialogBody;

/// The two dialog actions.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogButton {
    Attack,
    Close,
}

impl DialogButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Close => "Close",
        }
    }
}
