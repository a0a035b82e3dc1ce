use bevy::prelude::*;

use super::RenderConfig;
use crate::map::{Difficulty, HexRecord};

/// Owner name that selects the blue team colour; every other owner is red.
pub const BLUE_TEAM: &str = "blue";

/// Root entity of one rendered hex (fill mesh, glow halos as children).
#[derive(Component, Reflect)]
pub struct HexTile {
    /// Id of the [`HexRecord`] this tile draws.
    pub id: String,
}

/// Translucent halo child of a [`HexTile`].
#[derive(Component)]
pub struct HexGlow;

/// Shared unit-radius hex mesh, scaled per tile.
#[derive(Resource)]
pub struct TileMesh(pub Handle<Mesh>);

/// Glow blur radius keyed by difficulty.
pub fn glow_radius(difficulty: Difficulty) -> f32 {
    match difficulty {
        Difficulty::Easy => 5.0,
        Difficulty::Medium => 10.0,
        Difficulty::Hard => 15.0,
        Difficulty::Unknown => 0.0,
    }
}

/// Visual style of a single hex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexStyle {
    pub fill: Color,
    pub glow: f32,
}

impl HexStyle {
    pub fn for_record(hex: &HexRecord, cfg: &RenderConfig) -> Self {
        let fill = match hex.owner.as_deref() {
            None => cfg.neutral_color,
            Some(BLUE_TEAM) => cfg.blue_color,
            Some(_) => cfg.red_color,
        };
        Self {
            fill,
            glow: glow_radius(hex.difficulty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_grows_with_difficulty() {
        assert_eq!(glow_radius(Difficulty::Easy), 5.0);
        assert_eq!(glow_radius(Difficulty::Medium), 10.0);
        assert_eq!(glow_radius(Difficulty::Hard), 15.0);
        assert_eq!(glow_radius(Difficulty::Unknown), 0.0);
    }

    #[test]
    fn unowned_hex_is_neutral() {
        let cfg = RenderConfig::default();
        let style = HexStyle::for_record(&HexRecord::new("a", 0, 0), &cfg);
        assert_eq!(style.fill, cfg.neutral_color);
        assert_eq!(style.glow, 0.0);
    }

    #[test]
    fn owners_split_into_two_teams() {
        let cfg = RenderConfig::default();
        let blue = HexRecord::new("b", 0, 0).with_owner("blue");
        let red = HexRecord::new("r", 1, 0).with_owner("red");
        let other = HexRecord::new("o", 2, 0).with_owner("green");
        assert_eq!(HexStyle::for_record(&blue, &cfg).fill, cfg.blue_color);
        assert_eq!(HexStyle::for_record(&red, &cfg).fill, cfg.red_color);
        assert_eq!(HexStyle::for_record(&other, &cfg).fill, cfg.red_color);
    }

    #[test]
    fn style_carries_difficulty_glow() {
        let cfg = RenderConfig::default();
        let hex = HexRecord::new("h", 0, 0).with_difficulty(Difficulty::Hard);
        assert_eq!(HexStyle::for_record(&hex, &cfg).glow, 15.0);
    }
}
