use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;
use hexx::Hex;
use serde::{Deserialize, Serialize};

use super::loader::HexMapAsset;
use crate::math;

/// How hard the puzzle guarding a hex is. Purely cosmetic here (glow strength).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Missing or unrecognised difficulty in the source data.
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Unknown => "unknown",
        })
    }
}

/// A single map tile as provided by the data source.
#[derive(Clone, Debug, PartialEq)]
pub struct HexRecord {
    /// Unique identifier within the map.
    pub id: String,
    /// Axial coordinate (`x` = q, `y` = r).
    pub coord: Hex,
    /// Owning team name; `None` while neutral.
    pub owner: Option<String>,
    pub difficulty: Difficulty,
}

impl HexRecord {
    pub fn new(id: impl Into<String>, q: i32, r: i32) -> Self {
        Self {
            id: id.into(),
            coord: Hex::new(q, r),
            owner: None,
            difficulty: Difficulty::Unknown,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// World-space centre of this hex.
    pub fn center(&self) -> Vec2 {
        math::hex_to_pixel(self.coord)
    }
}

/// The loaded map: hex records in source order.
///
/// Order matters: hit-testing returns the first record whose hit circle
/// contains the point, so overlapping circles near a shared edge resolve to
/// whichever hex the source listed first.
#[derive(Resource, Default, Debug)]
pub struct HexMap {
    records: Vec<HexRecord>,
}

impl HexMap {
    #[cfg_attr(not(test), expect(dead_code, reason = "the app fills the map through apply_load"))]
    pub fn new(records: Vec<HexRecord>) -> Self {
        let mut map = Self::default();
        map.replace(records);
        map
    }

    /// Swaps in a new record list wholesale, keeping the first of any duplicate ids.
    pub fn replace(&mut self, records: Vec<HexRecord>) {
        let mut seen = HashSet::new();
        self.records = records
            .into_iter()
            .filter(|hex| {
                let fresh = seen.insert(hex.id.clone());
                if !fresh {
                    warn!("Dropping duplicate hex id {}", hex.id);
                }
                fresh
            })
            .collect();
    }

    /// Applies the outcome of the single best-effort load from `source`.
    ///
    /// On failure the error is logged and the store is left untouched.
    pub fn apply_load<E: fmt::Display>(&mut self, source: &str, result: Result<Vec<HexRecord>, E>) {
        match result {
            Ok(records) => {
                self.replace(records);
                info!("Loaded {} hexes from {source}", self.records.len());
            }
            Err(err) => error!("Failed to load {source}: {err}"),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HexRecord> {
        self.records.iter()
    }

    /// Looks a record up by id.
    pub fn get(&self, id: &str) -> Option<&HexRecord> {
        self.records.iter().find(|hex| hex.id == id)
    }

    /// First hex (in source order) whose hit circle contains `world`.
    pub fn hit_test(&self, world: Vec2) -> Option<&HexRecord> {
        self.records
            .iter()
            .find(|hex| math::within_hit_radius(hex.center(), world))
    }

    /// Records a change of ownership. Returns `false` if no hex has `id`.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "mutated by an out-of-scope capture collaborator")
    )]
    pub fn set_owner(&mut self, id: &str, owner: Option<String>) -> bool {
        match self.records.iter_mut().find(|hex| hex.id == id) {
            Some(hex) => {
                hex.owner = owner;
                true
            }
            None => false,
        }
    }
}

/// Handle of the in-flight map asset and whether its outcome was applied.
#[derive(Resource)]
pub struct MapSource {
    pub handle: Handle<HexMapAsset>,
    pub resolved: bool,
}
