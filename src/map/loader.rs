//! JSON asset loader for the hex list.
//!
//! The source is a JSON array of `{ id, q, r, owner?, difficulty? }` objects.
//! Ids may be strings or integers; owner may be absent or `null`; a missing
//! or unrecognised difficulty becomes [`Difficulty::Unknown`].

use bevy::asset::{AssetLoader, LoadContext, io::Reader};
use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use super::entities::{Difficulty, HexRecord};

/// The decoded hex list, consumed once by the store.
#[derive(Asset, TypePath, Debug)]
pub struct HexMapAsset {
    pub hexes: Vec<HexRecord>,
}

#[derive(Default, TypePath)]
pub struct HexMapLoader;

#[derive(Debug, Error)]
pub enum MapLoadError {
    #[error("Failed to read hex map: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse hex map: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

#[derive(Deserialize)]
struct RawHex {
    id: RawId,
    q: i32,
    r: i32,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
}

impl From<RawHex> for HexRecord {
    fn from(raw: RawHex) -> Self {
        let id = match raw.id {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        };
        let record = HexRecord::new(id, raw.q, raw.r)
            .with_difficulty(raw.difficulty.unwrap_or_default());
        match raw.owner {
            Some(owner) => record.with_owner(owner),
            None => record,
        }
    }
}

/// Decodes a JSON hex list.
pub fn parse_hexes(bytes: &[u8]) -> Result<Vec<HexRecord>, MapLoadError> {
    let raw: Vec<RawHex> = serde_json::from_slice(bytes)?;
    Ok(raw.into_iter().map(HexRecord::from).collect())
}

impl AssetLoader for HexMapLoader {
    type Asset = HexMapAsset;
    type Settings = ();
    type Error = MapLoadError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        let hexes = parse_hexes(&bytes)?;
        debug!(
            "Decoded {} hexes from {}",
            hexes.len(),
            load_context.path()
        );
        Ok(HexMapAsset { hexes })
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}
