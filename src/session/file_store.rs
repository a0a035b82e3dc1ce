//! Native session source: a flat JSON object file.

use std::collections::HashMap;
use std::path::Path;

use bevy::prelude::*;
use thiserror::Error;

use super::KeyValueStore;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse session file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Native store: string entries of a JSON object file.
#[derive(Debug, Default)]
pub struct JsonFileStore {
    values: HashMap<String, String>,
}

impl JsonFileStore {
    /// Reads `path`; a missing file is an empty store, not an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        match std::fs::read(path.as_ref()) {
            Ok(bytes) => Self::from_json(&bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No session file at {}", path.as_ref().display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Keeps the string-valued entries of a JSON object.
    pub fn from_json(bytes: &[u8]) -> Result<Self, SessionError> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_slice(bytes)?;
        let values = raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();
        Ok(Self { values })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
