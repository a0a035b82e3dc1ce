//! Player identity read once at startup from a client-local key-value store.
//!
//! The browser build reads `localStorage`; the native build reads a flat JSON
//! object file. Nothing here ever writes back.

#[cfg(any(not(feature = "web"), test))]
mod file_store;

use std::collections::HashMap;

use bevy::prelude::*;

#[cfg(any(not(feature = "web"), test))]
pub use file_store::JsonFileStore;

/// Shown when no username is stored.
pub const DEFAULT_USERNAME: &str = "Unknown";
/// Shown when no team is stored.
pub const DEFAULT_TEAM: &str = "Neutral";

/// Per-plugin configuration for the session source.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct SessionConfig {
    /// JSON file backing the native store.
    pub path: String,
    /// Key holding the player's username.
    pub username_key: String,
    /// Key holding the player's team.
    pub team_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: "session.json".into(),
            username_key: "playerUsername".into(),
            team_key: "playerTeam".into(),
        }
    }
}

/// Read-only string lookup, the shape of browser `localStorage.getItem`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
}

impl KeyValueStore for HashMap<String, String> {
    fn get_item(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Browser store: `window.localStorage`.
#[cfg(feature = "web")]
pub struct LocalStorage;

#[cfg(feature = "web")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok().flatten()
    }
}

/// Who is playing, for the HUD banner.
#[derive(Resource, Clone, Debug, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PlayerSession {
    pub username: String,
    pub team: String,
}

impl PlayerSession {
    /// Looks both keys up, falling back to placeholders for absent or empty values.
    pub fn read<S: KeyValueStore + ?Sized>(store: &S, cfg: &SessionConfig) -> Self {
        let lookup = |key: &str, fallback: &str| {
            store
                .get_item(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_owned())
        };
        Self {
            username: lookup(&cfg.username_key, DEFAULT_USERNAME),
            team: lookup(&cfg.team_key, DEFAULT_TEAM),
        }
    }

    pub fn banner(&self) -> String {
        format!("{} · Team {}", self.username, self.team)
    }
}

/// Reads the [`PlayerSession`] before any startup system needs it.
pub struct SessionPlugin(pub SessionConfig);

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SessionConfig>()
            .register_type::<PlayerSession>()
            .insert_resource(self.0.clone())
            .add_systems(PreStartup, load_session);
    }
}

fn load_session(mut commands: Commands, cfg: Res<SessionConfig>) {
    let store = open_store(&cfg);
    let session = PlayerSession::read(store.as_ref(), &cfg);
    info!("Player {} on team {}", session.username, session.team);
    commands.insert_resource(session);
}

#[cfg(feature = "web")]
fn open_store(_cfg: &SessionConfig) -> Box<dyn KeyValueStore> {
    Box::new(LocalStorage)
}

#[cfg(not(feature = "web"))]
fn open_store(cfg: &SessionConfig) -> Box<dyn KeyValueStore> {
    match JsonFileStore::open(&cfg.path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!("Ignoring session file {}: {err}", cfg.path);
            Box::new(JsonFileStore::default())
        }
    }
}
