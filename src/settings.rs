//! Game settings and preferences
//!
//! Persisted separately from the leaderboard under their own key.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, StorageError};
use crate::player::PlayerName;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name used in the previous session, offered as the fallback
    pub last_player_name: Option<String>,
    /// How many times to ask for a name before falling back
    pub max_name_attempts: u32,
    /// Fixed run seed (None = seed from the clock)
    pub seed: Option<u64>,
    /// Let the autopilot play (demo mode)
    pub idle_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_player_name: None,
            max_name_attempts: 3,
            seed: None,
            idle_mode: false,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "space_jumper_settings";

    /// The remembered name, if it still passes validation
    pub fn remembered_name(&self) -> Option<PlayerName> {
        self.last_player_name
            .as_deref()
            .and_then(|n| PlayerName::parse(n).ok())
    }

    pub fn remember_name(&mut self, name: &PlayerName) {
        self.last_player_name = Some(name.as_str().to_string());
    }

    /// Load settings from storage, falling back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to storage
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string());
        store.set(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults_when_missing_or_malformed() {
        let mut store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());

        store.set(Settings::STORAGE_KEY, "[1, 2").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let mut store = MemoryStore::new();
        store.set(Settings::STORAGE_KEY, r#"{"seed": 42}"#).unwrap();

        let settings = Settings::load(&store);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.max_name_attempts, 3);
    }

    #[test]
    fn test_remembered_name_roundtrip() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::default();
        settings.remember_name(&PlayerName::parse("Astro").unwrap());
        settings.save(&mut store).unwrap();

        let loaded = Settings::load(&store);
        assert_eq!(loaded.remembered_name().unwrap().as_str(), "Astro");
    }

    #[test]
    fn test_invalid_remembered_name_ignored() {
        let settings = Settings {
            last_player_name: Some("Al".to_string()),
            ..Default::default()
        };
        assert!(settings.remembered_name().is_none());
    }
}
