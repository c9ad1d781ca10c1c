//! Player preferences
//!
//! Persisted separately from the game config in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::storage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overall loudness, clamped to [0, 1] when applied
    pub master_volume: f32,
    /// Effects loudness relative to master
    pub sfx_volume: f32,
    pub muted: bool,
    /// Show the on-screen arrow buttons
    pub touch_controls: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            touch_controls: true,
        }
    }
}

impl Settings {
    /// Volume actually applied to effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    pub const STORAGE_KEY: &'static str = "road_dodger_settings";

    /// Saved preferences, or defaults when nothing usable is stored
    pub fn load() -> Self {
        storage::read(Self::STORAGE_KEY)
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    log::warn!("Discarding stored settings: {}", e);
                    None
                }
            })
            .unwrap_or_default()
    }

    pub fn save(&self) {
        match serde_json::to_string(self) {
            Ok(json) if storage::write(Self::STORAGE_KEY, &json) => log::debug!("Settings saved"),
            Ok(_) => log::debug!("Settings not persisted: no storage"),
            Err(e) => log::warn!("Failed to encode settings: {}", e),
        }
    }
}
