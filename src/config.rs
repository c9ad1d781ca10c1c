//! Game configuration
//!
//! Every tunable the simulation reads lives here. A config is validated once
//! at construction; the simulation trusts it afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage;

/// Configuration-contract violations, reported before a session is built
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name} must be a positive finite number (got {value})")]
    NotPositive { name: &'static str, value: f64 },
    #[error("obstacle speed range is inverted ({min} > {max})")]
    InvertedSpeedRange { min: f32, max: f32 },
    #[error("spawn probability must be within [0, 1] (got {0})")]
    Probability(f32),
    #[error("max_active_obstacles must be at least 1")]
    ZeroCap,
    #[error("max_active_obstacles is {cap}, the limit is {limit}")]
    CapTooLarge { cap: usize, limit: usize },
    #[error("{what} ({width}x{height}) does not fit in the {field_width}x{field_height} field")]
    DoesNotFit {
        what: &'static str,
        width: f32,
        height: f32,
        field_width: f32,
        field_height: f32,
    },
    #[error("player start ({x}, {y}) is outside the field")]
    StartOutOfBounds { x: f32, y: f32 },
}

/// Player car parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels moved per tick while a direction is held
    pub speed: f32,
}

impl PlayerConfig {
    const WIDTH: f32 = 50.0;
    const HEIGHT: f32 = 100.0;
    const SPEED: f32 = 6.0;

    /// A car of the given size, centred horizontally on the bottom edge
    pub fn bottom_centre(field_width: f32, field_height: f32, width: f32, height: f32) -> Self {
        Self {
            x: field_width / 2.0 - width / 2.0,
            y: field_height - height,
            width,
            height,
            speed: Self::SPEED,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::bottom_centre(
            GameConfig::FIELD_WIDTH,
            GameConfig::FIELD_HEIGHT,
            Self::WIDTH,
            Self::HEIGHT,
        )
    }
}

/// Obstacle (bot car) parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub width: f32,
    pub height: f32,
    /// Chance per tick that an obstacle spawns (when under the cap)
    pub spawn_probability: f32,
    /// Downward speed range in pixels per tick
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 150.0,
            spawn_probability: 0.5,
            min_speed: 2.0,
            max_speed: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub player: PlayerConfig,
    pub obstacle: ObstacleConfig,
    pub max_active_obstacles: usize,
    pub tick_interval_ms: f64,
}

/// Player section as written in JSON. A missing start position is placed
/// relative to the field once its final size is known.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct PlayerFile {
    x: Option<f32>,
    y: Option<f32>,
    width: f32,
    height: f32,
    speed: f32,
}

impl Default for PlayerFile {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: PlayerConfig::WIDTH,
            height: PlayerConfig::HEIGHT,
            speed: PlayerConfig::SPEED,
        }
    }
}

/// On-disk form of `GameConfig`; every field is optional
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConfigFile {
    field_width: f32,
    field_height: f32,
    player: PlayerFile,
    obstacle: ObstacleConfig,
    max_active_obstacles: usize,
    tick_interval_ms: f64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let defaults = GameConfig::default();
        Self {
            field_width: defaults.field_width,
            field_height: defaults.field_height,
            player: PlayerFile::default(),
            obstacle: defaults.obstacle,
            max_active_obstacles: defaults.max_active_obstacles,
            tick_interval_ms: defaults.tick_interval_ms,
        }
    }
}

impl From<ConfigFile> for GameConfig {
    fn from(file: ConfigFile) -> Self {
        let p = file.player;
        let placed = PlayerConfig::bottom_centre(file.field_width, file.field_height, p.width, p.height);
        Self {
            field_width: file.field_width,
            field_height: file.field_height,
            player: PlayerConfig {
                x: p.x.unwrap_or(placed.x),
                y: p.y.unwrap_or(placed.y),
                speed: p.speed,
                ..placed
            },
            obstacle: file.obstacle,
            max_active_obstacles: file.max_active_obstacles,
            tick_interval_ms: file.tick_interval_ms,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_field(Self::FIELD_WIDTH, Self::FIELD_HEIGHT)
    }
}

impl GameConfig {
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 1000.0;

    /// Upper bound on `max_active_obstacles`
    pub const MAX_OBSTACLE_CAP: usize = 256;

    /// Default tuning for a field of the given size, player centred at the bottom
    pub fn with_field(field_width: f32, field_height: f32) -> Self {
        Self {
            field_width,
            field_height,
            player: PlayerConfig::bottom_centre(
                field_width,
                field_height,
                PlayerConfig::WIDTH,
                PlayerConfig::HEIGHT,
            ),
            obstacle: ObstacleConfig::default(),
            max_active_obstacles: 1,
            tick_interval_ms: 20.0,
        }
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration contract, returning the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("player.width", self.player.width)?;
        positive("player.height", self.player.height)?;
        positive("player.speed", self.player.speed)?;
        positive("obstacle.width", self.obstacle.width)?;
        positive("obstacle.height", self.obstacle.height)?;
        positive("obstacle.min_speed", self.obstacle.min_speed)?;
        positive("obstacle.max_speed", self.obstacle.max_speed)?;
        if !(self.tick_interval_ms.is_finite() && self.tick_interval_ms > 0.0) {
            return Err(ConfigError::NotPositive {
                name: "tick_interval_ms",
                value: self.tick_interval_ms,
            });
        }

        let o = &self.obstacle;
        if o.min_speed > o.max_speed {
            return Err(ConfigError::InvertedSpeedRange {
                min: o.min_speed,
                max: o.max_speed,
            });
        }
        if !(0.0..=1.0).contains(&o.spawn_probability) {
            // NaN also lands here
            return Err(ConfigError::Probability(o.spawn_probability));
        }
        if self.max_active_obstacles == 0 {
            return Err(ConfigError::ZeroCap);
        }
        if self.max_active_obstacles > Self::MAX_OBSTACLE_CAP {
            return Err(ConfigError::CapTooLarge {
                cap: self.max_active_obstacles,
                limit: Self::MAX_OBSTACLE_CAP,
            });
        }

        self.fits("player", self.player.width, self.player.height)?;
        // Obstacles start above the field, so only the width has to fit
        self.fits("obstacle", o.width, 0.0)?;

        let p = &self.player;
        if !(p.x.is_finite() && p.y.is_finite())
            || p.x < 0.0
            || p.y < 0.0
            || p.x + p.width > self.field_width
            || p.y + p.height > self.field_height
        {
            return Err(ConfigError::StartOutOfBounds { x: p.x, y: p.y });
        }

        Ok(())
    }

    fn fits(&self, what: &'static str, width: f32, height: f32) -> Result<(), ConfigError> {
        if width > self.field_width || height > self.field_height {
            return Err(ConfigError::DoesNotFit {
                what,
                width,
                height,
                field_width: self.field_width,
                field_height: self.field_height,
            });
        }
        Ok(())
    }

    /// LocalStorage key for config overrides
    pub const STORAGE_KEY: &'static str = "road_dodger_config";

    /// Stored override if present and valid, otherwise `default`
    pub fn load_or(default: Self) -> Self {
        let Some(json) = storage::read(Self::STORAGE_KEY) else {
            return default;
        };
        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config override from LocalStorage");
                config
            }
            Err(e) => {
                log::warn!("Ignoring stored config: {}", e);
                default
            }
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive {
            name,
            value: value as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        GameConfig::default().validate().unwrap();
        let config = GameConfig::default();
        assert_eq!(config.player.x, 375.0);
        assert_eq!(config.player.y, 900.0);
        assert_eq!(config.tick_interval_ms, 20.0);
    }

    #[test]
    fn test_rejects_degenerate_values() {
        let mut config = GameConfig::default();
        config.obstacle.min_speed = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "obstacle.min_speed", .. })
        ));

        let mut config = GameConfig::default();
        config.obstacle.min_speed = 8.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedSpeedRange { .. })
        ));

        let mut config = GameConfig::default();
        config.max_active_obstacles = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroCap)));

        let mut config = GameConfig::default();
        config.obstacle.spawn_probability = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Probability(_))));

        let mut config = GameConfig::default();
        config.obstacle.spawn_probability = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Probability(_))));

        let mut config = GameConfig::default();
        config.tick_interval_ms = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_entities_larger_than_field() {
        let mut config = GameConfig::default();
        config.obstacle.width = 900.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DoesNotFit { what: "obstacle", .. })
        ));

        let mut config = GameConfig::default();
        config.player.x = 790.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            GameConfig::from_json(r#"{ "max_active_obstacles": 3, "tick_interval_ms": 16 }"#)
                .unwrap();
        assert_eq!(config.max_active_obstacles, 3);
        assert_eq!(config.tick_interval_ms, 16.0);
        assert_eq!(config.obstacle, ObstacleConfig::default());
    }

    #[test]
    fn test_partial_nested_sections() {
        let config =
            GameConfig::from_json(r#"{ "obstacle": { "spawn_probability": 0.8 } }"#).unwrap();
        assert_eq!(config.obstacle.spawn_probability, 0.8);
        assert_eq!(config.obstacle.width, 150.0);
        assert_eq!(config.obstacle.max_speed, 6.0);

        let config = GameConfig::from_json(r#"{ "player": { "speed": 9 } }"#).unwrap();
        assert_eq!(config.player.speed, 9.0);
        assert_eq!(config.player, PlayerConfig { speed: 9.0, ..PlayerConfig::default() });
    }

    #[test]
    fn test_player_start_follows_field() {
        let config = GameConfig::from_json(r#"{ "field_width": 400, "field_height": 600 }"#).unwrap();
        assert_eq!(config, GameConfig::with_field(400.0, 600.0));
        assert_eq!((config.player.x, config.player.y), (175.0, 500.0));

        // Resized car is still placed flush with the bottom edge
        let config = GameConfig::from_json(
            r#"{ "field_width": 400, "field_height": 600, "player": { "width": 80, "height": 120 } }"#,
        )
        .unwrap();
        assert_eq!((config.player.x, config.player.y), (160.0, 480.0));

        // An explicit start is kept as written
        let config = GameConfig::from_json(r#"{ "player": { "x": 10, "y": 20 } }"#).unwrap();
        assert_eq!((config.player.x, config.player.y), (10.0, 20.0));
    }

    #[test]
    fn test_serialized_config_reads_back() {
        let config = GameConfig::with_field(600.0, 900.0);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_oversized_cap() {
        let json = format!(r#"{{ "max_active_obstacles": {} }}"#, usize::MAX);
        assert!(matches!(
            GameConfig::from_json(&json),
            Err(ConfigError::CapTooLarge { cap: usize::MAX, .. })
        ));

        let mut config = GameConfig::default();
        config.max_active_obstacles = GameConfig::MAX_OBSTACLE_CAP;
        assert!(config.validate().is_ok());
        config.max_active_obstacles += 1;
        assert!(matches!(config.validate(), Err(ConfigError::CapTooLarge { .. })));
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "max_active_obstacles": 0 }"#),
            Err(ConfigError::ZeroCap)
        ));
    }

    #[test]
    fn test_load_or_falls_back_without_storage() {
        let fallback = GameConfig::with_field(400.0, 600.0);
        assert_eq!(GameConfig::load_or(fallback.clone()), fallback);
    }
}
