//! Player and obstacle entities
//!
//! Coordinates use the canvas convention: origin at the top-left of the field,
//! y grows downward, `pos` is the upper-left corner of the bounding box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, PlayerConfig};

/// Axis-aligned box shared by every entity. Size is fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Entity {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "entity size must be positive");
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Right edge (x + width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge (y + height)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The player's car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Entity,
    /// Pixels per tick while a direction is held
    pub speed: f32,
}

impl Player {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            body: Entity::new(config.x, config.y, config.width, config.height),
            speed: config.speed,
        }
    }

    /// Trailing edge an obstacle must cross to count as passed
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.body.bottom()
    }
}

/// A descending bot car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub body: Entity,
    /// Downward pixels per tick
    pub speed: f32,
    /// Set once the obstacle has moved below the player; guards against double scoring
    pub passed: bool,
}

impl Obstacle {
    /// New obstacle sitting just above the field at column `x`
    pub fn new(id: u32, x: f32, speed: f32, config: &GameConfig) -> Self {
        let o = &config.obstacle;
        Self {
            id,
            body: Entity::new(x, -o.height, o.width, o.height),
            speed,
            passed: false,
        }
    }

    /// Left the field through the bottom edge
    #[inline]
    pub fn has_exited(&self, field_height: f32) -> bool {
        self.body.pos.y > field_height
    }
}
