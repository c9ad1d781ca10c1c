//! Drawing surface abstraction
//!
//! The game loop only issues these calls; how pixels reach the screen is up
//! to the implementation (see `renderer::QuadBatch`).

use glam::Vec2;

use crate::sim::Entity;

/// Visual handle for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Obstacle,
}

/// Text appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub color: [f32; 4],
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_px: 24.0,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

pub trait DrawSurface {
    /// Field size in pixels
    fn size(&self) -> Vec2;

    /// Whether the sprites are loaded and drawing makes sense
    fn is_ready(&self) -> bool {
        true
    }

    fn clear(&mut self);

    fn draw_entity(&mut self, sprite: Sprite, entity: &Entity);

    /// Draw `text` with its baseline-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
}
