//! Frame builder that turns draw calls into vertices
//!
//! Entities become coloured car quads for the GPU. Text is not rasterised
//! here; runs are collected for the DOM HUD to display.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::Entity;
use crate::surface::{DrawSurface, Sprite, TextStyle};

/// A piece of text requested during the frame
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub style: TextStyle,
}

/// One frame's worth of geometry and HUD text
#[derive(Debug, Clone)]
pub struct QuadBatch {
    size: Vec2,
    ready: bool,
    vertices: Vec<Vertex>,
    text_runs: Vec<TextRun>,
    entity_count: usize,
}

impl QuadBatch {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ready: true,
            vertices: Vec::with_capacity(256),
            text_runs: Vec::new(),
            entity_count: 0,
        }
    }

    /// Mark the batch unusable (e.g. GPU not initialised yet)
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn text_runs(&self) -> &[TextRun] {
        &self.text_runs
    }

    /// Entities drawn since the last clear
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }
}

impl DrawSurface for QuadBatch {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.text_runs.clear();
        self.entity_count = 0;
        self.vertices.extend(shapes::lane_marks(self.size));
    }

    fn draw_entity(&mut self, sprite: Sprite, entity: &Entity) {
        let (body, facing_up) = match sprite {
            Sprite::Player => (colors::PLAYER_BODY, true),
            Sprite::Obstacle => (colors::OBSTACLE_BODY, false),
        };
        self.vertices
            .extend(shapes::car(entity.pos, entity.size, body, facing_up));
        self.entity_count += 1;
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.text_runs.push(TextRun {
            text: text.to_string(),
            pos,
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_frame() {
        let mut batch = QuadBatch::new(Vec2::new(800.0, 1000.0));
        assert_eq!(batch.size(), Vec2::new(800.0, 1000.0));
        batch.clear();
        let background = batch.vertices().len();

        batch.draw_entity(Sprite::Player, &Entity::new(0.0, 0.0, 50.0, 100.0));
        batch.draw_text("Score: 3", Vec2::new(10.0, 30.0), TextStyle::default());
        assert_eq!(batch.entity_count(), 1);
        assert!(batch.vertices().len() > background);

        batch.clear();
        assert_eq!(batch.entity_count(), 0);
        assert_eq!(batch.vertices().len(), background);
        assert!(batch.text_runs().is_empty());
    }

    #[test]
    fn test_sprites_use_distinct_colors() {
        let mut batch = QuadBatch::new(Vec2::new(800.0, 1000.0));
        let e = Entity::new(0.0, 0.0, 50.0, 100.0);
        batch.draw_entity(Sprite::Player, &e);
        batch.draw_entity(Sprite::Obstacle, &e);
        let v = batch.vertices();
        assert!(v.iter().any(|v| v.color == colors::PLAYER_BODY));
        assert!(v.iter().any(|v| v.color == colors::OBSTACLE_BODY));
    }
}
