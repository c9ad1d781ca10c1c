//! Player and obstacle movement

use glam::Vec2;

use super::entity::{Obstacle, Player};

/// Apply an input delta, then clamp the player inside the field.
///
/// The clamp runs even for a zero delta so the bounds invariant holds
/// unconditionally.
pub fn move_player(player: &mut Player, delta: Vec2, field: Vec2) {
    player.body.pos += delta;
    clamp_player(player, field);
}

/// Keep the whole player box within `[0, field - size]` on both axes
pub fn clamp_player(player: &mut Player, field: Vec2) {
    let max = (field - player.body.size).max(Vec2::ZERO);
    player.body.pos = player.body.pos.clamp(Vec2::ZERO, max);
}

/// Obstacles only fall; there is no horizontal motion
#[inline]
pub fn move_obstacle(obstacle: &mut Obstacle) {
    obstacle.body.pos.y += obstacle.speed;
}

/// Drop obstacles that left through the bottom, preserving order of the rest
pub fn remove_exited(obstacles: &mut Vec<Obstacle>, field_height: f32) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| !o.has_exited(field_height));
    before - obstacles.len()
}
