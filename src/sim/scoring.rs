//! Pass detection and scoring
//!
//! An obstacle is passed the first tick its top edge is below the player's
//! bottom edge. The `passed` flag is the only thing preventing a second score.

use super::entity::{Obstacle, Player};

/// Mark newly passed obstacles and return their ids in iteration order.
///
/// The caller adds one point per returned id.
pub fn detect_passes(obstacles: &mut [Obstacle], player: &Player) -> Vec<u32> {
    let threshold = player.trailing_edge();
    obstacles
        .iter_mut()
        .filter(|o| !o.passed && o.body.pos.y > threshold)
        .map(|o| {
            o.passed = true;
            o.id
        })
        .collect()
}
