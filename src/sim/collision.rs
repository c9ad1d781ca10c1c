//! Player vs obstacle collision detection
//!
//! Any overlap ends the run, so only the first hit matters.

use super::entity::{Obstacle, Player};
use super::geometry::is_overlapping;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionResult {
    /// Obstacle the player ran into (first in iteration order)
    pub obstacle_id: u32,
}

/// Test the player against every active obstacle, stopping at the first overlap
pub fn check_collisions(player: &Player, obstacles: &[Obstacle]) -> Option<CollisionResult> {
    obstacles
        .iter()
        .find(|o| is_overlapping(&player.body, &o.body))
        .map(|o| CollisionResult { obstacle_id: o.id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::entity::Entity;

    fn player() -> Player {
        Player {
            body: Entity::new(100.0, 100.0, 50.0, 100.0),
            speed: 6.0,
        }
    }

    fn obstacle_at(id: u32, x: f32, y: f32) -> Obstacle {
        let mut o = Obstacle::new(id, x, 1.0, &GameConfig::default());
        o.body.pos.y = y;
        o
    }

    #[test]
    fn test_no_obstacles_no_collision() {
        assert_eq!(check_collisions(&player(), &[]), None);
    }

    #[test]
    fn test_reports_first_overlap() {
        let obstacles = vec![
            obstacle_at(1, 400.0, 400.0),
            obstacle_at(2, 100.0, 190.0),
            obstacle_at(3, 90.0, 150.0),
        ];
        assert_eq!(
            check_collisions(&player(), &obstacles),
            Some(CollisionResult { obstacle_id: 2 })
        );
    }

    #[test]
    fn test_near_miss() {
        // Directly below the player, one pixel apart
        let obstacles = vec![obstacle_at(1, 100.0, 201.0)];
        assert_eq!(check_collisions(&player(), &obstacles), None);
    }
}
