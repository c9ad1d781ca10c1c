//! Game session state
//!
//! One `GameSession` is one run. A restart builds a new session rather than
//! resetting this one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Obstacle, Player};
use crate::config::GameConfig;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticks advance the simulation
    Running,
    /// Run ended on a collision; terminal
    GameOver,
}

/// Things that happened during a tick, for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new obstacle entered above the field
    ObstacleSpawned { id: u32 },
    /// An obstacle moved below the player; `score` is the total after scoring it
    ObstaclePassed { id: u32, score: u64 },
    /// The player hit an obstacle; the session is now over
    Collision { obstacle_id: u32, score: u64 },
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Obstacles passed so far; frozen once the phase is `GameOver`
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Playfield size in pixels
    pub field: Vec2,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl GameSession {
    /// Start a fresh run. The config is assumed to be validated.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            field: Vec2::new(config.field_width, config.field_height),
            player: Player::from_config(&config.player),
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Id the next spawned obstacle will take
    #[inline]
    pub fn peek_entity_id(&self) -> u32 {
        self.next_id
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let config = GameConfig::default();
        let session = GameSession::new(&config, 42);
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.field, Vec2::new(800.0, 1000.0));
        assert_eq!(session.peek_entity_id(), 1);
    }

    #[test]
    fn test_new_session_does_not_reserve_by_cap() {
        let mut config = GameConfig::default();
        config.max_active_obstacles = usize::MAX;
        let session = GameSession::new(&config, 7);
        assert_eq!(session.obstacles.capacity(), 0);
    }

    #[test]
    fn test_entity_ids_are_sequential() {
        let mut session = GameSession::new(&GameConfig::default(), 1);
        assert_eq!(session.next_entity_id(), 1);
        assert_eq!(session.next_entity_id(), 2);
        assert_eq!(session.peek_entity_id(), 3);
    }
}
