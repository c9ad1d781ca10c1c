//! Fixed-rate simulation tick
//!
//! Core game loop step. Ordering within a tick:
//! input -> clamp -> spawn -> fall -> score -> collide -> cull.

use glam::Vec2;

use super::collision::check_collisions;
use super::motion::{move_obstacle, move_player, remove_exited};
use super::scoring::detect_passes;
use super::spawn::maybe_spawn;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::config::GameConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Player displacement in pixels for this tick
    pub delta: Vec2,
}

impl TickInput {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            delta: Vec2::new(dx, dy),
        }
    }
}

/// Advance the session by one tick and report what happened.
///
/// A session in `GameOver` is left untouched.
pub fn tick(state: &mut GameSession, input: &TickInput, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    move_player(&mut state.player, input.delta, state.field);

    let id = state.peek_entity_id();
    if let Some(obstacle) = maybe_spawn(state.obstacles.len(), config, &mut state.rng, id) {
        state.next_entity_id();
        log::debug!(
            "Spawned obstacle {} at x={:.1} speed={:.2}",
            obstacle.id,
            obstacle.body.pos.x,
            obstacle.speed
        );
        state.obstacles.push(obstacle);
        events.push(GameEvent::ObstacleSpawned { id });
    }

    for obstacle in &mut state.obstacles {
        move_obstacle(obstacle);
    }

    // Scoring must see obstacles before they are culled at the bottom edge
    for id in detect_passes(&mut state.obstacles, &state.player) {
        state.score += 1;
        log::debug!("Passed obstacle {} (score {})", id, state.score);
        events.push(GameEvent::ObstaclePassed {
            id,
            score: state.score,
        });
    }

    if let Some(hit) = check_collisions(&state.player, &state.obstacles) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Collision with obstacle {} after {} ticks, final score {}",
            hit.obstacle_id,
            state.time_ticks,
            state.score
        );
        events.push(GameEvent::Collision {
            obstacle_id: hit.obstacle_id,
            score: state.score,
        });
        return events;
    }

    remove_exited(&mut state.obstacles, state.field.y);

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Obstacle;

    fn quiet_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.obstacle.spawn_probability = 0.0;
        config
    }

    fn place(state: &mut GameSession, config: &GameConfig, x: f32, y: f32, speed: f32) -> u32 {
        let id = state.next_entity_id();
        let mut obstacle = Obstacle::new(id, x, speed, config);
        obstacle.body.pos.y = y;
        state.obstacles.push(obstacle);
        id
    }

    #[test]
    fn test_slow_obstacle_after_many_ticks() {
        let config = quiet_config();
        let mut state = GameSession::new(&config, 1);
        place(&mut state, &config, 0.0, -150.0, 0.05);

        for _ in 0..3000 {
            tick(&mut state, &TickInput::default(), &config);
        }

        assert_eq!(state.obstacles.len(), 1);
        let obstacle = &state.obstacles[0];
        assert!(obstacle.body.pos.y.abs() < 0.05, "y = {}", obstacle.body.pos.y);
        assert!(!obstacle.passed);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_spawn_then_capped() {
        let mut config = GameConfig::default();
        config.obstacle.spawn_probability = 1.0;
        config.max_active_obstacles = 1;
        let mut state = GameSession::new(&config, 7);

        let events = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(events, vec![GameEvent::ObstacleSpawned { id: 1 }]);

        let events = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.obstacles.len(), 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_pass_scores_once_then_culls() {
        let config = quiet_config();
        let mut state = GameSession::new(&config, 1);
        state.player.body.pos.y = 500.0; // trailing edge at 600
        let id = place(&mut state, &config, 0.0, 550.0, 10.0);

        // 560, 570, 580, 590, 600: not yet strictly below
        for _ in 0..5 {
            assert!(tick(&mut state, &TickInput::default(), &config).is_empty());
        }
        assert_eq!(state.score, 0);

        let events = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(events, vec![GameEvent::ObstaclePassed { id, score: 1 }]);
        assert!(state.obstacles[0].passed);

        // 610 -> 1010 takes 40 more ticks
        for _ in 0..39 {
            assert!(tick(&mut state, &TickInput::default(), &config).is_empty());
            assert_eq!(state.obstacles.len(), 1);
        }
        tick(&mut state, &TickInput::default(), &config);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_pass_and_exit_same_tick_still_scores() {
        let config = quiet_config();
        let mut state = GameSession::new(&config, 1);
        // Player at the bottom: trailing edge equals the field height
        place(&mut state, &config, 0.0, 995.0, 10.0);

        let events = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.score, 1);
        assert!(state.obstacles.is_empty());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_collision_is_terminal() {
        let config = quiet_config();
        let mut state = GameSession::new(&config, 1);
        let player = state.player.body;
        let id = place(&mut state, &config, player.pos.x, player.pos.y - 150.0, 5.0);

        let events = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(
            events,
            vec![GameEvent::Collision {
                obstacle_id: id,
                score: 0
            }]
        );
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen_obstacles = state.obstacles.clone();
        let frozen_player = state.player.clone();
        let ticks = state.time_ticks;
        for _ in 0..10 {
            let events = tick(&mut state, &TickInput::new(6.0, 6.0), &config);
            assert!(events.is_empty());
        }
        assert_eq!(state.obstacles, frozen_obstacles);
        assert_eq!(state.player, frozen_player);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_player_moves_and_stays_in_bounds() {
        let config = quiet_config();
        let mut state = GameSession::new(&config, 1);
        for _ in 0..1000 {
            tick(&mut state, &TickInput::new(-6.0, 6.0), &config);
        }
        assert_eq!(state.player.body.pos, Vec2::new(0.0, 900.0));
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs must match exactly
        let mut config = GameConfig::default();
        config.max_active_obstacles = 4;
        let mut state1 = GameSession::new(&config, 99999);
        let mut state2 = GameSession::new(&config, 99999);

        let inputs = [
            TickInput::new(6.0, 0.0),
            TickInput::new(0.0, -6.0),
            TickInput::default(),
            TickInput::new(-6.0, 0.0),
        ];

        for i in 0..400 {
            let input = &inputs[i % inputs.len()];
            let e1 = tick(&mut state1, input, &config);
            let e2 = tick(&mut state2, input, &config);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.obstacles, state2.obstacles);
    }
}
