//! Obstacle spawning
//!
//! Each tick rolls once against the spawn probability, but only while the
//! active set is below the cap.

use rand::Rng;

use super::entity::Obstacle;
use crate::config::GameConfig;

/// Possibly create a new obstacle above the field.
///
/// `active_count` is the number of obstacles currently alive; `id` is the id
/// the new obstacle takes if one is produced. The RNG is not touched when the
/// cap is already reached.
pub fn maybe_spawn<R: Rng>(
    active_count: usize,
    config: &GameConfig,
    rng: &mut R,
    id: u32,
) -> Option<Obstacle> {
    if active_count >= config.max_active_obstacles {
        return None;
    }

    let o = &config.obstacle;
    if !rng.random_bool(o.spawn_probability as f64) {
        return None;
    }

    let max_x = (config.field_width - o.width).max(0.0);
    let x = rng.random_range(0.0..=max_x);
    let speed = rng.random_range(o.min_speed..=o.max_speed);

    Some(Obstacle::new(id, x, speed, config))
}
