//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod geometry;
pub mod motion;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, check_collisions};
pub use entity::{Entity, Obstacle, Player};
pub use geometry::is_overlapping;
pub use motion::{clamp_player, move_obstacle, move_player, remove_exited};
pub use scoring::detect_passes;
pub use spawn::maybe_spawn;
pub use state::{GameEvent, GamePhase, GameSession};
pub use tick::{TickInput, tick};
