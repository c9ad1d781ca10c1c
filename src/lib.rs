//! Road Dodger - steer around oncoming traffic
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, scoring, collisions)
//! - `game`: Fixed-rate loop controller and collaborator dispatch
//! - `app`: Outer driver handling restarts
//! - `renderer`: WebGPU rendering pipeline
//! - `config` / `settings` / `storage`: Tuning, player preferences and persistence

pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod config;
pub mod game;
pub mod hooks;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod storage;
pub mod surface;
pub mod timing;

pub use app::App;
pub use config::{ConfigError, GameConfig};
pub use game::GameLoop;
pub use settings::Settings;

/// Game constants that are not part of the tunable config
pub mod consts {
    /// Maximum ticks run per display frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Score text placement (baseline-left, field pixels)
    pub const SCORE_TEXT_POS: [f32; 2] = [10.0, 30.0];
    pub const SCORE_TEXT_SIZE: f32 = 24.0;
}
