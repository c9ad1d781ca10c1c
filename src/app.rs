//! Outer driver
//!
//! Owns the input state and the current `GameLoop`. A restart request is only
//! honoured after game over, and it replaces the loop wholesale so nothing from
//! the previous run leaks into the next one.

use crate::config::{ConfigError, GameConfig};
use crate::game::GameLoop;
use crate::hooks::{AudioSink, GameOverUi};
use crate::input::InputState;
use crate::surface::DrawSurface;

pub struct App {
    config: GameConfig,
    game: GameLoop,
    input: InputState,
    restart_requested: bool,
    /// Runs started so far, including the current one
    runs: u32,
}

impl App {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let game = GameLoop::new(config.clone(), seed)?;
        Ok(Self {
            config,
            game,
            input: InputState::new(),
            restart_requested: false,
            runs: 1,
        })
    }

    pub fn game(&self) -> &GameLoop {
        &self.game
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Input callbacks stage key/touch state here
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// "Play Again" pressed. Ignored while a run is still going.
    pub fn request_restart(&mut self) {
        if self.game.is_running() {
            log::debug!("Restart ignored: run still in progress");
            return;
        }
        self.restart_requested = true;
    }

    /// Replace the finished loop with a fresh one if a restart is pending.
    /// Returns whether a new run started.
    pub fn apply_restart(&mut self, seed: u64) -> Result<bool, ConfigError> {
        if !self.restart_requested {
            return Ok(false);
        }
        self.restart_requested = false;
        self.game = GameLoop::new(self.config.clone(), seed)?;
        self.input.clear();
        self.runs += 1;
        log::info!("Game restarted (run {}) with seed: {}", self.runs, seed);
        Ok(true)
    }

    /// One display frame: run due ticks, then paint. Returns ticks run.
    pub fn frame<A, U>(
        &mut self,
        elapsed_ms: f64,
        audio: &mut A,
        ui: &mut U,
        surface: &mut dyn DrawSurface,
    ) -> u32
    where
        A: AudioSink + ?Sized,
        U: GameOverUi + ?Sized,
    {
        let ran = self.game.advance(elapsed_ms, &self.input, audio, ui);
        self.game.render(surface);
        ran
    }
}
