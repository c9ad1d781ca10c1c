//! Game loop controller
//!
//! Owns one session and drives it: samples input, runs fixed-rate ticks,
//! forwards events to the audio/UI collaborators and paints frames. Once the
//! session is over no further ticks are scheduled.

use glam::Vec2;

use crate::config::{ConfigError, GameConfig};
use crate::consts::{SCORE_TEXT_POS, SCORE_TEXT_SIZE};
use crate::hooks::{AudioSink, GameOverUi};
use crate::input::{InputSource, sample};
use crate::sim::{GameEvent, GamePhase, GameSession, tick};
use crate::surface::{DrawSurface, Sprite, TextStyle};
use crate::timing::FixedTimestep;

pub struct GameLoop {
    config: GameConfig,
    session: GameSession,
    timestep: FixedTimestep,
}

impl GameLoop {
    /// Validate the config and start a fresh session
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let session = GameSession::new(&config, seed);
        let timestep = FixedTimestep::new(config.tick_interval_ms);
        log::info!(
            "Session started: seed={} field={}x{} tick={}ms",
            seed,
            config.field_width,
            config.field_height,
            config.tick_interval_ms
        );
        Ok(Self {
            config,
            session,
            timestep,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Run exactly one tick with the current input and dispatch its events
    pub fn step<A, U>(&mut self, input: &dyn InputSource, audio: &mut A, ui: &mut U) -> Vec<GameEvent>
    where
        A: AudioSink + ?Sized,
        U: GameOverUi + ?Sized,
    {
        let input = sample(input, self.session.player.speed);
        let events = tick(&mut self.session, &input, &self.config);

        for event in &events {
            match *event {
                GameEvent::ObstacleSpawned { .. } => audio.on_spawn(),
                GameEvent::ObstaclePassed { .. } => {}
                GameEvent::Collision { score, .. } => {
                    audio.on_collision();
                    ui.on_game_over(score);
                }
            }
        }

        if self.session.is_game_over() {
            self.timestep.reset();
        }

        events
    }

    /// Feed elapsed wall time and run however many ticks are due.
    ///
    /// Returns the number of ticks run. Stops early on game over; the rest
    /// of the backlog is discarded.
    pub fn advance<A, U>(
        &mut self,
        elapsed_ms: f64,
        input: &dyn InputSource,
        audio: &mut A,
        ui: &mut U,
    ) -> u32
    where
        A: AudioSink + ?Sized,
        U: GameOverUi + ?Sized,
    {
        if !self.is_running() {
            return 0;
        }

        let due = self.timestep.accumulate(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            self.step(input, audio, ui);
            ran += 1;
            if !self.is_running() {
                break;
            }
        }
        ran
    }

    /// Paint the current state. Skipped while the surface is not ready.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        if !surface.is_ready() {
            return;
        }

        let field = self.session.field;
        if surface.size() != field {
            log::debug!(
                "Surface is {:?} but the field is {:?}; drawing unscaled",
                surface.size(),
                field
            );
        }

        surface.clear();
        surface.draw_entity(Sprite::Player, &self.session.player.body);
        for obstacle in &self.session.obstacles {
            surface.draw_entity(Sprite::Obstacle, &obstacle.body);
        }
        surface.draw_text(
            &format!("Score: {}", self.session.score),
            Vec2::from(SCORE_TEXT_POS),
            TextStyle {
                size_px: SCORE_TEXT_SIZE,
                ..Default::default()
            },
        );
    }
}
