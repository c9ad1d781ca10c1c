//! Collaborator interfaces for audio and the game-over UI
//!
//! Both are fire-and-forget: the game loop never looks at a return value.

/// Sound effects triggered by the simulation
pub trait AudioSink {
    /// A new obstacle appeared
    fn on_spawn(&mut self) {}
    /// The player crashed
    fn on_collision(&mut self) {}
}

/// Game-over presentation. The UI later asks the outer driver for a restart.
pub trait GameOverUi {
    fn on_game_over(&mut self, score: u64);
}

/// Collaborator that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {}

impl GameOverUi for Silent {
    fn on_game_over(&mut self, _score: u64) {}
}

/// A single collaborator notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCall {
    Spawn,
    Collision,
    GameOver(u64),
}

/// Records every notification in order, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct HookLog {
    pub calls: Vec<HookCall>,
}

impl HookLog {
    pub fn count(&self, call: HookCall) -> usize {
        self.calls.iter().filter(|&&c| c == call).count()
    }

    pub fn game_over_score(&self) -> Option<u64> {
        self.calls.iter().find_map(|c| match c {
            HookCall::GameOver(score) => Some(*score),
            _ => None,
        })
    }
}

impl AudioSink for HookLog {
    fn on_spawn(&mut self) {
        self.calls.push(HookCall::Spawn);
    }

    fn on_collision(&mut self) {
        self.calls.push(HookCall::Collision);
    }
}

impl GameOverUi for HookLog {
    fn on_game_over(&mut self, score: u64) {
        self.calls.push(HookCall::GameOver(score));
    }
}
