//! Web Audio sound effects
//!
//! Every effect is a short list of enveloped oscillator tones, synthesised on
//! the fly. No sample files are loaded.

use web_sys::{AudioContext, AudioContextState, OscillatorType};

use crate::hooks::AudioSink;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A car pulls onto the road
    CarMove,
    /// The player crashed
    GameOver,
}

/// One oscillator voice: starts at `delay`, decays exponentially over `duration`
#[derive(Clone, Copy)]
struct Tone {
    wave: OscillatorType,
    delay: f64,
    duration: f64,
    gain: f32,
    /// Frequency breakpoints `(offset from start, hz)`; the first is the start pitch
    sweep: &'static [(f64, f32)],
}

impl Tone {
    const fn new(wave: OscillatorType, delay: f64, duration: f64, gain: f32, sweep: &'static [(f64, f32)]) -> Self {
        Self {
            wave,
            delay,
            duration,
            gain,
            sweep,
        }
    }
}

/// Engine rev: low sawtooth revving up then settling
const CAR_MOVE: &[Tone] = &[Tone::new(
    OscillatorType::Sawtooth,
    0.0,
    0.35,
    0.15,
    &[(0.0, 80.0), (0.15, 160.0), (0.35, 110.0)],
)];

/// Crash thud, then a falling four-note run
const GAME_OVER: &[Tone] = &[
    Tone::new(OscillatorType::Square, 0.0, 0.25, 0.4, &[(0.0, 120.0), (0.25, 40.0)]),
    Tone::new(OscillatorType::Sine, 0.3, 0.3, 0.3, &[(0.0, 400.0)]),
    Tone::new(OscillatorType::Sine, 0.5, 0.3, 0.3, &[(0.0, 350.0)]),
    Tone::new(OscillatorType::Sine, 0.7, 0.3, 0.3, &[(0.0, 300.0)]),
    Tone::new(OscillatorType::Sine, 0.9, 0.3, 0.3, &[(0.0, 200.0)]),
];

impl SoundEffect {
    fn tones(self) -> &'static [Tone] {
        match self {
            SoundEffect::CarMove => CAR_MOVE,
            SoundEffect::GameOver => GAME_OVER,
        }
    }
}

pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_volume(),
        }
    }

    /// Browsers keep the context suspended until a user gesture
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
    }

    pub fn play(&self, effect: SoundEffect) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        self.resume();

        for tone in effect.tones() {
            if self.schedule(ctx, tone).is_none() {
                log::debug!("Dropped {:?} tone", effect);
            }
        }
    }

    fn schedule(&self, ctx: &AudioContext, tone: &Tone) -> Option<()> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;
        osc.set_type(tone.wave);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        let start = ctx.current_time() + tone.delay;
        let end = start + tone.duration;

        let envelope = gain.gain();
        envelope.set_value_at_time(self.volume * tone.gain, start).ok()?;
        envelope.exponential_ramp_to_value_at_time(0.01, end).ok()?;

        let pitch = osc.frequency();
        let (first, rest) = tone.sweep.split_first()?;
        pitch.set_value_at_time(first.1, start + first.0).ok()?;
        for &(offset, hz) in rest {
            pitch.exponential_ramp_to_value_at_time(hz, start + offset).ok()?;
        }

        osc.start_with_when(start).ok()?;
        osc.stop_with_when(end + 0.05).ok()?;
        Some(())
    }
}

impl AudioSink for AudioManager {
    fn on_spawn(&mut self) {
        self.play(SoundEffect::CarMove);
    }

    fn on_collision(&mut self) {
        self.play(SoundEffect::GameOver);
    }
}
