//! Directional input
//!
//! Event callbacks only flip held-direction flags here; the game loop samples
//! the result once per tick. Nothing is queued.

use crate::sim::{GameSession, TickInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A steering direction from a key or touch button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// Sign along the axis in screen space (y grows downward)
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left | Direction::Up => -1.0,
            Direction::Right | Direction::Down => 1.0,
        }
    }

    /// Map a `KeyboardEvent.key` value (arrows or WASD)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Anything that can report a per-axis steering value in `[-1, 1]`
pub trait InputSource {
    fn axis_delta(&self, axis: Axis) -> f32;
}

/// Build the tick input by scaling the sampled axes by the player's speed
pub fn sample(source: &dyn InputSource, speed: f32) -> TickInput {
    TickInput::new(
        source.axis_delta(Axis::Horizontal) * speed,
        source.axis_delta(Axis::Vertical) * speed,
    )
}

/// Held state of one axis. The most recent press wins while both are held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct AxisState {
    negative: bool,
    positive: bool,
    value: f32,
}

impl AxisState {
    fn press(&mut self, sign: f32) {
        if sign < 0.0 {
            self.negative = true;
        } else {
            self.positive = true;
        }
        self.value = sign;
    }

    fn release(&mut self, sign: f32) {
        if sign < 0.0 {
            self.negative = false;
        } else {
            self.positive = false;
        }
        self.value = match (self.negative, self.positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            (false, false) => 0.0,
            (true, true) => self.value,
        };
    }
}

/// Keyboard and touch-button state shared with event callbacks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    horizontal: AxisState,
    vertical: AxisState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, dir: Direction) {
        self.axis_mut(dir.axis()).press(dir.sign());
    }

    /// Releasing a direction stops movement on that axis unless the opposite is held
    pub fn release(&mut self, dir: Direction) {
        self.axis_mut(dir.axis()).release(dir.sign());
    }

    /// Forget everything held (used on restart and focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }
}

impl InputSource for InputState {
    fn axis_delta(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal.value,
            Axis::Vertical => self.vertical.value,
        }
    }
}

/// Demo driver: sidesteps the nearest obstacle that is heading for the player
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    horizontal: f32,
}

impl Autopilot {
    /// Extra clearance kept on each side of the player
    const MARGIN: f32 = 10.0;

    pub fn steer(session: &GameSession) -> Self {
        let player = &session.player.body;
        let left = player.pos.x - Self::MARGIN;
        let right = player.right() + Self::MARGIN;

        // Lowest obstacle above the player whose column overlaps ours
        let threat = session
            .obstacles
            .iter()
            .filter(|o| !o.passed && o.body.pos.y < player.bottom())
            .filter(|o| o.body.pos.x < right && o.body.right() > left)
            .max_by(|a, b| a.body.pos.y.total_cmp(&b.body.pos.y));

        let Some(threat) = threat else {
            return Self::default();
        };

        let room_left = threat.body.pos.x;
        let room_right = session.field.x - threat.body.right();
        let horizontal = if room_left >= player.width() + Self::MARGIN
            && (room_left >= room_right || room_right < player.width() + Self::MARGIN)
        {
            -1.0
        } else {
            1.0
        };

        Self { horizontal }
    }
}

impl InputSource for Autopilot {
    fn axis_delta(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::Obstacle;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("d"), Some(Direction::Right));
        assert_eq!(Direction::from_key("W"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("x"), None);
    }

    #[test]
    fn test_press_and_release_both_axes() {
        let mut input = InputState::new();
        input.press(Direction::Right);
        input.press(Direction::Up);
        assert_eq!(input.axis_delta(Axis::Horizontal), 1.0);
        assert_eq!(input.axis_delta(Axis::Vertical), -1.0);

        input.release(Direction::Right);
        input.release(Direction::Up);
        assert_eq!(input.axis_delta(Axis::Horizontal), 0.0);
        assert_eq!(input.axis_delta(Axis::Vertical), 0.0);
    }

    #[test]
    fn test_opposite_keys() {
        let mut input = InputState::new();
        input.press(Direction::Left);
        input.press(Direction::Right);
        assert_eq!(input.axis_delta(Axis::Horizontal), 1.0);

        // Releasing the newer key falls back to the one still held
        input.release(Direction::Right);
        assert_eq!(input.axis_delta(Axis::Horizontal), -1.0);
    }

    #[test]
    fn test_sampling_is_non_destructive() {
        let mut input = InputState::new();
        input.press(Direction::Down);
        let a = sample(&input, 6.0);
        let b = sample(&input, 6.0);
        assert_eq!(a, b);
        assert_eq!(a, TickInput::new(0.0, 6.0));

        input.clear();
        assert_eq!(sample(&input, 6.0), TickInput::default());
    }

    #[test]
    fn test_autopilot_dodges() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, 1);
        assert_eq!(Autopilot::steer(&session).axis_delta(Axis::Horizontal), 0.0);

        // Obstacle slightly right of centre: more room on the left
        let mut obstacle = Obstacle::new(1, 380.0, 3.0, &config);
        obstacle.body.pos.y = 500.0;
        session.obstacles.push(obstacle);
        assert_eq!(Autopilot::steer(&session).axis_delta(Axis::Horizontal), -1.0);

        // Obstacle hugging the left wall: go right
        session.obstacles[0].body.pos.x = 0.0;
        session.player.body.pos.x = 100.0;
        assert_eq!(Autopilot::steer(&session).axis_delta(Axis::Horizontal), 1.0);
    }
}
