use std::collections::VecDeque;

use glam::Vec2;

use crate::error::{GameError, Result};
use crate::Params;

/// Drawing surface dimensions in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    /// Build a surface, rejecting sizes a paddle cannot fit into
    pub fn new(width: f32, height: f32, paddle_height: f32) -> Result<Self> {
        let valid = width.is_finite()
            && height.is_finite()
            && width > 0.0
            && height >= paddle_height;
        if valid {
            Ok(Self { width, height })
        } else {
            Err(GameError::InvalidSurface { width, height })
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Per-axis factor that maps positions on `self` onto `other`
    pub fn scale_to(&self, other: &Surface) -> Vec2 {
        Vec2::new(other.width / self.width, other.height / self.height)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: Params::SURFACE_WIDTH,
            height: Params::SURFACE_HEIGHT,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player = self.player.saturating_add(1);
    }

    pub fn increment_opponent(&mut self) {
        self.opponent = self.opponent.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Outcome> {
        if self.player >= win_score {
            Some(Outcome::PlayerWon)
        } else if self.opponent >= win_score {
            Some(Outcome::OpponentWon)
        } else {
            None
        }
    }
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWon,
    OpponentWon,
}

impl Outcome {
    /// Text shown on the result overlay
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerWon => "You Win!",
            Outcome::OpponentWon => "AI Wins!",
        }
    }
}

/// Game session state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Running,
    Ended(Outcome),
}

impl Session {
    pub fn is_running(&self) -> bool {
        matches!(self, Session::Running)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Session::Running => None,
            Session::Ended(outcome) => Some(*outcome),
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Keys the player paddle responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Boost,
}

/// Held-key state for keyboard control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub boost: bool,
}

impl HeldKeys {
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.up = pressed,
            Key::Down => self.down = pressed,
            Key::Boost => self.boost = pressed,
        }
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// -1 = up, 0 = hold, 1 = down
    pub fn dir(&self) -> i8 {
        match (self.up, self.down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

/// Host event, queued until the next tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer Y relative to the surface top
    PointerMove { y: f32 },
    Key { key: Key, pressed: bool },
    ReleaseAllKeys,
    Resize { width: f32, height: f32 },
    Restart,
}

/// Bounded FIFO of host commands, drained once per tick
#[derive(Debug, Clone)]
pub struct CommandQueue {
    commands: VecDeque<Command>,
    capacity: usize,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::with_capacity(Params::COMMAND_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, command: Command) -> Result<()> {
        if self.commands.len() >= self.capacity {
            return Err(GameError::QueueFull {
                capacity: self.capacity,
            });
        }
        self.commands.push_back(command);
        Ok(())
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.commands.drain(..)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
