use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng, Surface};

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // Left
    Opponent, // Right
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to surface
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to the surface centre with a coarse random direction
    pub fn reset(&mut self, config: &Config, surface: &Surface, rng: &mut GameRng) {
        self.pos = surface.center();
        self.vel = Vec2::new(
            config.ball_speed_x * random_sign(rng),
            config.ball_speed_y * random_sign(rng),
        );
    }
}

fn random_sign(rng: &mut GameRng) -> f32 {
    if rng.0.gen::<f32>() > 0.5 {
        1.0
    } else {
        -1.0
    }
}
