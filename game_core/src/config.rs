use crate::{Params, Side, Surface};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_key_speed: f32,
    pub paddle_boost: f32,
    pub ai_dead_zone: f32,
    pub ai_step: f32,
    pub ball_radius: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub ball_speed_increase: f32,
    /// Ceiling for |vx| after a paddle hit. `None` keeps the ramp unbounded.
    pub ball_speed_max: Option<f32>,
    pub ball_spin: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_key_speed: Params::PADDLE_KEY_SPEED,
            paddle_boost: Params::PADDLE_BOOST,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ai_step: Params::AI_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_speed_max: None,
            ball_spin: Params::BALL_SPIN,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the left X of a paddle's rectangle
    pub fn paddle_x(&self, side: Side, surface: &Surface) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => surface.width - self.paddle_margin - self.paddle_width,
        }
    }

    /// X of the face the ball bounces off
    pub fn paddle_face_x(&self, side: Side, surface: &Surface) -> f32 {
        match side {
            Side::Player => self.paddle_margin + self.paddle_width,
            Side::Opponent => surface.width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp paddle top Y to surface bounds
    pub fn clamp_paddle_y(&self, y: f32, surface: &Surface) -> f32 {
        let max_y = (surface.height - self.paddle_height).max(0.0);
        y.clamp(0.0, max_y)
    }

    /// Top Y that centres a paddle vertically
    pub fn centered_paddle_y(&self, surface: &Surface) -> f32 {
        self.clamp_paddle_y((surface.height - self.paddle_height) / 2.0, surface)
    }
}
