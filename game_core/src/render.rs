//! Frame rendering against an abstract 2D draw target
//!
//! `draw_frame` reads the game and issues primitive calls; it never mutates
//! state. Hosts implement `DrawTarget` over whatever surface they own.

use glam::Vec2;

use crate::{Game, Side};

pub const PLAYER_COLOR: &str = "#2ecc40";
pub const OPPONENT_COLOR: &str = "#ff4136";
pub const BALL_COLOR: &str = "#ffe066";
pub const LINE_COLOR: &str = "#fff";

pub const CENTER_DASH: [f32; 2] = [18.0, 14.0];
pub const SCORE_FONT: &str = "36px Arial";
pub const SCORE_BASELINE: f32 = 50.0;

/// Primitive operations of a 2D drawing surface
pub trait DrawTarget {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, dash: &[f32], color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Draw the whole scene for the current state
pub fn draw_frame<T: DrawTarget + ?Sized>(game: &Game, target: &mut T) {
    let config = game.config();
    let surface = game.surface();

    target.clear(surface.width, surface.height);

    let mid_x = surface.width / 2.0;
    target.stroke_dashed_line(
        Vec2::new(mid_x, 0.0),
        Vec2::new(mid_x, surface.height),
        &CENTER_DASH,
        LINE_COLOR,
    );

    for (side, color) in [(Side::Player, PLAYER_COLOR), (Side::Opponent, OPPONENT_COLOR)] {
        if let Some(paddle) = game.paddle(side) {
            target.fill_rect(
                config.paddle_x(side, surface),
                paddle.y,
                config.paddle_width,
                config.paddle_height,
                color,
            );
        }
    }

    if let Some(ball) = game.ball() {
        target.fill_circle(ball.pos, config.ball_radius, BALL_COLOR);
    }

    let score = game.score();
    target.fill_text(
        &score.player.to_string(),
        surface.width / 4.0,
        SCORE_BASELINE,
        SCORE_FONT,
        LINE_COLOR,
    );
    target.fill_text(
        &score.opponent.to_string(),
        surface.width * 3.0 / 4.0,
        SCORE_BASELINE,
        SCORE_FONT,
        LINE_COLOR,
    );
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: Vec<f32>,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
    },
}

/// Draw target that records calls instead of rasterizing them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl DrawTarget for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, dash: &[f32], color: &str) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            dash: dash.to_vec(),
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}
