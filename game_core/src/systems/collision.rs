use crate::{Ball, Config, Events, Paddle, Side, Surface};
use hecs::World;
use log::debug;

/// Check ball collisions with walls and paddles
///
/// Overlap is tested once per tick against the ball's current position, so a
/// fast enough ball can pass through a paddle between two ticks.
pub fn check_collisions(world: &mut World, config: &Config, surface: &Surface, events: &mut Events) {
    // Collect paddle data before borrowing the ball mutably
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        bounce_off_walls(ball, config, surface, events);

        for &(side, paddle_y) in &paddles {
            bounce_off_paddle(ball, side, paddle_y, config, surface, events);
        }
    }
}

fn bounce_off_walls(ball: &mut Ball, config: &Config, surface: &Surface, events: &mut Events) {
    let r = config.ball_radius;

    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
    if ball.pos.y + r > surface.height {
        ball.pos.y = surface.height - r;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

fn bounce_off_paddle(
    ball: &mut Ball,
    side: Side,
    paddle_y: f32,
    config: &Config,
    surface: &Surface,
    events: &mut Events,
) {
    let r = config.ball_radius;
    let face_x = config.paddle_face_x(side, surface);

    let reaches_face = match side {
        Side::Player => ball.pos.x - r < face_x,
        Side::Opponent => ball.pos.x + r > face_x,
    };
    let overlaps_vertically =
        ball.pos.y + r > paddle_y && ball.pos.y - r < paddle_y + config.paddle_height;

    if !(reaches_face && overlaps_vertically) {
        return;
    }

    // Sit the ball tangent to the face
    ball.pos.x = match side {
        Side::Player => face_x + r,
        Side::Opponent => face_x - r,
    };

    ball.vel.x *= -config.ball_speed_increase;
    if let Some(max) = config.ball_speed_max {
        ball.vel.x = ball.vel.x.clamp(-max, max);
    }

    // Spin: -1 at the top edge, 0 at centre, 1 at the bottom edge
    let half_height = config.paddle_height / 2.0;
    let hit_point = (ball.pos.y - (paddle_y + half_height)) / half_height;
    ball.vel.y += hit_point * config.ball_spin;

    events.ball_hit_paddle = true;
    debug!(
        "ball hit {:?} paddle at offset {:.2}, vel now ({:.2}, {:.2})",
        side, hit_point, ball.vel.x, ball.vel.y
    );
}
