use hecs::World;

use crate::{Ball, Config, Controller, Paddle, Surface};

/// Reactive dead-zone controller: step toward the ball's Y, never predicts
pub fn move_ai_paddles(world: &mut World, config: &Config, surface: &Surface) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller != Controller::Ai {
            continue;
        }

        let center = paddle.center_y(config);
        if ball_y < center - config.ai_dead_zone {
            paddle.y -= config.ai_step;
        } else if ball_y > center + config.ai_dead_zone {
            paddle.y += config.ai_step;
        }
        paddle.y = config.clamp_paddle_y(paddle.y, surface);
    }
}
