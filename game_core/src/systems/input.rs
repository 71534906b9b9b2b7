use hecs::World;

use crate::{Config, Controller, HeldKeys, Paddle, Surface};

/// Snap human paddles so their centre sits on the pointer
///
/// A non-finite pointer position is ignored.
pub fn apply_pointer(world: &mut World, pointer_y: f32, config: &Config, surface: &Surface) {
    if !pointer_y.is_finite() {
        return;
    }
    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::Human {
            paddle.y = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0, surface);
        }
    }
}

/// Move human paddles by the held-key velocity
pub fn move_human_paddles(world: &mut World, keys: &HeldKeys, config: &Config, surface: &Surface) {
    let dir = keys.dir();
    if dir == 0 {
        return;
    }

    let mut speed = config.paddle_key_speed;
    if keys.boost {
        speed *= config.paddle_boost;
    }

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::Human {
            paddle.y = config.clamp_paddle_y(paddle.y + dir as f32 * speed, surface);
        }
    }
}
