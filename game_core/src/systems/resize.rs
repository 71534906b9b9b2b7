use crate::{Ball, Config, Paddle, Surface};
use hecs::World;

/// Rescale every position from `from` onto `to`, keeping relative placement
pub fn rescale_world(world: &mut World, from: &Surface, to: &Surface, config: &Config) {
    let scale = from.scale_to(to);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos *= scale;
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.clamp_paddle_y(paddle.y * scale.y, to);
    }
}
