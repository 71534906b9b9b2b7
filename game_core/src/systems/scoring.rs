use crate::{Ball, Config, Events, GameRng, Outcome, Score, Surface};
use hecs::World;
use log::info;

/// Check if ball left the surface (scoring)
///
/// Returns the outcome once a score reaches the win threshold. The ball is
/// left where it is in that case; otherwise it is served again from centre.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    surface: &Surface,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Outcome> {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_opponent();
            events.opponent_scored = true;
        } else if ball.pos.x > surface.width {
            score.increment_player();
            events.player_scored = true;
        } else {
            continue;
        }

        info!("score {} - {}", score.player, score.opponent);

        if let Some(outcome) = score.has_winner(config.win_score) {
            return Some(outcome);
        }
        ball.reset(config, surface, rng);
    }
    None
}
