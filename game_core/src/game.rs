use glam::Vec2;
use hecs::World;
use log::{debug, info, warn};

use crate::error::Result;
use crate::systems::*;
use crate::{
    create_ball, create_paddle, Ball, Command, CommandQueue, Config, Controller, Events, GameRng,
    HeldKeys, Paddle, Score, Session, Side, Surface,
};

/// The whole world state of one Pong match
///
/// Owns the ECS world and every resource the systems need. Hosts feed it
/// commands and call `tick` once per display refresh.
pub struct Game {
    world: World,
    config: Config,
    surface: Surface,
    score: Score,
    session: Session,
    events: Events,
    keys: HeldKeys,
    commands: CommandQueue,
    rng: GameRng,
    tick: u64,
}

impl Game {
    pub fn new(config: Config, surface: Surface, mut rng: GameRng) -> Self {
        let mut world = World::new();

        let paddle_y = config.centered_paddle_y(&surface);
        create_paddle(&mut world, Side::Player, Controller::Human, paddle_y);
        create_paddle(&mut world, Side::Opponent, Controller::Ai, paddle_y);

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(&config, &surface, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            config,
            surface,
            score: Score::new(),
            session: Session::Running,
            events: Events::new(),
            keys: HeldKeys::default(),
            commands: CommandQueue::new(),
            rng,
            tick: 0,
        }
    }

    /// Default tuning on an 800x600 surface with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Config::new(), Surface::default(), GameRng::new(seed))
    }

    /// Queue a host command for the next tick
    pub fn push(&mut self, command: Command) -> Result<()> {
        self.commands.push(command)
    }

    /// Advance one tick: drain commands, then simulate if still running
    pub fn tick(&mut self) -> Session {
        self.events.clear();
        self.apply_commands();

        if !self.session.is_running() {
            return self.session;
        }
        self.tick += 1;

        move_human_paddles(&mut self.world, &self.keys, &self.config, &self.surface);
        move_ai_paddles(&mut self.world, &self.config, &self.surface);
        move_ball(&mut self.world);
        check_collisions(&mut self.world, &self.config, &self.surface, &mut self.events);

        if let Some(outcome) = check_scoring(
            &mut self.world,
            &self.config,
            &self.surface,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        ) {
            info!(
                "session ended after {} ticks: {} ({} - {})",
                self.tick,
                outcome.message(),
                self.score.player,
                self.score.opponent
            );
            self.session = Session::Ended(outcome);
        }

        self.session
    }

    /// Apply every queued command in arrival order
    ///
    /// After the session ends only restarts, resizes and key releases are
    /// honoured; paddles stay where the match left them.
    pub fn apply_commands(&mut self) {
        let pending: Vec<Command> = self.commands.drain().collect();
        for command in pending {
            let running = self.session.is_running();
            match command {
                Command::PointerMove { y } => {
                    if running {
                        apply_pointer(&mut self.world, y, &self.config, &self.surface)
                    }
                }
                Command::Key { key, pressed } => {
                    if running || !pressed {
                        self.keys.set(key, pressed)
                    }
                }
                Command::ReleaseAllKeys => self.keys.release_all(),
                Command::Resize { width, height } => {
                    if let Err(e) = self.resize(width, height) {
                        warn!("ignoring resize: {}", e);
                    }
                }
                Command::Restart => self.restart(),
            }
        }
    }

    /// Reset scores, paddles and ball, and resume play
    pub fn restart(&mut self) {
        self.score.reset();
        self.session = Session::Running;

        let paddle_y = self.config.centered_paddle_y(&self.surface);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = paddle_y;
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &self.surface, &mut self.rng);
        }
        info!("session restarted");
    }

    /// Move to a new surface size, rescaling positions proportionally
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        let next = Surface::new(width, height, self.config.paddle_height)?;
        if next == self.surface {
            return Ok(());
        }

        rescale_world(&mut self.world, &self.surface, &next, &self.config);
        info!(
            "surface resized {}x{} -> {}x{}",
            self.surface.width, self.surface.height, next.width, next.height
        );
        self.surface = next;
        Ok(())
    }

    /// Place the ball directly, bypassing a serve
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
        debug!("ball placed at {:?} with velocity {:?}", pos, vel);
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn events(&self) -> Events {
        self.events
    }

    pub fn held_keys(&self) -> HeldKeys {
        self.keys
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// Ticks simulated while running, across restarts
    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameError, Key, Outcome};

    #[test]
    fn test_new_game_is_centred() {
        let game = Game::with_seed(42);
        assert_eq!(game.paddle(Side::Player).unwrap().y, 255.0);
        assert_eq!(game.paddle(Side::Opponent).unwrap().y, 255.0);

        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel.x.abs(), 6.0);
        assert_eq!(ball.vel.y.abs(), 4.0);
        assert_eq!(game.session(), Session::Running);
    }

    #[test]
    fn test_one_tick_moves_ball() {
        let mut game = Game::with_seed(42);
        game.set_ball(Vec2::new(400.0, 300.0), Vec2::new(6.0, 4.0));

        game.tick();

        assert_eq!(game.ball().unwrap().pos, Vec2::new(406.0, 304.0));
        assert_eq!(game.events(), Events::new(), "No collision on the first tick");
        assert_eq!(game.tick_count(), 1);
    }

    #[test]
    fn test_commands_apply_before_simulation() {
        let mut game = Game::with_seed(42);
        game.push(Command::PointerMove { y: 100.0 }).unwrap();
        game.push(Command::Key {
            key: Key::Down,
            pressed: true,
        })
        .unwrap();

        game.tick();

        // Pointer snaps to 55, then the held key moves 7px in the same tick
        assert_eq!(game.paddle(Side::Player).unwrap().y, 62.0);
        assert_eq!(game.pending_commands(), 0);
    }

    #[test]
    fn test_later_pointer_move_wins() {
        let mut game = Game::with_seed(42);
        game.push(Command::PointerMove { y: 100.0 }).unwrap();
        game.push(Command::PointerMove { y: 400.0 }).unwrap();

        game.tick();

        assert_eq!(game.paddle(Side::Player).unwrap().y, 355.0);
    }

    #[test]
    fn test_ended_game_does_not_move() {
        let mut game = Game::with_seed(42);
        game.score.player = 4;
        game.set_ball(Vec2::new(795.0, 300.0), Vec2::new(10.0, 0.0));
        // Keep the AI paddle out of the way
        for (_e, paddle) in game.world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Opponent {
                paddle.y = 0.0;
            }
        }

        assert_eq!(game.tick(), Session::Ended(Outcome::PlayerWon));
        let frozen = game.ball().unwrap().pos;
        let player_y = game.paddle(Side::Player).unwrap().y;
        let opponent_y = game.paddle(Side::Opponent).unwrap().y;

        game.push(Command::PointerMove { y: 500.0 }).unwrap();
        game.push(Command::Key {
            key: Key::Down,
            pressed: true,
        })
        .unwrap();
        game.tick();
        game.tick();

        assert_eq!(game.ball().unwrap().pos, frozen);
        assert_eq!(game.paddle(Side::Player).unwrap().y, player_y);
        assert_eq!(game.paddle(Side::Opponent).unwrap().y, opponent_y);
        assert!(!game.held_keys().down, "Presses after the end are dropped");
        assert_eq!(game.score().player, 5);
    }

    #[test]
    fn test_key_release_applies_after_end() {
        let mut game = Game::with_seed(42);
        game.push(Command::Key {
            key: Key::Up,
            pressed: true,
        })
        .unwrap();
        game.tick();
        assert!(game.held_keys().up);

        game.session = Session::Ended(Outcome::OpponentWon);
        game.push(Command::Key {
            key: Key::Up,
            pressed: false,
        })
        .unwrap();
        game.tick();

        assert!(!game.held_keys().up);
    }

    #[test]
    fn test_restart_then_pointer_in_same_drain() {
        let mut game = Game::with_seed(42);
        game.session = Session::Ended(Outcome::OpponentWon);
        game.push(Command::PointerMove { y: 500.0 }).unwrap();
        game.push(Command::Restart).unwrap();
        game.push(Command::PointerMove { y: 100.0 }).unwrap();

        game.apply_commands();

        assert_eq!(game.session(), Session::Running);
        assert_eq!(game.paddle(Side::Player).unwrap().y, 55.0);
    }

    #[test]
    fn test_restart_command_resumes_play() {
        let mut game = Game::with_seed(42);
        game.session = Session::Ended(Outcome::OpponentWon);
        game.score = Score {
            player: 2,
            opponent: 5,
        };
        game.push(Command::Restart).unwrap();

        assert_eq!(game.tick(), Session::Running);
        assert_eq!(game.score(), Score::new());
    }

    #[test]
    fn test_invalid_resize_is_rejected() {
        let mut game = Game::with_seed(42);
        assert_eq!(
            game.resize(800.0, 10.0),
            Err(GameError::InvalidSurface {
                width: 800.0,
                height: 10.0
            })
        );
        assert_eq!(*game.surface(), Surface::default());
    }

    #[test]
    fn test_resize_keeps_session() {
        let mut game = Game::with_seed(42);
        game.session = Session::Ended(Outcome::PlayerWon);
        game.resize(1600.0, 1200.0).unwrap();
        assert_eq!(game.session(), Session::Ended(Outcome::PlayerWon));
        assert_eq!(game.paddle(Side::Player).unwrap().y, 510.0);
    }
}
