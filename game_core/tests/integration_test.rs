use game_core::render::{DrawCommand, DrawList};
use game_core::*;
use glam::Vec2;

#[derive(Default)]
struct RecordingOverlay {
    messages: Vec<String>,
    visible: bool,
}

impl Overlay for RecordingOverlay {
    fn show(&mut self, message: &str) {
        self.messages.push(message.to_string());
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

fn paddle_y(game: &Game, side: Side) -> f32 {
    game.paddle(side).unwrap().y
}

fn assert_paddles_in_bounds(game: &Game) {
    let max = game.surface().height - game.config().paddle_height;
    for side in [Side::Player, Side::Opponent] {
        let y = paddle_y(game, side);
        assert!((0.0..=max).contains(&y), "{:?} paddle out of bounds: {}", side, y);
    }
}

#[test]
fn test_first_tick_scenario() {
    let mut game = Game::with_seed(1);
    game.set_ball(Vec2::new(400.0, 300.0), Vec2::new(6.0, 4.0));

    game.tick();

    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(406.0, 304.0));
    assert_eq!(ball.vel, Vec2::new(6.0, 4.0));
}

#[test]
fn test_ball_rising_into_top_wall() {
    let mut game = Game::with_seed(1);
    // Straight up so the ball cannot leave sideways first
    game.set_ball(Vec2::new(400.0, 300.0), Vec2::new(0.0, -4.0));

    let mut bounced = false;
    for _ in 0..200 {
        game.tick();
        if game.events().ball_hit_wall {
            bounced = true;
            break;
        }
    }

    assert!(bounced);
    let ball = game.ball().unwrap();
    assert_eq!(ball.pos.y, 12.0, "Tangent to the top wall");
    assert_eq!(ball.vel.y, 4.0, "Vertical velocity flipped");
}

#[test]
fn test_pointer_above_surface_clamps_to_zero() {
    let mut game = Game::with_seed(1);
    game.push(Command::PointerMove { y: 0.0 }).unwrap();
    game.tick();
    assert_eq!(paddle_y(&game, Side::Player), 0.0);

    // Requesting a top of -50 stores 0
    let y = -50.0 + game.config().paddle_height / 2.0;
    game.push(Command::PointerMove { y }).unwrap();
    game.tick();
    assert_eq!(paddle_y(&game, Side::Player), 0.0);
}

#[test]
fn test_paddles_stay_in_bounds_under_any_input() {
    let mut game = Game::with_seed(9);
    let inputs = [
        -1.0e6,
        -500.0,
        0.0,
        f32::NAN,
        37.5,
        600.0,
        f32::INFINITY,
        1.0e6,
        f32::NEG_INFINITY,
        f32::MAX,
    ];

    for (i, y) in inputs.iter().cycle().take(400).enumerate() {
        game.push(Command::PointerMove { y: *y }).unwrap();
        game.push(Command::Key {
            key: Key::Up,
            pressed: i % 3 == 0,
        })
        .unwrap();
        game.push(Command::Key {
            key: Key::Boost,
            pressed: i % 2 == 0,
        })
        .unwrap();
        if game.tick() != Session::Running {
            game.push(Command::Restart).unwrap();
        }
        assert_paddles_in_bounds(&game);
    }
}

#[test]
fn test_each_point_increments_one_counter() {
    let mut game = Game::with_seed(3);
    let mut last = game.score();

    for _ in 0..5000 {
        if game.tick() != Session::Running {
            break;
        }
        let score = game.score();
        let delta = (score.player - last.player) + (score.opponent - last.opponent);
        assert!(delta <= 1, "At most one point per tick");
        if delta == 1 {
            let events = game.events();
            assert!(events.player_scored != events.opponent_scored);
        }
        last = score;
    }
}

#[test]
fn test_full_match_ends_and_restarts() {
    let mut driver = LoopDriver::new(
        Game::with_seed(11),
        ManualScheduler::default(),
        RecordingOverlay::default(),
        DrawList::new(),
    );
    driver.start();

    // Player paddle parked at the top; play until someone reaches five
    driver.submit(Command::PointerMove { y: 0.0 }).unwrap();
    let mut frames = 0;
    while driver.is_frame_pending() && frames < 100_000 {
        driver.frame();
        frames += 1;
    }

    let game = driver.game();
    let outcome = game.session().outcome().expect("match should finish");
    let winner_score = match outcome {
        Outcome::PlayerWon => game.score().player,
        Outcome::OpponentWon => game.score().opponent,
    };
    assert_eq!(winner_score, 5);
    assert!(driver.overlay().visible);
    assert_eq!(driver.overlay().messages, vec![outcome.message().to_string()]);

    let frozen = driver.game().ball().unwrap().pos;
    let player_y = paddle_y(driver.game(), Side::Player);
    let opponent_y = paddle_y(driver.game(), Side::Opponent);
    driver.submit(Command::PointerMove { y: 500.0 }).unwrap();
    driver
        .submit(Command::Key {
            key: Key::Down,
            pressed: true,
        })
        .unwrap();
    driver.frame();
    assert_eq!(driver.game().ball().unwrap().pos, frozen);
    assert_eq!(paddle_y(driver.game(), Side::Player), player_y);
    assert_eq!(paddle_y(driver.game(), Side::Opponent), opponent_y);
    assert!(!driver.is_frame_pending());

    driver.restart().unwrap();

    let game = driver.game();
    assert_eq!(game.session(), Session::Running);
    assert_eq!(game.score(), Score::new());
    assert_eq!(paddle_y(game, Side::Player), 255.0);
    assert_eq!(paddle_y(game, Side::Opponent), 255.0);
    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    assert!(ball.vel.x != 0.0 && ball.vel.y != 0.0);
    assert!(!driver.overlay().visible);
    assert!(driver.is_frame_pending());
}

#[test]
fn test_resize_rescales_and_renders_new_layout() {
    let mut driver = LoopDriver::new(
        Game::with_seed(2),
        ManualScheduler::default(),
        RecordingOverlay::default(),
        DrawList::new(),
    );
    driver.start();
    driver.game_mut().set_ball(Vec2::new(200.0, 150.0), Vec2::ZERO);

    driver
        .submit(Command::Resize {
            width: 1000.0,
            height: 300.0,
        })
        .unwrap();
    driver.target_mut().clear_commands();
    driver.frame();

    let game = driver.game();
    assert_eq!(game.ball().unwrap().pos, Vec2::new(250.0, 75.0));
    assert_eq!(game.session(), Session::Running);
    assert_paddles_in_bounds(game);

    let commands = &driver.target().commands;
    assert_eq!(
        commands[0],
        DrawCommand::Clear {
            width: 1000.0,
            height: 300.0
        }
    );
    assert!(commands.iter().any(|c| matches!(
        c,
        DrawCommand::FillRect { x, .. } if *x == 1000.0 - 20.0 - 12.0
    )));
}

#[test]
fn test_stopped_loop_stays_stopped() {
    let mut driver = LoopDriver::new(
        Game::with_seed(4),
        ManualScheduler::default(),
        RecordingOverlay::default(),
        DrawList::new(),
    );
    driver.start();
    driver.frame();
    driver.stop();

    for y in [10.0, 200.0, 450.0] {
        driver.submit(Command::PointerMove { y }).unwrap();
    }
    driver.submit(Command::ReleaseAllKeys).unwrap();

    assert!(!driver.is_frame_pending());
    assert_eq!(driver.scheduler().requested, 2);
    assert_eq!(driver.scheduler().cancelled, 1);
}

#[test]
fn test_overflowing_queue_reports_error() {
    let mut game = Game::with_seed(1);
    for _ in 0..Params::COMMAND_QUEUE_CAPACITY {
        game.push(Command::ReleaseAllKeys).unwrap();
    }
    assert_eq!(
        game.push(Command::Restart),
        Err(GameError::QueueFull {
            capacity: Params::COMMAND_QUEUE_CAPACITY
        })
    );

    game.tick();
    assert_eq!(game.pending_commands(), 0);
    assert!(game.push(Command::Restart).is_ok());
}
