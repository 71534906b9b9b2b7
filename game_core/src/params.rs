/// Game tuning parameters for Pong (canvas pixels, per-tick units)
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // Gap between side edge and paddle
    pub const PADDLE_KEY_SPEED: f32 = 7.0; // px per tick with keys held
    pub const PADDLE_BOOST: f32 = 2.0; // Multiplier while boost is held

    // AI
    pub const AI_DEAD_ZONE: f32 = 18.0;
    pub const AI_STEP: f32 = 4.5;

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED_X: f32 = 6.0;
    pub const BALL_SPEED_Y: f32 = 4.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply |vx| on paddle hit
    pub const BALL_SPIN: f32 = 4.0;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Input
    pub const COMMAND_QUEUE_CAPACITY: usize = 64;
}
