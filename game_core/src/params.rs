/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and side edge
    pub const PADDLE_STEP: f32 = 10.0; // Pixels per tick, shared by player and AI

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SPEED_X: f32 = 5.0; // Pixels per tick
    pub const BALL_SPEED_Y: f32 = 3.0;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins
    pub const REPLAY_WIN_SCORES: [u8; 3] = [3, 5, 7];

    // Driver
    pub const TICKS_PER_SECOND: u32 = 60;
}
