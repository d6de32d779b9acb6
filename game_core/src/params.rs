/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window (pixels)
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 80;
    pub const PADDLE_SPEED: i32 = 10; // pixels per delta unit

    // Ball
    pub const BALL_RADIUS: i32 = 10;
    pub const BALL_SPEED_X_MIN: i32 = 4;
    pub const BALL_SPEED_X_MAX: i32 = 6;
    pub const BALL_SPEED_Y_MIN: i32 = 1;
    pub const BALL_SPEED_Y_MAX: i32 = 4;

    // Timing
    pub const DELTA_DIVISOR_MS: u32 = 10; // one delta unit per 10 ms elapsed
    pub const FRAME_DELAY_MS: u64 = 16; // ~60 Hz
}
