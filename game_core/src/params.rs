/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (pixels)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 10; // pixels per tick
    pub const PADDLE_INSET: i32 = 30; // gap between side wall and paddle

    // Ball
    pub const BALL_SIZE: i32 = 15;
    pub const BALL_SPEED_X: i32 = 5;
    pub const BALL_SPEED_Y: i32 = 5;

    // Centre line
    pub const DASH_LENGTH: i32 = 10;
    pub const DASH_GAP: i32 = 10;

    // Loop
    pub const TICK_RATE: u32 = 60;
}
