use glam::IVec2;

use crate::geometry::Rect;
use crate::params::Params;
use crate::Side;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub paddle_inset: i32,
    pub ball_size: i32,
    pub ball_speed: IVec2,
    pub dash_length: i32,
    pub dash_gap: i32,
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: IVec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
            dash_length: Params::DASH_LENGTH,
            dash_gap: Params::DASH_GAP,
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen_size(&self) -> IVec2 {
        IVec2::new(self.screen_width, self.screen_height)
    }

    pub fn screen(&self) -> Rect {
        Rect::new(0, 0, self.screen_width, self.screen_height)
    }

    /// Starting rectangle for a paddle, vertically centred and inset from its wall
    pub fn paddle_spawn(&self, side: Side) -> Rect {
        let x = match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.screen_width - self.paddle_inset - self.paddle_width,
        };
        let y = self.screen_height / 2 - self.paddle_height / 2;
        Rect::new(x, y, self.paddle_width, self.paddle_height)
    }

    /// Ball rectangle centred on the screen.
    ///
    /// Both halves use floor division, so a 15px ball on an 800x600 screen
    /// lands at (393, 293).
    pub fn ball_spawn(&self) -> Rect {
        let size = IVec2::splat(self.ball_size);
        Rect::from_pos_size(self.screen_size() / 2 - size / 2, size)
    }

    /// Velocity of the opening serve
    pub fn ball_velocity(&self) -> IVec2 {
        self.ball_speed
    }
}
