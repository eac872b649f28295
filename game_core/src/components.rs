use glam::IVec2;

use crate::geometry::Rect;

/// Which player a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }

    /// Shift vertically by `delta` pixels, then pin to the screen.
    pub fn move_by(&mut self, delta: i32, screen_height: i32) {
        self.rect.pos.y += delta;
        if self.rect.top() < 0 {
            self.rect.set_top(0);
        }
        if self.rect.bottom() > screen_height {
            self.rect.set_bottom(screen_height);
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    pub fn new(rect: Rect, vel: IVec2) -> Self {
        Self { rect, vel }
    }

    /// Move by one tick of velocity and bounce off the top and bottom walls.
    ///
    /// The position is never clamped, so the ball may poke past a wall by up
    /// to one tick of travel before the flipped velocity brings it back.
    /// Returns true when the vertical velocity was reflected.
    pub fn advance(&mut self, screen_height: i32) -> bool {
        self.rect.translate(self.vel);

        if self.rect.top() <= 0 || self.rect.bottom() >= screen_height {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Serve again from the middle of the screen, heading the other way.
    /// Vertical velocity is kept as-is.
    pub fn reset(&mut self, screen_size: IVec2) {
        self.rect.pos = screen_size / 2 - self.rect.size / 2;
        self.reflect_x();
    }
}
