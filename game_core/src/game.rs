//! Game state owned by the loop driver

use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, Paddle, Rect, Score, Side, TickInput,
};

/// Read-only view of everything the renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub score: Score,
}

pub struct Game {
    world: World,
    config: Config,
    score: Score,
    events: Events,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();

        // Create paddles
        create_paddle(&mut world, Side::Left, config.paddle_spawn(Side::Left));
        create_paddle(&mut world, Side::Right, config.paddle_spawn(Side::Right));

        // Create ball
        create_ball(&mut world, config.ball_spawn(), config.ball_velocity());

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
        }
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self, input: &TickInput) -> &Events {
        step(
            &mut self.world,
            &self.config,
            input,
            &mut self.score,
            &mut self.events,
        );
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn paddle(&self, side: Side) -> Rect {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.rect)
            .unwrap_or_else(|| self.config.paddle_spawn(side))
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.config.ball_spawn(), self.config.ball_velocity()))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left_paddle: self.paddle(Side::Left),
            right_paddle: self.paddle(Side::Right),
            ball: self.ball().rect,
            score: self.score,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
