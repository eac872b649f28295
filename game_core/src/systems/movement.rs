use crate::{Ball, Config, Events};
use hecs::World;

/// Move ball based on velocity, bouncing off the top and bottom walls
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(config.screen_height) {
            log::trace!("ball hit wall at y={}", ball.rect.top());
            events.ball_hit_wall = true;
        }
    }
}
