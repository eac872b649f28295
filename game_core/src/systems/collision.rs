use crate::{Ball, Events, Paddle, Rect};
use hecs::World;

/// Check ball collisions with paddles.
///
/// Any overlap flips the horizontal velocity. There is no push-out, so a ball
/// that sinks into a paddle can flip again on the following tick.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle rects first so the ball can be borrowed mutably
    let paddles: Vec<Rect> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.rect)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if paddles.iter().any(|paddle| ball.rect.intersects(paddle)) {
            ball.reflect_x();
            log::trace!("ball hit paddle at x={}", ball.rect.left());
            events.ball_hit_paddle = true;
        }
    }
}
