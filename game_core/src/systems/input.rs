use hecs::World;

use crate::{Config, Paddle, TickInput};

/// Apply held keys to the paddles.
///
/// Up is applied before down for each paddle, so holding both nets to zero
/// unless the first move was clamped against a wall.
pub fn apply_input(world: &mut World, input: &TickInput, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let keys = input.paddle(paddle.side);
        if keys.up {
            paddle.move_by(-config.paddle_speed, config.screen_height);
        }
        if keys.down {
            paddle.move_by(config.paddle_speed, config.screen_height);
        }
    }
}
