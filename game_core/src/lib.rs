pub mod components;
pub mod config;
pub mod game;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the deterministic Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    input: &TickInput,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply held keys to the paddles
    apply_input(world, input, config);

    // 2. Move ball (bounces off top/bottom)
    move_ball(world, config, events);

    // 3. Check collisions (ball vs paddles)
    check_collisions(world, events);

    // 4. Check scoring (ball reached a side wall)
    check_scoring(world, config, score, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, rect: Rect) -> hecs::Entity {
    world.spawn((Paddle::new(side, rect),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, vel: glam::IVec2) -> hecs::Entity {
    world.spawn((Ball::new(rect, vel),))
}
