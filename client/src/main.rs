//! Two-player desktop Pong
//!
//! Left paddle: W / S. Right paddle: Up / Down.

mod app;
mod camera;
mod glyphs;
mod input;
mod mesh;
mod pacer;
mod renderer;

use anyhow::Context;
use game_core::Config;
use winit::event_loop::EventLoop;

use app::App;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    log::info!(
        "Starting Pong: {}x{} at {} ticks/s",
        config.screen_width,
        config.screen_height,
        config.tick_rate
    );

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app).context("Event loop failed")?;

    app.into_result()?;
    log::info!("Shutting down");
    Ok(())
}
