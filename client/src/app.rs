//! Window, event loop handler and the fixed-rate game loop

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use game_core::{Config, Game};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::input::KeyState;
use crate::pacer::FramePacer;
use crate::renderer::scene::build_frame;
use crate::renderer::Renderer;

pub const WINDOW_TITLE: &str = "Pong";

pub struct App {
    game: Game,
    keys: KeyState,
    pacer: FramePacer,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let pacer = FramePacer::new(config.tick_rate, Instant::now());
        Self {
            game: Game::new(config),
            keys: KeyState::new(),
            pacer,
            window: None,
            renderer: None,
            error: None,
        }
    }

    /// The error that stopped the loop, if any
    pub fn into_result(self) -> anyhow::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let config = self.game.config();
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(config.screen_width, config.screen_height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );
        let renderer = pollster::block_on(Renderer::new(window.clone(), config))?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.pacer = FramePacer::new(config.tick_rate, Instant::now());
        log::info!("Ticking every {:?}", self.pacer.period());
        Ok(())
    }

    /// One game tick: sample input, advance the simulation, draw
    fn tick(&mut self) -> anyhow::Result<()> {
        let events = self.game.tick(&self.keys.tick_input());
        if events.ball_hit_paddle {
            log::debug!("Ball hit paddle");
        }
        self.draw()
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(());
        };
        let frame = build_frame(&self.game.snapshot(), self.game.config());
        renderer.render(&frame)
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.keys.handle_key(code, event.state);
                }
            }
            WindowEvent::Focused(false) => {
                // Key releases are not delivered while unfocused
                self.keys.release_all();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.draw() {
                    self.fail(event_loop, e);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_none() {
            return;
        }

        let now = Instant::now();
        if self.pacer.is_due(now) {
            if let Err(e) = self.tick() {
                self.fail(event_loop, e);
                return;
            }
            self.pacer.complete_tick(Instant::now());
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
    }
}
