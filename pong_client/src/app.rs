//! Window, event loop and frame pacing

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context};
use game_core::{Config, FsmState, Game, GameRng};
use wgpu::SurfaceError;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::input::Keyboard;
use crate::params::ClientParams;
use crate::renderer::Renderer;
use crate::scene;
use crate::text::{load_font, MenuTexts};

/// Everything that only exists once the window is up
struct Session {
    window: Arc<Window>,
    renderer: Renderer,
    texts: MenuTexts,
}

pub struct PongApp {
    game: Game,
    keyboard: Keyboard,
    clock: FrameClock,
    canvas: Canvas,
    session: Option<Session>,
    fatal: Option<anyhow::Error>,
}

impl PongApp {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let canvas = Canvas::new(config.window_width as u32, config.window_height as u32);
        let clock = FrameClock::new(Instant::now(), config.frame_delay);
        Self {
            game: Game::new(config, rng),
            keyboard: Keyboard::new(),
            clock,
            canvas,
            session: None,
            fatal: None,
        }
    }

    fn open_session(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Session> {
        let width = self.canvas.width();
        let height = self.canvas.height();

        let attributes = Window::default_attributes()
            .with_title(ClientParams::WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), width, height))?;

        let font = load_font(Path::new(ClientParams::FONT_PATH))?;
        let texts = MenuTexts::bake(&font, &self.game.config);

        Ok(Session {
            window,
            renderer,
            texts,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.fatal = Some(err);
        event_loop.exit();
    }

    /// Input, update, compose; the result is shown on the next redraw
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick(Instant::now(), &self.game.config);
        let state = self.game.update(&self.keyboard.snapshot(), delta);
        if state == FsmState::Terminated {
            log::info!("Quit from game over screen");
            event_loop.exit();
            return;
        }

        if let Some(session) = &self.session {
            scene::compose(&mut self.canvas, &self.game, &session.texts);
            session.window.request_redraw();
        }
    }

    fn present(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.renderer.present(&self.canvas) {
            Ok(()) => {}
            Err(err @ (SurfaceError::Lost | SurfaceError::Outdated)) => {
                log::warn!("Surface {err}, reconfiguring");
                session.renderer.reconfigure();
            }
            Err(SurfaceError::Timeout) => log::warn!("Surface timeout, frame skipped"),
            Err(SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow!("Out of GPU memory"));
            }
            Err(err) => log::warn!("Surface error: {err}"),
        }
    }
}

impl ApplicationHandler for PongApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }
        match self.open_session(event_loop) {
            Ok(session) => {
                log::info!("Window ready, waiting for SPACE");
                self.session = Some(session);
            }
            Err(err) => self.fail(event_loop, err),
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
                self.keyboard.handle_key(event.physical_key, event.state);
            }
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(session) = self.session.as_mut() {
                    session.renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.present(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_none() || self.fatal.is_some() {
            return;
        }
        if self.clock.is_due(Instant::now()) {
            self.run_frame(event_loop);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_frame()));
    }
}

/// Open the window and play until quit or close
pub fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = PongApp::new(Config::new(), GameRng::from_entropy());
    event_loop
        .run_app(&mut app)
        .context("Event loop failed")?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
