use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::Window;

use tsvgrid::cli::StartupConfig;
use tsvgrid::commands::Cmd;
use tsvgrid::font::resolve_font;
use tsvgrid::messages::Msg;
use tsvgrid::model::{AppModel, ScaledMetrics};
use tsvgrid::update::update;

use super::input::InputCollector;
use crate::view::Renderer;

/// Target interval between frames
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    model: AppModel,
    config: StartupConfig,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    input: InputCollector,
    next_frame: Instant,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// First fatal error raised inside the event loop
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(model: AppModel, config: StartupConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            config,
            renderer: None,
            window: None,
            context: None,
            input: InputCollector::default(),
            next_frame: Instant::now(),
            msg_tx,
            msg_rx,
            error: None,
        }
    }

    /// Error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.config.window_size;
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(true);

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;

        let scale_factor = window.scale_factor();
        let metrics = ScaledMetrics::new(scale_factor);
        let face = resolve_font(
            self.config.font.as_deref(),
            metrics.font_size,
            scale_factor as f32,
        );
        self.model.apply_font(&face, scale_factor);

        let size = window.inner_size();
        update(&mut self.model, Msg::Resize(size.width, size.height));

        tracing::info!(
            width = size.width,
            height = size.height,
            scale_factor,
            builtin_font = face.is_builtin(),
            "Window ready"
        );

        self.renderer = Some(Renderer::new(Rc::clone(&window), &context, face)?);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                update(&mut self.model, Msg::Resize(size.width, size.height))
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.input.set_shift(mods.state().shift_key());
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input
                    .pointer_moved(position.x as f32, position.y as f32);
                None
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.input.primary_button(*state == ElementState::Pressed);
                None
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 / self.model.metrics.wheel_step
                    }
                };
                self.input.wheel(notches);
                None
            }
            WindowEvent::RedrawRequested => {
                let frame = self.input.take_frame(Instant::now());
                let cmd = update(&mut self.model, Msg::Frame(frame));
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                    self.error.get_or_insert(e);
                }
                cmd
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model, Instant::now())?;
        }
        Ok(())
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::CopyToClipboard(text) => {
                let result = arboard::Clipboard::new().and_then(|mut c| c.set_text(text));
                if let Err(e) = result {
                    let _ = self.msg_tx.send(Msg::ClipboardFailed(e.to_string()));
                }
            }
        }
    }

    fn process_async_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to create window: {}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else { return };
        if window_id != window.id() {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            self.process_cmd(cmd);
        }
        if self.error.is_some() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.process_async_messages();

        let now = Instant::now();
        if now >= self.next_frame {
            self.next_frame = now + FRAME_INTERVAL;
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
