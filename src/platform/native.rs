//! Native shell: winit window + wgpu surface
//!
//! Collects window events into a `FrameInput`, runs one controller frame per
//! 60 Hz deadline and presents what it drew.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::{Canvas, FrameClock, FrameInput, InputEvent, Key};
use crate::consts::TARGET_FPS;
use crate::game::{Control, GameController};
use crate::renderer::{FrameBuilder, RenderState};
use crate::settings::Settings;
use crate::sim::Field;

pub const WINDOW_TITLE: &str = "Pong Ping";

/// Window and GPU context, created on `resumed` and dropped on exit
struct Graphics {
    window: Arc<Window>,
    render: RenderState,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, field: Field, scale: f32) -> anyhow::Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(field.width * scale, field.height * scale))
            .with_min_inner_size(LogicalSize::new(field.width / 2.0, field.height / 2.0));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            field,
        ))
        .context("failed to initialize renderer")?;

        Ok(Self { window, render })
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyS => Key::S,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        _ => Key::Other,
    }
}

struct App {
    game: GameController,
    settings: Settings,
    field: Field,
    gfx: Option<Graphics>,
    clock: FrameClock,
    frame: FrameBuilder,
    // Input gathered since the last frame
    held: HashSet<Key>,
    events: Vec<InputEvent>,
    /// Cursor in window pixels
    cursor: Vec2,
    /// Set when setup or rendering fails fatally
    error: Option<anyhow::Error>,
}

impl App {
    fn new(game: GameController, settings: Settings, field: Field) -> Self {
        Self {
            game,
            settings,
            field,
            gfx: None,
            clock: FrameClock::new(TARGET_FPS, Instant::now()),
            frame: FrameBuilder::new(),
            held: HashSet::new(),
            events: Vec::new(),
            cursor: Vec2::ZERO,
            error: None,
        }
    }

    fn pointer(&self) -> Vec2 {
        match &self.gfx {
            Some(gfx) => gfx.render.viewport().window_to_field(self.cursor),
            None => self.cursor,
        }
    }

    fn handle_key(&mut self, event: KeyEvent) {
        let key = match event.physical_key {
            PhysicalKey::Code(code) => map_key(code),
            PhysicalKey::Unidentified(_) => Key::Other,
        };
        match event.state {
            ElementState::Pressed => {
                self.held.insert(key);
                self.events.push(InputEvent::KeyDown {
                    key,
                    text: event.text.as_ref().map(|t| t.to_string()),
                });
            }
            ElementState::Released => {
                self.held.remove(&key);
            }
        }
    }

    /// Update (if a frame is due) and present
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.clock.is_due(now) {
            let input = FrameInput {
                held: self.held.clone(),
                events: std::mem::take(&mut self.events),
                pointer: self.pointer(),
            };
            if self.game.frame(&input) == Control::Exit {
                event_loop.exit();
                return;
            }
            self.clock.frame_done(now);
        }

        let pointer = self.pointer();
        self.game.draw(&mut self.frame, pointer);
        if self.settings.show_fps {
            let fps = format!("{:.0} FPS", self.clock.fps());
            let y = self.field.height - self.frame.measure_text(&fps).y - 8.0;
            let color = crate::renderer::colors::HIGHLIGHT;
            self.frame.draw_text(&fps, Vec2::new(8.0, y), color);
        }

        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };
        match gfx.render.render(&self.frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.render.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.error = Some(anyhow::anyhow!("GPU out of memory"));
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match Graphics::new(event_loop, self.field, self.settings.effective_window_scale()) {
            Ok(gfx) => self.gfx = Some(gfx),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(gfx) = &self.gfx {
            if self.clock.is_due(Instant::now()) {
                gfx.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                // Seen by the controller on the next frame
                self.events.push(InputEvent::Quit);
                if let Some(gfx) = &self.gfx {
                    gfx.window.request_redraw();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.render.resize(size.width, size.height);
                    log::debug!("Resized to {}x{}", size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let pos = self.pointer();
                self.events.push(InputEvent::MouseDown { pos });
            }
            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused
                self.held.clear();
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("Shutting down");
        self.gfx = None;
    }
}

/// Open the window and run until the player exits
pub fn run(game: GameController, settings: Settings, field: Field) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(game, settings, field);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
