use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::clock::{FpsCounter, FrameClock};
use crate::config::{Config, BACKGROUND_COLOR, WINDOW_TITLE};
use crate::error::Error;
use crate::gpu::{to_clear_color, GpuContext, GridBuffers, RenderPipeline};
use crate::simulation::{cell_origin, Command, Session};

/// Map a pressed key to a simulation command
fn command_for(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::KeyR => Some(Command::Randomize),
        KeyCode::KeyC => Some(Command::Clear),
        KeyCode::Space => Some(Command::TogglePause),
        _ => None,
    }
}

/// Window, GPU resources and the simulation session
pub struct App {
    config: Config,
    session: Session,
    clock: FrameClock,
    fps_counter: FpsCounter,
    pending: Vec<Command>,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    grid_buffers: Option<GridBuffers>,
    render_pipeline: Option<RenderPipeline>,
    error: Option<Error>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let session = Session::new(&config);
        let now = Instant::now();
        Self {
            clock: FrameClock::new(session.tick_rate(), now),
            fps_counter: FpsCounter::new(now),
            config,
            session,
            pending: Vec::new(),
            window: None,
            gpu: None,
            grid_buffers: None,
            render_pipeline: None,
            error: None,
        }
    }

    /// Setup error raised inside the event loop, if any
    pub fn into_result(self) -> Result<(), Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Error> {
        log::info!("Initializing {}...", WINDOW_TITLE);
        log::info!(
            "Grid size: {}x{} cells of {}px",
            self.session.grid().columns(),
            self.session.grid().rows(),
            self.config.cell_size
        );

        let lattice_width = cell_origin(self.session.grid().columns(), self.config.cell_size);
        let lattice_height = cell_origin(self.session.grid().rows(), self.config.cell_size);
        if lattice_width > self.config.window_width || lattice_height > self.config.window_height {
            log::warn!(
                "Cell lattice spans {}x{}px, cells past the window edge are clipped",
                lattice_width,
                lattice_height
            );
        }

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        let grid = self.session.grid();
        let grid_buffers = GridBuffers::new(
            &gpu.device,
            &gpu.queue,
            grid.rows() as u32,
            grid.columns() as u32,
            grid.cells(),
        );
        grid_buffers.update_render_params(
            &gpu.queue,
            self.config.cell_size,
            window.scale_factor() as f32,
            gpu.format().is_srgb(),
        );

        let render_pipeline = RenderPipeline::new(&gpu.device, gpu.format());

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  R: Randomize grid");
        log::info!("  C: Clear grid");
        log::info!("  Space: Pause/resume");
        log::info!("  Escape: Quit");

        window.request_redraw();

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.grid_buffers = Some(grid_buffers);
        self.render_pipeline = Some(render_pipeline);
        Ok(())
    }

    /// Apply queued commands and advance the simulation by one tick
    fn update(&mut self) {
        let was_paused = self.session.is_paused();
        for command in self.pending.drain(..) {
            self.session.apply(command);
        }
        self.session.tick();

        if self.session.is_paused() != was_paused {
            if let Some(window) = &self.window {
                if self.session.is_paused() {
                    window.set_title(&format!("{} - Paused", WINDOW_TITLE));
                } else {
                    window.set_title(WINDOW_TITLE);
                }
            }
        }

        if let Some(fps) = self.fps_counter.tick(Instant::now()) {
            log::debug!(
                "{:.1} FPS, generation {}, {} live cells",
                fps,
                self.session.generation(),
                self.session.grid().live_count()
            );
            if !self.session.is_paused() {
                if let Some(window) = &self.window {
                    window.set_title(&format!("{} - {:.0} FPS", WINDOW_TITLE, fps));
                }
            }
        }
    }

    fn render(&self) {
        let (Some(gpu), Some(buffers), Some(render)) = (
            self.gpu.as_ref(),
            self.grid_buffers.as_ref(),
            self.render_pipeline.as_ref(),
        ) else {
            return;
        };

        buffers.write_cells(&gpu.queue, self.session.grid().cells());

        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                gpu.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        let bind_group = render.create_bind_group(
            &gpu.device,
            &buffers.cells_buffer,
            &buffers.render_params_buffer,
        );
        let background = to_clear_color(BACKGROUND_COLOR, gpu.format().is_srgb());
        render.draw(&mut encoder, &view, &bind_group, background);

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }

    /// Tick if the clock is due, then repaint. Expose/resize redraws between
    /// ticks only repaint.
    fn redraw(&mut self, now: Instant) {
        if self.clock.consume(now) {
            self.update();
        }
        self.render();
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        if let Some(command) = command_for(key_code) {
            self.pending.push(command);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("Initialization failed: {}", e);
            self.error = Some(e);
            event_loop.exit();
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
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() && !event.repeat {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        if key_code == KeyCode::Escape {
                            log::info!("Escape pressed, exiting...");
                            event_loop.exit();
                        } else {
                            self.handle_key(key_code);
                        }
                    }
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let (Some(gpu), Some(buffers)) = (&self.gpu, &self.grid_buffers) {
                    log::info!("Scale factor changed to {:.2}", scale_factor);
                    buffers.update_render_params(
                        &gpu.queue,
                        self.config.cell_size,
                        scale_factor as f32,
                        gpu.format().is_srgb(),
                    );
                }
            }
            WindowEvent::RedrawRequested => self.redraw(Instant::now()),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }
        if self.clock.is_due(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for(KeyCode::KeyR), Some(Command::Randomize));
        assert_eq!(command_for(KeyCode::KeyC), Some(Command::Clear));
        assert_eq!(command_for(KeyCode::Space), Some(Command::TogglePause));
        assert_eq!(command_for(KeyCode::KeyQ), None);
    }

    fn headless_app() -> App {
        App::new(Config {
            window_width: 200,
            window_height: 150,
            ..Config::default()
        })
    }

    #[test]
    fn test_first_redraw_shows_starting_grid() {
        let mut app = headless_app();
        let start = app.session.grid().cells().to_vec();

        let before_deadline = app.clock.next_deadline() - Duration::from_millis(1);
        app.redraw(before_deadline);
        assert_eq!(app.session.generation(), 0);
        assert_eq!(app.session.grid().cells(), start.as_slice());
    }

    #[test]
    fn test_queued_command_applies_before_generation_update() {
        let mut app = headless_app();
        app.handle_key(KeyCode::KeyC);
        assert_eq!(app.pending, vec![Command::Clear]);

        app.update();
        assert!(app.pending.is_empty());
        assert_eq!(app.session.grid().live_count(), 0);
        assert_eq!(app.session.generation(), 1);
    }

    #[test]
    fn test_queued_pause_stops_the_same_tick() {
        let mut app = headless_app();
        app.update();
        assert_eq!(app.session.generation(), 1);

        app.handle_key(KeyCode::Space);
        app.update();
        assert!(app.session.is_paused());
        assert_eq!(app.session.generation(), 1);
    }

    #[test]
    fn test_repaint_between_ticks_does_not_advance() {
        let mut app = headless_app();
        let due = app.clock.next_deadline();

        app.redraw(due);
        assert_eq!(app.session.generation(), 1);
        let after_tick = app.session.grid().cells().to_vec();

        // Same instant again: the tick was already taken
        app.redraw(due);
        assert_eq!(app.session.generation(), 1);
        assert_eq!(app.session.grid().cells(), after_tick.as_slice());

        app.redraw(app.clock.next_deadline());
        assert_eq!(app.session.generation(), 2);
    }
}
