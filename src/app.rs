use std::sync::Arc;
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::camera::{Camera, CameraControl};
use crate::config::{
    CLICK_PULSE_AMPLITUDE, CLICK_PULSE_RADIUS, DIAGNOSTIC_INTERVAL, FRAME_BUDGET_MS, GRID_HEIGHT,
    GRID_WIDTH, INITIAL_PULSE_AMPLITUDE, INITIAL_PULSE_RADIUS, WINDOW_HEIGHT, WINDOW_TITLE,
    WINDOW_WIDTH,
};
use crate::error::Result;
use crate::gpu::{GpuContext, MeshBuffers, RenderPipeline};
use crate::input::click_to_grid;
use crate::mesh::{MeshLayout, SurfaceMesh};
use crate::scheduler::{FpsCounter, FramePacer};
use crate::simulation::{Disturbance, Simulation, WaveParams};

/// GPU resources created once the window exists
struct GpuState {
    context: GpuContext,
    buffers: MeshBuffers,
    pipeline: RenderPipeline,
    camera_bind_group: wgpu::BindGroup,
}

impl GpuState {
    fn new(window: Arc<Window>, vertex_capacity: usize) -> Result<Self> {
        log::info!("Creating GPU context...");
        let context = pollster::block_on(GpuContext::new(window))?;

        log::info!("Creating mesh buffers for {} vertices...", vertex_capacity);
        let buffers = MeshBuffers::new(&context.device, vertex_capacity);

        log::info!("Creating render pipelines...");
        let pipeline = RenderPipeline::new(&context);
        let camera_bind_group = pipeline.create_bind_group(&context.device, &buffers.camera_buffer);

        Ok(Self {
            context,
            buffers,
            pipeline,
            camera_bind_group,
        })
    }
}

/// Application state
pub struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    simulation: Simulation,
    camera: Camera,
    surface_mesh: SurfaceMesh,
    cursor: Option<PhysicalPosition<f64>>,
    pacer: FramePacer,
    fps_counter: FpsCounter,
}

impl App {
    pub fn new() -> Self {
        let mut simulation = Simulation::new(GRID_WIDTH, GRID_HEIGHT, WaveParams::default());
        log::info!(
            "Grid {}x{}, Courant number {:.3}",
            GRID_WIDTH,
            GRID_HEIGHT,
            simulation.params().courant_number()
        );
        simulation.inject(&Disturbance::new(
            GRID_WIDTH / 2,
            GRID_HEIGHT / 2,
            INITIAL_PULSE_AMPLITUDE,
            INITIAL_PULSE_RADIUS,
        ));

        Self {
            window: None,
            gpu: None,
            simulation,
            camera: Camera::default(),
            surface_mesh: SurfaceMesh::new(MeshLayout::default()),
            cursor: None,
            pacer: FramePacer::new(Duration::from_millis(FRAME_BUDGET_MS)),
            fps_counter: FpsCounter::new(),
        }
    }

    /// One frame: integrate, rebuild the mesh, draw, present, then pace.
    /// Input for this frame has already been drained by the event loop.
    fn frame(&mut self) {
        self.pacer.begin_frame();

        self.simulation.step();
        self.surface_mesh.rebuild(self.simulation.field());
        self.log_diagnostics();
        self.render();

        self.pacer.end_frame();
    }

    /// Upload and draw the current mesh; skipped while no surface is available
    fn render(&mut self) {
        let Some(gpu) = self.gpu.as_ref() else {
            return;
        };
        let context = &gpu.context;

        let field = self.simulation.field();
        let extent = self
            .surface_mesh
            .layout()
            .extent(field.width(), field.height());
        gpu.buffers
            .update_camera(&context.queue, self.camera.view_proj(extent, context.aspect()));
        gpu.buffers
            .upload_mesh(&context.queue, self.surface_mesh.mesh());

        // Get surface texture
        let output = match context.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure surface
                context.surface.configure(&context.device, &context.config);
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

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        gpu.pipeline.draw(
            &mut encoder,
            &view,
            &gpu.camera_bind_group,
            &gpu.buffers.vertex_buffer,
            self.surface_mesh.mesh(),
        );

        context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if let Some(fps) = self.fps_counter.tick() {
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {:.0} FPS", WINDOW_TITLE, fps));
            }
        }
    }

    fn log_diagnostics(&self) {
        let steps = self.simulation.steps();
        if steps % DIAGNOSTIC_INTERVAL != 0 {
            return;
        }
        let field = self.simulation.field();
        let peak = field.peak_amplitude();
        if !peak.is_finite() {
            log::warn!("Field diverged by step {} (peak {})", steps, peak);
        } else {
            log::debug!(
                "Step {}: interior energy {:.4}, peak {:.4}",
                steps,
                field.interior_energy(),
                peak
            );
        }
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        let Some(control) = camera_control(key_code) else {
            return;
        };
        self.camera.apply(control);
        if control == CameraControl::Reset {
            log::info!("Camera reset");
        } else {
            log::debug!(
                "Camera: rotation ({:.0}, {:.0}), zoom {:.0}",
                self.camera.rotation_x,
                self.camera.rotation_y,
                self.camera.zoom
            );
        }
    }

    fn handle_click(&mut self) {
        let (Some(cursor), Some(window)) = (self.cursor, &self.window) else {
            return;
        };
        let size = window.inner_size();
        self.disturb_at((cursor.x as i32, cursor.y as i32), (size.width, size.height));
    }

    /// Inject a click pulse at the cell under `pixel` in a `window`-sized view
    fn disturb_at(&mut self, pixel: (i32, i32), window: (u32, u32)) {
        let grid = (
            self.simulation.field().width(),
            self.simulation.field().height(),
        );

        if let Some((x, y)) = click_to_grid(pixel, window, grid) {
            log::info!("Disturbance at grid ({}, {})", x, y);
            self.simulation.inject(&Disturbance::new(
                x,
                y,
                CLICK_PULSE_AMPLITUDE,
                CLICK_PULSE_RADIUS,
            ));
        }
    }
}

/// Camera control bound to a key, if any
fn camera_control(key_code: KeyCode) -> Option<CameraControl> {
    match key_code {
        KeyCode::ArrowLeft => Some(CameraControl::RotateLeft),
        KeyCode::ArrowRight => Some(CameraControl::RotateRight),
        KeyCode::ArrowUp => Some(CameraControl::RotateUp),
        KeyCode::ArrowDown => Some(CameraControl::RotateDown),
        KeyCode::Equal | KeyCode::NumpadAdd => Some(CameraControl::ZoomIn),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(CameraControl::ZoomOut),
        KeyCode::KeyR => Some(CameraControl::Reset),
        _ => None,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Initializing 3D wave simulation...");

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let field = self.simulation.field();
        let vertex_capacity = self
            .surface_mesh
            .layout()
            .vertex_count(field.width(), field.height());

        match GpuState::new(window.clone(), vertex_capacity) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  Left click: Disturb the surface");
        log::info!("  Arrows: Rotate view");
        log::info!("  +/-: Zoom in/out");
        log::info!("  R: Reset view");
        log::info!("  Escape: Quit");

        self.window = Some(window);
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
                if event.state.is_pressed() {
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
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.handle_click();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                    gpu.context.resize(new_size);
                    gpu.pipeline.resize(&gpu.context);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame();
                // Request another frame immediately
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
