//! Hypercube4D - 4D hypercube viewer
//!
//! Rotates a tesseract in its six planes and shows its perspective
//! projection into 3D as a wireframe.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use hypercube_core::ControlPanel;
use hypercube_input::{ControlPanelController, ViewController};
use hypercube_render::OrbitCamera;

use hypercube4d::config::{AppConfig, ConfigError};
use hypercube4d::input::{InputAction, InputMapper};
use hypercube4d::systems::{AnimationSystem, RenderError, RenderSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    animation: AnimationSystem,
    panel: ControlPanel,
    panel_controller: ControlPanelController,
    view_controller: ViewController,
    camera: OrbitCamera,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let panel = ControlPanel::new(config.animation.auto_on_start);
        let animation = AnimationSystem::new(&config.animation, &config.projection, &panel);

        let panel_controller = ControlPanelController::new()
            .with_mapping(config.controls.mapping())
            .with_slider_step(config.controls.slider_step);

        let view_controller = ViewController::new()
            .with_orbit_sensitivity(config.camera.orbit_sensitivity)
            .with_zoom_sensitivity(config.camera.zoom_sensitivity);

        // Orbit around the projected center of the tesseract
        let updater = animation.updater();
        let target = updater.projection().project(updater.tesseract().center());
        let camera = OrbitCamera::new(target, config.camera.distance)
            .with_angles(config.camera.azimuth, config.camera.elevation)
            .with_lens(config.camera.fov, config.camera.near, config.camera.far);

        Self {
            config,
            window_system: None,
            render_system: None,
            animation,
            panel,
            panel_controller,
            view_controller,
            camera,
        }
    }

    /// Push the current frame to the GPU and schedule a redraw
    fn frame_changed(&mut self) {
        if let Some(render) = &mut self.render_system {
            render.upload_frame(self.animation.frame());
        }
        self.request_redraw();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window_system {
            window.request_redraw();
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => {
                log::info!("Exit requested");
                event_loop.exit();
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window_system {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ResetAll => {
                self.panel.reset_all();
                self.panel.set_all_auto(self.config.animation.auto_on_start);
                self.camera.reset();
                self.animation.reset(&self.panel);
                self.frame_changed();
                log::info!("View, angles and controls reset");
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.view_controller.update(&mut self.camera);

        if let Some(window) = &mut self.window_system {
            let plane = self.panel_controller.selected();
            let angle = self.animation.frame().angles()[plane];
            window.update_title(plane, self.panel.control(plane), angle);
        }

        let Some(render) = &mut self.render_system else {
            return;
        };
        match render.render_frame(&self.camera) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::warn!("Surface lost, reconfiguring");
                render.recover_surface();
                self.request_redraw();
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => {
                log::warn!("{}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let tesseract = self.animation.updater().tesseract();
        let render_system = match RenderSystem::new(
            Arc::clone(window_system.window()),
            self.config.rendering.clone(),
            self.config.window.vsync,
            tesseract.center().w,
            tesseract.size(),
        ) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render_system.size();
        log::info!("Window ready: {}x{}", width, height);

        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
        self.frame_changed();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render_system {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    } else if self
                        .panel_controller
                        .process_keyboard(key, event.state, &mut self.panel)
                    {
                        // Show control edits without waiting for the next tick
                        self.animation.refresh(&self.panel);
                        self.frame_changed();
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.view_controller.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.view_controller.process_scroll(lines);
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.view_controller.is_dragging() {
                self.view_controller.process_mouse_motion(delta.0, delta.1);
                self.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let result = self.animation.update(&self.panel);
        if result.frame_dirty {
            self.frame_changed();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.animation.next_deadline()));
    }
}

fn init_logging(config: &AppConfig) {
    // RUST_LOG wins over the configured level
    let env = env_logger::Env::default().default_filter_or(config.debug.log_level.as_str());
    env_logger::Builder::from_env(env).init();
}

fn load_config() -> (AppConfig, Option<ConfigError>) {
    match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = load_config();
    init_logging(&config);
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Hypercube4D");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
