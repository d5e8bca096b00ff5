use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use freelook::cli::Cli;
use freelook::core::{Clock, WinitInput};
use freelook::{Camera, CameraRig, Tuning};

const WINDOW_TITLE: &str = "freelook";
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const POSE_LOG_INTERVAL: f32 = 1.0;

/// How the cursor is currently captured
///
/// Confined keeps absolute `CursorMoved` positions flowing; Locked pins the
/// cursor so those dry up and look input must come from raw
/// `DeviceEvent::MouseMotion` deltas instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorCapture {
    Released,
    Confined,
    Locked,
}

/// Winit application that drives a camera rig from live input
///
/// The rendering side is deliberately absent: each frame ends at an
/// up-to-date view matrix, which is where a renderer would take over.
struct App {
    window: Option<Window>,
    rig: CameraRig,
    input: WinitInput,
    clock: Clock,
    capture: CursorCapture,
    log_pose: bool,
    pose_timer: f32,
}

impl App {
    fn new(tuning: Tuning, log_pose: bool) -> Self {
        Self {
            window: None,
            rig: CameraRig::new(Camera::default(), tuning),
            input: WinitInput::new(),
            clock: Clock::new(),
            capture: CursorCapture::Released,
            log_pose,
            pose_timer: 0.0,
        }
    }

    /// First-person capture: confine the cursor if the platform allows it,
    /// otherwise lock it in place and fall back to raw motion events
    fn grab_cursor(window: &Window) -> CursorCapture {
        if window.set_cursor_grab(CursorGrabMode::Confined).is_ok() {
            window.set_cursor_visible(false);
            return CursorCapture::Confined;
        }
        if window.set_cursor_grab(CursorGrabMode::Locked).is_ok() {
            window.set_cursor_visible(false);
            return CursorCapture::Locked;
        }
        log::warn!("cursor grab unavailable, mouse look uses the free cursor");
        CursorCapture::Released
    }

    fn release_cursor(window: &Window) {
        if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("cursor release failed: {e}");
        }
        window.set_cursor_visible(true);
    }

    fn log_pose_throttled(&mut self, dt: f32) {
        self.pose_timer += dt;
        if self.pose_timer < POSE_LOG_INTERVAL {
            return;
        }
        self.pose_timer = 0.0;

        let camera = self.rig.camera();
        let pos = camera.position;
        log::info!(
            "pose: position ({:.2}, {:.2}, {:.2}) yaw {:.1} pitch {:.1}",
            pos.x,
            pos.y,
            pos.z,
            camera.yaw(),
            camera.pitch()
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => w,
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            self.capture = Self::grab_cursor(&window);
            self.window = Some(window);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { .. } => self.input.process_event(&event),
            WindowEvent::CursorMoved { position, .. } => {
                // Under a locked grab the cursor cannot move; look input
                // arrives as raw motion in device_event instead
                if self.capture != CursorCapture::Locked {
                    self.rig.process_cursor(position.x, position.y);
                }
            }
            WindowEvent::Focused(focused) => {
                if let Some(window) = &self.window {
                    if focused {
                        self.capture = Self::grab_cursor(window);
                        // Paused time must not turn into a movement spike
                        self.clock.reset();
                    } else {
                        Self::release_cursor(window);
                        self.capture = CursorCapture::Released;
                        self.input.clear();
                    }
                }
                // Either way the next cursor event only re-baselines
                self.rig.release_cursor();
            }
            WindowEvent::RedrawRequested => {
                let dt = self.clock.tick();
                self.rig.update(&self.input, dt);

                // A renderer would upload rig.view_matrix() here
                if self.log_pose {
                    self.log_pose_throttled(dt);
                }
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
        if self.capture == CursorCapture::Locked {
            if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
                self.rig.process_motion(dx, dy);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn resolve_tuning(cli: &Cli) -> Result<Tuning> {
    let mut tuning = match &cli.tuning {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read tuning file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid tuning file {}", path.display()))?
        }
        None => Tuning::default(),
    };

    if let Some(sensitivity) = cli.sensitivity {
        tuning.sensitivity = sensitivity;
    }
    if let Some(speed) = cli.speed {
        tuning.speed = speed;
    }
    Ok(tuning)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let tuning = resolve_tuning(&cli)?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(tuning, cli.log_pose);

    log::info!("freelook - controls: mouse look, WASD, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
