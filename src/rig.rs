use glam::Vec2;

use crate::camera::{Camera, MovementState, Tuning};
use crate::core::CursorTracker;
use crate::traits::{CameraController, Controller};

/// Camera plus the input bookkeeping that drives it
///
/// Owns all the mutable look state in one place: the event-polling loop calls
/// `process_cursor` once per cursor-move event (in event order, single
/// thread) and `update` once per frame with that frame's delta time.
#[derive(Debug, Default, Clone, Copy)]
pub struct CameraRig {
    camera: Camera,
    tuning: Tuning,
    cursor: CursorTracker,
    movement: MovementState,
}

impl CameraRig {
    pub fn new(camera: Camera, tuning: Tuning) -> Self {
        Self {
            camera,
            tuning,
            cursor: CursorTracker::new(),
            movement: MovementState::default(),
        }
    }

    /// Handle one cursor-move event in window-pixel coordinates
    ///
    /// The first event after construction or `release_cursor` only sets the
    /// baseline and leaves orientation untouched.
    pub fn process_cursor(&mut self, x: f64, y: f64) {
        if let Some(offset) = self.cursor.offset(x, y) {
            self.camera.rotate(offset, &self.tuning);
        }
    }

    /// Per-frame positional update from the currently held movement keys
    ///
    /// Also refreshes the snapshot replayed by [`CameraController::update`].
    pub fn update<C: Controller>(&mut self, controller: &C, dt: f32) {
        self.movement = MovementState::poll(controller);
        self.camera.advance(&self.movement, dt, &self.tuning);
    }

    /// Handle a raw relative-motion event, e.g. winit's `DeviceEvent::MouseMotion`
    ///
    /// Deltas follow the usual screen convention (y grows downward). Unlike
    /// `process_cursor` there is no baseline to establish, the source is
    /// already relative.
    pub fn process_motion(&mut self, dx: f64, dy: f64) {
        self.camera
            .rotate(Vec2::new(dx as f32, -(dy as f32)), &self.tuning);
    }

    /// Note that mouse capture was lost; the next cursor event re-baselines
    pub fn release_cursor(&mut self) {
        self.cursor.reset();
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

impl CameraController for CameraRig {
    fn update(&mut self, dt: f32) {
        self.camera.advance(&self.movement, dt, &self.tuning);
    }

    fn view_matrix(&self) -> [[f32; 4]; 4] {
        self.camera.view_matrix().to_cols_array_2d()
    }

    fn position(&self) -> [f32; 3] {
        self.camera.position.to_array()
    }

    fn forward(&self) -> [f32; 3] {
        self.camera.front().to_array()
    }
}

impl From<Camera> for CameraRig {
    fn from(camera: Camera) -> Self {
        Self::new(camera, Tuning::default())
    }
}
