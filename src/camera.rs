use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::traits::{Button, Controller};

/// Mouse sensitivity in degrees per pixel of cursor travel
pub const DEFAULT_SENSITIVITY: f32 = 0.05;
/// Movement speed in world units per second
pub const DEFAULT_SPEED: f32 = 2.5;

const PITCH_LIMIT: f32 = 89.0;

/// Tunable camera response parameters
///
/// Loadable from JSON so a demo can ship tuning presets without a rebuild.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Degrees of rotation per pixel of mouse travel
    pub sensitivity: f32,
    /// World units moved per second while a key is held
    pub speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            speed: DEFAULT_SPEED,
        }
    }
}

/// Held state of the four movement keys, sampled once per frame
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementState {
    /// Snapshot the movement keys from a controller
    pub fn poll<C: Controller>(controller: &C) -> Self {
        Self {
            forward: controller.is_down(Button::KeyW),
            backward: controller.is_down(Button::KeyS),
            left: controller.is_down(Button::KeyA),
            right: controller.is_down(Button::KeyD),
        }
    }

    const fn axis(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Signed forward/backward contribution
    pub const fn advance_axis(&self) -> f32 {
        Self::axis(self.forward, self.backward)
    }

    /// Signed strafe contribution
    pub const fn strafe_axis(&self) -> f32 {
        Self::axis(self.right, self.left)
    }

    /// True when any movement key is held
    pub const fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// First-person free-look camera
///
/// Orientation is yaw/pitch in degrees; the front vector is always derived
/// from them, never stored, so it cannot drift out of sync. Pitch is clamped
/// short of the poles to keep the look-at basis well-formed.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    world_up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        // Three units back from the origin, looking down -Z
        Self::new(Vec3::new(0.0, 0.0, 3.0), -90.0, 0.0)
    }
}

impl Camera {
    /// Create a camera at `position` with the given yaw and pitch in degrees
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw: wrap_yaw(yaw),
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            world_up: Vec3::Y,
        }
    }

    /// Yaw in degrees, always in [0, 360)
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always in [-89, 89]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit vector toward whatever the camera is looking at
    pub fn front(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// Unit strafe direction, orthogonal to both front and world up
    pub fn right(&self) -> Vec3 {
        self.front().cross(self.world_up).normalize()
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Apply a look offset in pixels: +x looks right, +y looks up
    ///
    /// Yaw wraps modulo 360; pitch clamps at +/-89 degrees so the front
    /// vector never becomes collinear with world up.
    pub fn rotate(&mut self, offset: Vec2, tuning: &Tuning) {
        self.yaw = wrap_yaw(self.yaw + offset.x * tuning.sensitivity);
        self.pitch =
            (self.pitch + offset.y * tuning.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move the camera for one frame of held keys
    ///
    /// Forward/backward along the front vector, then strafe along the right
    /// vector, each scaled by speed * dt. Contributions are additive: holding
    /// forward and strafe together is faster than either alone, which matches
    /// the classic fly-camera feel.
    pub fn advance(&mut self, movement: &MovementState, dt: f32, tuning: &Tuning) {
        if !movement.any() {
            return;
        }
        let step = tuning.speed * dt;
        self.position += self.front() * movement.advance_axis() * step;
        self.position += self.right() * movement.strafe_axis() * step;
    }

    /// Right-handed look-at view matrix (column-major f32)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), self.world_up)
    }
}

/// Wrap a yaw angle into [0, 360)
///
/// `rem_euclid` alone is not enough in f32: for a sum a hair below zero the
/// `r + rhs` step rounds up to exactly 360.0, landing on the open bound.
fn wrap_yaw(yaw: f32) -> f32 {
    let wrapped = yaw.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = Camera::default();
        let front = cam.front();
        assert!(
            front.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6),
            "expected (0,0,-1), got {:?}",
            front
        );
    }

    #[test]
    fn front_is_unit_length() {
        let mut cam = Camera::default();
        let tuning = Tuning::default();
        for i in 0..500 {
            cam.rotate(Vec2::new(i as f32 * 3.7, -(i as f32) * 1.3), &tuning);
            let len = cam.front().length();
            assert!((len - 1.0).abs() < 1e-5, "front length drifted: {}", len);
        }
    }

    #[test]
    fn pitch_clamps_at_poles() {
        let mut cam = Camera::default();
        let tuning = Tuning::default();
        cam.rotate(Vec2::new(0.0, 1e6), &tuning);
        assert_eq!(cam.pitch(), 89.0);
        cam.rotate(Vec2::new(0.0, -1e7), &tuning);
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn yaw_never_lands_on_the_open_bound() {
        // A sum just below zero makes rem_euclid round up to exactly 360.0
        let mut cam = Camera::new(Vec3::ZERO, 0.25, 0.0);
        let tuning = Tuning {
            sensitivity: 1.0,
            speed: DEFAULT_SPEED,
        };
        cam.rotate(Vec2::new(-0.250001, 0.0), &tuning);
        assert!(
            (0.0..360.0).contains(&cam.yaw()),
            "yaw escaped [0, 360): {}",
            cam.yaw()
        );

        let constructed = Camera::new(Vec3::ZERO, -1e-6, 0.0);
        assert!(
            (0.0..360.0).contains(&constructed.yaw()),
            "constructor let yaw escape [0, 360): {}",
            constructed.yaw()
        );
    }

    #[test]
    fn yaw_wraps_into_range() {
        let mut cam = Camera::default();
        let tuning = Tuning::default();
        for offset in [1e5, -3e5, 7.2e4, -1.0] {
            cam.rotate(Vec2::new(offset, 0.0), &tuning);
            assert!(
                (0.0..360.0).contains(&cam.yaw()),
                "yaw out of range: {}",
                cam.yaw()
            );
        }
    }

    #[test]
    fn advance_moves_along_front() {
        let mut cam = Camera::default();
        let movement = MovementState {
            forward: true,
            ..Default::default()
        };
        cam.advance(&movement, 1.0, &Tuning::default());
        // Default front is -Z, so one second forward is speed units down -Z
        assert!(cam
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 3.0 - DEFAULT_SPEED), 1e-5));
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut cam = Camera::default();
        let start = cam.position;
        let movement = MovementState {
            forward: true,
            right: true,
            ..Default::default()
        };
        cam.advance(&movement, 0.0, &Tuning::default());
        assert_eq!(cam.position, start);
    }

    #[test]
    fn idle_movement_state_is_a_no_op() {
        let mut cam = Camera::default();
        let start = cam.position;
        cam.advance(&MovementState::default(), 1.0, &Tuning::default());
        assert_eq!(cam.position, start);
    }

    #[test]
    fn opposed_keys_cancel() {
        let mut cam = Camera::default();
        let start = cam.position;
        let movement = MovementState {
            forward: true,
            backward: true,
            left: true,
            right: true,
        };
        cam.advance(&movement, 0.5, &Tuning::default());
        assert_eq!(cam.position, start);
    }

    #[test]
    fn tuning_deserializes_with_defaults() {
        let tuning: Tuning = serde_json::from_str("{\"speed\": 5.0}").unwrap();
        assert_eq!(tuning.speed, 5.0);
        assert_eq!(tuning.sensitivity, DEFAULT_SENSITIVITY);
    }
}
