pub mod camera;
pub mod cli;
pub mod core;
pub mod rig;
pub mod traits;

pub use camera::{Camera, MovementState, Tuning};
pub use rig::CameraRig;
