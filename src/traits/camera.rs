/// The camera surface a rendering layer consumes
///
/// Plain arrays rather than math-library types so a renderer can take the
/// view matrix straight to a uniform upload without agreeing on a math crate.
pub trait CameraController {
    /// Advance the camera by one frame against the most recent input snapshot
    fn update(&mut self, dt: f32);

    /// Column-major 4x4 view matrix for the current pose
    fn view_matrix(&self) -> [[f32; 4]; 4];

    /// Camera position in world space
    fn position(&self) -> [f32; 3];

    /// Unit forward direction
    fn forward(&self) -> [f32; 3];
}
