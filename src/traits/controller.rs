/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Escape,
}

/// Per-frame "is this key currently held" query
///
/// The camera only ever polls held state; edge detection (press/release
/// events) stays with whoever feeds the implementation.
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}
