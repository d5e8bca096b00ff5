use glam::Vec2;

/// Mouse-look accumulator
///
/// Tracks the last observed cursor position; `None` marks the first-sample
/// state, in which the next report establishes a baseline instead of
/// producing an offset. Without that, the first report after capture would
/// register as a huge jump from wherever the cursor happened to sit.
#[derive(Debug, Default, Clone, Copy)]
pub struct CursorTracker {
    last: Option<(f64, f64)>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record a cursor position, returning the look offset it implies
    ///
    /// The y term is inverted: screen y grows downward, pitch grows upward.
    /// Returns `None` for the baseline-establishing first sample.
    pub fn offset(&mut self, x: f64, y: f64) -> Option<Vec2> {
        let offset = self
            .last
            .map(|(last_x, last_y)| Vec2::new((x - last_x) as f32, (last_y - y) as f32));
        self.last = Some((x, y));
        offset
    }

    /// Forget the baseline; call when mouse capture is re-acquired
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn last_position(&self) -> Option<(f64, f64)> {
        self.last
    }
}
