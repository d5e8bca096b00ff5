use std::time::Instant;

/// Frame clock - remembers when the previous frame started
///
/// `tick` once per frame; the returned delta scales movement so translation
/// speed is independent of frame rate.
#[derive(Debug)]
pub struct Clock {
    previous_frame: Instant,
    last_delta: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            previous_frame: Instant::now(),
            last_delta: 0.0,
        }
    }

    /// Advance to the current frame, returning seconds since the previous one
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.last_delta = now.duration_since(self.previous_frame).as_secs_f32();
        self.previous_frame = now;
        self.last_delta
    }

    /// Delta returned by the most recent `tick`
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    /// Re-anchor after a pause so the next delta stays small
    pub fn reset(&mut self) {
        self.previous_frame = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
