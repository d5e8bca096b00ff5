pub mod clock;
pub mod cursor;
pub mod input;

pub use clock::Clock;
pub use cursor::CursorTracker;
pub use input::WinitInput;
