use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::MovementState;
use crate::traits::{Button, Controller};

/// Adapter that tracks held keys from winit window events
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    pressed: HashSet<Button>,
}

impl WinitInput {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
        }
    }

    /// Feed a winit event; non-keyboard events are ignored
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                if let Some(button) = Self::keycode_to_button(keycode) {
                    match event.state {
                        ElementState::Pressed => {
                            let _ = self.pressed.insert(button);
                        }
                        ElementState::Released => {
                            let _ = self.pressed.remove(&button);
                        }
                    }
                }
            }
        }
    }

    /// Drop all held state, e.g. when the window loses focus
    ///
    /// Without this a key released while unfocused would stay "held" forever,
    /// since its release event goes to another window.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Snapshot of the movement keys for this frame
    pub fn movement(&self) -> MovementState {
        MovementState::poll(self)
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitInput {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}
