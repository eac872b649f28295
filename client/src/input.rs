//! Keyboard input handling

use game_core::{PaddleInput, TickInput};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// The four keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

/// Map a physical key to its binding (W/S left, arrows right)
pub fn map_key(key: KeyCode) -> Option<Binding> {
    match key {
        KeyCode::KeyW => Some(Binding::LeftUp),
        KeyCode::KeyS => Some(Binding::LeftDown),
        KeyCode::ArrowUp => Some(Binding::RightUp),
        KeyCode::ArrowDown => Some(Binding::RightDown),
        _ => None,
    }
}

/// Current held state of every binding
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    left: PaddleInput,
    right: PaddleInput,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Repeated presses from OS key-repeat are no-ops.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        let Some(binding) = map_key(key) else {
            return;
        };
        let held = state == ElementState::Pressed;
        match binding {
            Binding::LeftUp => self.left.up = held,
            Binding::LeftDown => self.left.down = held,
            Binding::RightUp => self.right.up = held,
            Binding::RightDown => self.right.down = held,
        }
    }

    /// Forget every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}
