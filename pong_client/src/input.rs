//! Keyboard input handling

use game_core::InputSnapshot;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Held-key state, sampled into an [`InputSnapshot`] once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Keyboard {
    held: InputSnapshot,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release; returns false for keys the game ignores
    pub fn handle_key(&mut self, key: PhysicalKey, state: ElementState) -> bool {
        let PhysicalKey::Code(code) = key else {
            return false;
        };
        match key_flag(&mut self.held, code) {
            Some(flag) => {
                *flag = state.is_pressed();
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> InputSnapshot {
        self.held
    }

    /// Forget held keys, e.g. after the window loses focus
    pub fn release_all(&mut self) {
        self.held = InputSnapshot::new();
    }
}

/// Map a scancode to the flag it drives
fn key_flag(input: &mut InputSnapshot, code: KeyCode) -> Option<&mut bool> {
    match code {
        KeyCode::KeyW => Some(&mut input.p1_up),
        KeyCode::KeyS => Some(&mut input.p1_down),
        KeyCode::ArrowUp => Some(&mut input.p2_up),
        KeyCode::ArrowDown => Some(&mut input.p2_down),
        KeyCode::KeyR => Some(&mut input.restart),
        KeyCode::Space => Some(&mut input.start),
        KeyCode::KeyQ => Some(&mut input.quit),
        _ => None,
    }
}
