//! Input state management
//!
//! Polls macroquad's keyboard and mouse state, exposing it through the
//! action-based API. Held actions (movement) and edge-triggered actions
//! (jump, fire) are queried separately.

use macroquad::prelude::*;

use super::Action;

/// Unified input state for keyboard and mouse
pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Check if an action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            Action::Jump => is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            Action::Fire => is_mouse_button_down(MouseButton::Left),
        }
    }

    /// Check if an action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_pressed(KeyCode::A) || is_key_pressed(KeyCode::Left),
            Action::MoveRight => is_key_pressed(KeyCode::D) || is_key_pressed(KeyCode::Right),
            Action::Jump => is_key_pressed(KeyCode::W) || is_key_pressed(KeyCode::Up),
            Action::Fire => is_mouse_button_pressed(MouseButton::Left),
        }
    }

    /// Horizontal movement direction from held keys: -1, 0, or +1
    pub fn move_dir(&self) -> f32 {
        let mut dir = 0.0;
        if self.action_down(Action::MoveLeft) {
            dir -= 1.0;
        }
        if self.action_down(Action::MoveRight) {
            dir += 1.0;
        }
        dir
    }

    /// Screen position of the mouse cursor
    pub fn mouse_screen_position(&self) -> Vec2 {
        mouse_position().into()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
