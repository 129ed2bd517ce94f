//! Input handling
//!
//! Provides an action-based input system over macroquad's keyboard and mouse
//! polling. Game code asks about logical actions, never raw key codes.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
