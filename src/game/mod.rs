//! Game simulation
//!
//! The simulation is a plain `GameState` value advanced one fixed step per
//! rendered frame by `GameState::tick`. Systems communicate through event
//! queues; the shell (audio, level loading, drawing) drains them after each
//! tick. Nothing in this module performs I/O.

mod camera;
mod collision;
mod entities;
mod events;
mod physics;
mod state;

pub use camera::Viewport;
pub use collision::*;
pub use entities::{Coin, Enemy, Player, Projectile};
pub use events::*;
pub use physics::{step_enemy, step_player, step_projectile};
pub use state::{FrameInput, GameState};
