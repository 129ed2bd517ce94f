//! Tile-map model and loading

mod map;

pub use map::*;
