//! GEO-EXPLORE: a side-scrolling 2D platformer
//!
//! Tile-map levels with coins to collect, hazard tiles and patrolling
//! enemies to avoid, and arrows to shoot. The simulation lives in `game`;
//! macroquad supplies the window, input events, rendering and audio.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod audio;
mod config;
mod game;
mod input;
mod render;
mod world;

use macroquad::prelude::*;

use app::{level_path, App};
use audio::SoundBank;
use world::load_map;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("{} v{}", config::SCREEN_TITLE, VERSION),
        window_width: config::SCREEN_WIDTH as i32,
        window_height: config::SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Load startup resources. A missing or malformed map or sound file is
    // fatal: there is no degraded mode to fall back to.
    let first_level_path = level_path(1);
    let first_map = match load_map(&first_level_path) {
        Ok(map) => {
            println!(
                "Loaded {} ({}x{} tiles, {} layers)",
                first_level_path,
                map.width,
                map.height,
                map.layers.len()
            );
            map
        }
        Err(e) => {
            eprintln!("Failed to load {}: {}", first_level_path, e);
            std::process::exit(1);
        }
    };

    let sounds = match SoundBank::load().await {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(first_map, sounds);

    loop {
        if let Err(e) = app.frame() {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        next_frame().await;
    }
}
