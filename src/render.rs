//! Drawing
//!
//! World coordinates are y-up with the viewport offset giving the world
//! position of the screen's bottom-left corner; everything is flipped to
//! macroquad's y-down screen space at draw time. Tiles and entities render
//! as engine primitives, so no texture assets are needed.

use macroquad::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::{GameState, Viewport};
use crate::world::{layers, TileMap};

// Palette
const SKY_COLOR: Color = Color::new(0.53, 0.81, 0.92, 1.0);
const PLATFORM_COLOR: Color = Color::new(0.35, 0.55, 0.25, 1.0);
const BACKGROUND_TILE_COLOR: Color = Color::new(0.65, 0.75, 0.80, 1.0);
const FOREGROUND_TILE_COLOR: Color = Color::new(0.45, 0.38, 0.30, 1.0);
const HAZARD_COLOR: Color = Color::new(0.85, 0.25, 0.20, 1.0);
const COIN_COLOR: Color = GOLD;
const PLAYER_COLOR: Color = Color::new(0.20, 0.35, 0.85, 1.0);
const ENEMY_COLOR: Color = Color::new(0.55, 0.20, 0.65, 1.0);
const ARROW_COLOR: Color = Color::new(0.30, 0.25, 0.20, 1.0);
const HUD_SCORE_COLOR: Color = WHITE;
const HUD_DEATHS_COLOR: Color = RED;
const PAGE_BG_COLOR: Color = Color::new(0.10, 0.10, 0.12, 1.0);
const PAGE_TEXT_COLOR: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const PAGE_MUTED_COLOR: Color = Color::new(0.6, 0.6, 0.65, 1.0);

/// Map a world rectangle to its screen-space top-left corner
fn to_screen(view: &Viewport, x: f32, y: f32, h: f32) -> (f32, f32) {
    (x - view.left, SCREEN_HEIGHT - (y + h - view.bottom))
}

fn draw_world_rect(view: &Viewport, rect: Rect, color: Color) {
    let (sx, sy) = to_screen(view, rect.x, rect.y, rect.h);
    draw_rectangle(sx, sy, rect.w, rect.h, color);
}

fn draw_layer_tiles(view: &Viewport, map: &TileMap, layer_name: &str, color: Color) {
    if let Some(layer) = map.layer(layer_name) {
        for tile in &layer.tiles {
            draw_world_rect(view, map.tile_rect(tile), color);
        }
    }
}

/// Draw one frame of the running game: layers back to front, then the HUD
pub fn draw_game(state: &GameState, map: &TileMap) {
    let sky = map
        .background_color
        .map(|[r, g, b]| Color::new(r, g, b, 1.0))
        .unwrap_or(SKY_COLOR);
    clear_background(sky);

    let view = &state.viewport;

    draw_layer_tiles(view, map, layers::BACKGROUND, BACKGROUND_TILE_COLOR);
    for platform in &state.platforms {
        draw_world_rect(view, *platform, PLATFORM_COLOR);
    }
    for hazard in &state.hazards {
        draw_world_rect(view, *hazard, HAZARD_COLOR);
    }

    for coin in &state.coins {
        let (sx, sy) = to_screen(view, coin.position.x, coin.position.y, 0.0);
        draw_circle(sx, sy, coin.rect().w / 2.0, COIN_COLOR);
    }

    for enemy in &state.enemies {
        let rect = enemy.rect();
        let (sx, sy) = to_screen(view, rect.x, rect.y, rect.h);
        draw_rectangle(sx, sy, rect.w, rect.h, ENEMY_COLOR);
        // Eye marks the walking direction
        let eye_x = sx + if enemy.velocity_x >= 0.0 { rect.w - 10.0 } else { 10.0 };
        draw_circle(eye_x, sy + 12.0, 4.0, WHITE);
    }

    {
        let rect = state.player.rect();
        let (sx, sy) = to_screen(view, rect.x, rect.y, rect.h);
        draw_rectangle(sx, sy, rect.w, rect.h, PLAYER_COLOR);
    }

    for projectile in &state.projectiles {
        let rect = projectile.rect();
        let (sx, sy) = to_screen(view, rect.x, rect.y, rect.h);
        draw_rectangle_ex(
            sx,
            sy,
            rect.w,
            rect.h,
            DrawRectangleParams {
                // Screen y is flipped, so the flight angle is negated
                rotation: -projectile.rotation,
                offset: Vec2::new(0.5, 0.5),
                color: ARROW_COLOR,
            },
        );
    }

    draw_layer_tiles(view, map, layers::FOREGROUND, FOREGROUND_TILE_COLOR);

    // HUD, anchored to the screen so it scrolls with the viewport
    draw_text(
        &format!("Score: {}", state.score),
        10.0,
        SCREEN_HEIGHT - 10.0,
        24.0,
        HUD_SCORE_COLOR,
    );
    draw_text(
        &format!("Deaths: {}", state.deaths),
        10.0,
        SCREEN_HEIGHT - 150.0,
        24.0,
        HUD_DEATHS_COLOR,
    );
}

/// Full-screen static page with a heading and prompt lines
fn draw_page(heading: &str, lines: &[&str]) {
    clear_background(PAGE_BG_COLOR);

    let heading_size = 48.0;
    let heading_width = measure_text(heading, None, heading_size as u16, 1.0).width;
    draw_text(
        heading,
        (SCREEN_WIDTH - heading_width) / 2.0,
        SCREEN_HEIGHT * 0.35,
        heading_size,
        PAGE_TEXT_COLOR,
    );

    let mut y = SCREEN_HEIGHT * 0.5;
    for line in lines {
        let width = measure_text(line, None, 24, 1.0).width;
        draw_text(line, (SCREEN_WIDTH - width) / 2.0, y, 24.0, PAGE_MUTED_COLOR);
        y += 32.0;
    }
}

pub fn draw_title_screen() {
    draw_page("Geo-Explore", &["Click to continue"]);
}

pub fn draw_instructions_screen() {
    draw_page(
        "How to play",
        &[
            "A / D or arrow keys to move, W or Up to jump",
            "Click to shoot arrows at enemies",
            "Collect coins, avoid the red tiles",
            "Reach the right edge of the map to advance",
            "Click to start",
        ],
    );
}

pub fn draw_game_over_screen() {
    draw_page("Game over", &["Thanks for playing"]);
}
