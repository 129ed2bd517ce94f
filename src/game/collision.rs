//! Collision Resolution
//!
//! Pure policy over the engine's rectangle intersection test: what happens
//! once an overlap is reported. Sprite counts are in the tens, so every
//! check is a plain scan; no spatial structure is warranted.

use macroquad::prelude::Rect;

use super::camera::Viewport;
use super::entities::{Coin, Enemy, Projectile};
use super::events::{CoinCollectedEvent, EnemyDefeatedEvent, Events};
use crate::config;

/// Remove every coin the player overlaps, scoring each one.
/// A removed coin is gone for good, so a pickup can never double-count.
pub fn collect_coins(player: Rect, coins: &mut Vec<Coin>, score: &mut u32, events: &mut Events) {
    coins.retain(|coin| {
        if player.overlaps(&coin.rect()) {
            *score += config::COIN_SCORE;
            events.coin_collected.send(CoinCollectedEvent);
            false
        } else {
            true
        }
    });
}

/// Resolve arrow-vs-enemy hits: each hit removes both sprites and scores.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
    score: &mut u32,
    events: &mut Events,
) {
    projectiles.retain(|projectile| {
        let hit = enemies
            .iter()
            .position(|enemy| projectile.rect().overlaps(&enemy.rect()));
        match hit {
            Some(idx) => {
                enemies.remove(idx);
                *score += config::ENEMY_SCORE;
                events.enemy_defeated.send(EnemyDefeatedEvent);
                false
            }
            None => true,
        }
    });
}

/// Drop arrows that have left the visible window
pub fn cull_projectiles(projectiles: &mut Vec<Projectile>, view: &Viewport) {
    let visible = Rect::new(
        view.left,
        view.bottom,
        config::SCREEN_WIDTH,
        config::SCREEN_HEIGHT,
    );
    projectiles.retain(|p| p.rect().overlaps(&visible));
}

/// Does the player's box overlap any rect in the list?
pub fn touches_any(player: Rect, rects: &[Rect]) -> bool {
    rects.iter().any(|r| player.overlaps(r))
}
