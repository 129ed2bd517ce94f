//! Game state and the per-frame simulation step
//!
//! `GameState` owns everything the simulation mutates: the player, sprite
//! groups populated from the current map, camera offsets, and counters.
//! `tick` advances one frame and emits events; loading the next map after a
//! level-finished event is the shell's job, which then calls `enter_level`.

use macroquad::prelude::{Rect, Vec2};

use super::camera::Viewport;
use super::collision;
use super::entities::{Coin, Enemy, Player, Projectile};
use super::events::{
    DeathCause, Events, JumpedEvent, LevelFinishedEvent, PlayerDiedEvent, ShotFiredEvent,
};
use super::physics;
use crate::config;
use crate::world::{layers, TileMap};

/// One frame's worth of player commands, already in world coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// -1.0, 0.0, or +1.0 from held movement keys
    pub move_dir: f32,
    /// Jump key went down this frame
    pub jump_pressed: bool,
    /// World point to aim an arrow at, if the fire button went down
    pub fire_target: Option<Vec2>,
}

/// All mutable simulation state for a running game
pub struct GameState {
    pub player: Player,
    pub viewport: Viewport,

    /// Solid tiles the player and enemies collide with
    pub platforms: Vec<Rect>,
    /// Tiles that kill on touch
    pub hazards: Vec<Rect>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,

    pub score: u32,
    pub deaths: u32,
    /// Current level index, 1-based
    pub level: u32,
    /// Right edge of the current map in world pixels
    pub end_of_map: f32,

    pub events: Events,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            viewport: Viewport::new(),
            platforms: Vec::new(),
            hazards: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            deaths: 0,
            level: 1,
            end_of_map: 0.0,
            events: Events::new(),
        }
    }

    /// Populate sprite groups from a freshly loaded map and put the player
    /// at the start. Score and death counters carry over.
    pub fn enter_level(&mut self, map: &TileMap) {
        self.platforms = map.layer_rects(layers::PLATFORM);
        self.hazards = map.layer_rects(layers::DONT_TOUCH);

        self.coins = map
            .layer(layers::COINS)
            .map(|layer| {
                layer
                    .tiles
                    .iter()
                    .map(|tile| Coin {
                        position: map.tile_rect(tile).center(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        self.enemies = map
            .layer(layers::ENEMIES)
            .map(|layer| {
                layer
                    .tiles
                    .iter()
                    .map(|tile| Enemy::new(map.tile_rect(tile).center(), tile.patrol))
                    .collect()
            })
            .unwrap_or_default();

        self.projectiles.clear();
        self.player.respawn();
        self.player.velocity = Vec2::ZERO;
        self.viewport.reset();
        self.end_of_map = map.end_of_map();
    }

    /// Advance the simulation one fixed step
    pub fn tick(&mut self, input: &FrameInput) {
        // Fire an arrow from the player toward the aim point
        if let Some(target) = input.fire_target {
            self.projectiles
                .push(Projectile::fire_at(self.player.position, target));
            self.events.shot_fired.send(ShotFiredEvent);
        }

        // Player control + platform physics
        let jumped = physics::step_player(
            &mut self.player,
            input.move_dir,
            input.jump_pressed,
            &self.platforms,
        );
        if jumped {
            self.events.jumped.send(JumpedEvent);
        }

        // Enemy patrols
        for enemy in &mut self.enemies {
            physics::step_enemy(enemy, &self.platforms);
        }

        // Arrows: advance, resolve hits, drop strays
        for projectile in &mut self.projectiles {
            physics::step_projectile(projectile);
        }
        collision::resolve_projectile_hits(
            &mut self.projectiles,
            &mut self.enemies,
            &mut self.score,
            &mut self.events,
        );
        collision::cull_projectiles(&mut self.projectiles, &self.viewport);

        // Pickups
        collision::collect_coins(
            self.player.rect(),
            &mut self.coins,
            &mut self.score,
            &mut self.events,
        );

        // Respawn / level advance. When a trigger fires the viewport has
        // been explicitly reset, so the follow pass is skipped this frame.
        if !self.frame_triggers() {
            self.viewport.follow(self.player.rect());
        }
    }

    /// Check the per-frame end conditions in strict priority order:
    /// fall-off > hazard contact > level advance. At most one fires per
    /// frame. Returns whether one did.
    fn frame_triggers(&mut self) -> bool {
        if self.player.position.y < config::FALL_OFF_Y {
            self.kill_player(DeathCause::FellOffMap, false);
            return true;
        }

        let player_rect = self.player.rect();
        let touched_hazard = collision::touches_any(player_rect, &self.hazards)
            || self
                .enemies
                .iter()
                .any(|enemy| player_rect.overlaps(&enemy.rect()));
        if touched_hazard {
            self.kill_player(DeathCause::TouchedHazard, true);
            return true;
        }

        if self.player.position.x >= self.end_of_map {
            self.level += 1;
            self.viewport.reset();
            self.events.level_finished.send(LevelFinishedEvent {
                next_level: self.level,
            });
            return true;
        }

        false
    }

    fn kill_player(&mut self, cause: DeathCause, zero_velocity: bool) {
        if zero_velocity {
            self.player.velocity = Vec2::ZERO;
        }
        self.player.respawn();
        self.deaths += 1;
        self.viewport.reset();
        self.events.player_died.send(PlayerDiedEvent { cause });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
