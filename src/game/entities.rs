//! Game entities
//!
//! Plain data structs kept in per-kind lists on the game state. Positions
//! are sprite centers in world pixels (y-up); each entity exposes its
//! axis-aligned bounding box for the engine's rectangle intersection test.

use macroquad::prelude::{Rect, Vec2};

use crate::config;

/// Center a box of the given size on a position
fn centered_rect(position: Vec2, w: f32, h: f32) -> Rect {
    Rect::new(position.x - w / 2.0, position.y - h / 2.0, w, h)
}

/// The player character. Never destroyed, only repositioned.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Standing on a platform this frame
    pub grounded: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: Vec2::new(config::PLAYER_START_X, config::PLAYER_START_Y),
            velocity: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Put the player back at the spawn point. Velocity is left alone;
    /// callers that need it zeroed do so explicitly.
    pub fn respawn(&mut self) {
        self.position = Vec2::new(config::PLAYER_START_X, config::PLAYER_START_Y);
        self.grounded = false;
    }

    pub fn rect(&self) -> Rect {
        centered_rect(self.position, config::PLAYER_WIDTH, config::PLAYER_HEIGHT)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy)]
pub struct Coin {
    pub position: Vec2,
}

impl Coin {
    pub fn rect(&self) -> Rect {
        centered_rect(self.position, config::COIN_SIZE, config::COIN_SIZE)
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub position: Vec2,
    /// Horizontal patrol velocity, sign is the current direction
    pub velocity_x: f32,
    /// Optional patrol bounds in world pixels (left edge, right edge)
    pub boundary_left: Option<f32>,
    pub boundary_right: Option<f32>,
}

impl Enemy {
    /// Spawn at a position with optional patrol bounds from the map
    pub fn new(position: Vec2, patrol: Option<(f32, f32)>) -> Self {
        Self {
            position,
            velocity_x: config::ENEMY_SPEED,
            boundary_left: patrol.map(|(min, _)| min),
            boundary_right: patrol.map(|(_, max)| max),
        }
    }

    pub fn rect(&self) -> Rect {
        centered_rect(self.position, config::ENEMY_WIDTH, config::ENEMY_HEIGHT)
    }

    /// Left edge of the bounding box
    pub fn left(&self) -> f32 {
        self.position.x - config::ENEMY_WIDTH / 2.0
    }

    /// Right edge of the bounding box
    pub fn right(&self) -> f32 {
        self.position.x + config::ENEMY_WIDTH / 2.0
    }
}

/// An arrow fired by the player
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Flight angle in radians, used to draw the sprite pointing forward
    pub rotation: f32,
}

impl Projectile {
    /// Fire from `start` toward `target` at the configured arrow speed
    pub fn fire_at(start: Vec2, target: Vec2) -> Self {
        let delta = target - start;
        let angle = delta.y.atan2(delta.x);
        Self {
            position: start,
            velocity: Vec2::new(angle.cos(), angle.sin()) * config::BULLET_SPEED,
            rotation: angle,
        }
    }

    pub fn rect(&self) -> Rect {
        centered_rect(self.position, config::ARROW_WIDTH, config::ARROW_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_rect_is_centered() {
        let player = Player::new();
        let rect = player.rect();
        assert_eq!(rect.x + rect.w / 2.0, player.position.x);
        assert_eq!(rect.y + rect.h / 2.0, player.position.y);
    }

    #[test]
    fn test_respawn_returns_to_start() {
        let mut player = Player::new();
        player.position = Vec2::new(700.0, 300.0);
        player.respawn();
        assert_eq!(player.position.x, config::PLAYER_START_X);
        assert_eq!(player.position.y, config::PLAYER_START_Y);
    }

    #[test]
    fn test_projectile_flies_toward_target() {
        let proj = Projectile::fire_at(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        assert!(proj.velocity.x > 0.0);
        assert_eq!(proj.velocity.y, 0.0);
        assert_eq!(proj.velocity.length(), config::BULLET_SPEED);
        assert_eq!(proj.rotation, 0.0);

        let up = Projectile::fire_at(Vec2::new(0.0, 0.0), Vec2::new(0.0, 50.0));
        assert!(up.velocity.y > 0.0);
        assert!((up.velocity.length() - config::BULLET_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_enemy_spawns_moving_with_map_bounds() {
        let enemy = Enemy::new(Vec2::new(300.0, 150.0), Some((200.0, 600.0)));
        assert_eq!(enemy.velocity_x, config::ENEMY_SPEED);
        assert_eq!(enemy.boundary_left, Some(200.0));
        assert_eq!(enemy.boundary_right, Some(600.0));

        let free = Enemy::new(Vec2::new(300.0, 150.0), None);
        assert_eq!(free.boundary_left, None);
        assert_eq!(free.boundary_right, None);
    }
}
