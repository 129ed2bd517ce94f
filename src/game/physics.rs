//! Platform physics
//!
//! Fixed-step integration for the player, enemies, and arrows. One step per
//! rendered frame; speeds in `config` are tuned in pixels per frame.
//!
//! Collision resolution is axis-separated: move and resolve x, then move and
//! resolve y. Resting contact works out of this naturally: gravity sinks the
//! player into the platform by a pixel, the vertical pass puts them back on
//! top and flags them grounded.

use macroquad::prelude::Rect;

use super::entities::{Enemy, Player, Projectile};
use crate::config;

/// Strict AABB penetration test. Exactly-touching edges do not count, so a
/// player resting on a platform is not "inside" it for the horizontal pass.
fn penetrates(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Advance the player one frame: apply input, gravity, and platform
/// collision. Returns true if a jump started this frame.
pub fn step_player(
    player: &mut Player,
    move_dir: f32,
    jump_pressed: bool,
    platforms: &[Rect],
) -> bool {
    player.velocity.x = move_dir * config::PLAYER_MOVEMENT_SPEED;

    let mut jumped = false;
    if jump_pressed && player.grounded {
        player.velocity.y = config::PLAYER_JUMP_SPEED;
        player.grounded = false;
        jumped = true;
    }

    player.velocity.y -= config::GRAVITY;

    let half_w = config::PLAYER_WIDTH / 2.0;
    let half_h = config::PLAYER_HEIGHT / 2.0;

    // Horizontal move and resolve
    player.position.x += player.velocity.x;
    for platform in platforms {
        if penetrates(player.rect(), *platform) {
            if player.velocity.x > 0.0 {
                player.position.x = platform.x - half_w;
            } else if player.velocity.x < 0.0 {
                player.position.x = platform.x + platform.w + half_w;
            }
        }
    }

    // Vertical move and resolve
    player.position.y += player.velocity.y;
    player.grounded = false;
    for platform in platforms {
        if penetrates(player.rect(), *platform) {
            if player.velocity.y < 0.0 {
                // Landed on top
                player.position.y = platform.y + platform.h + half_h;
                player.velocity.y = 0.0;
                player.grounded = true;
            } else if player.velocity.y > 0.0 {
                // Bumped the underside
                player.position.y = platform.y - half_h;
                player.velocity.y = 0.0;
            }
        }
    }

    jumped
}

/// Advance a patrolling enemy one frame. Reverses on platform collision
/// first, then on either patrol boundary.
pub fn step_enemy(enemy: &mut Enemy, platforms: &[Rect]) {
    enemy.position.x += enemy.velocity_x;

    if platforms.iter().any(|p| penetrates(enemy.rect(), *p)) {
        enemy.position.x -= enemy.velocity_x;
        enemy.velocity_x *= -1.0;
    } else if enemy
        .boundary_left
        .is_some_and(|bound| enemy.left() < bound)
    {
        enemy.velocity_x *= -1.0;
    } else if enemy
        .boundary_right
        .is_some_and(|bound| enemy.right() > bound)
    {
        enemy.velocity_x *= -1.0;
    }
}

/// Advance an arrow one frame. Arrows fly straight, unaffected by gravity.
pub fn step_projectile(projectile: &mut Projectile) {
    projectile.position += projectile.velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::Vec2;

    fn floor() -> Rect {
        // Top surface at y = 122, so a standing player centers at y = 150
        Rect::new(0.0, 0.0, 800.0, 122.0)
    }

    fn grounded_player() -> Player {
        let mut player = Player::new();
        player.position = Vec2::new(400.0, 150.0);
        player.grounded = true;
        player
    }

    #[test]
    fn test_gravity_accumulates_in_freefall() {
        let mut player = Player::new();
        player.position = Vec2::new(400.0, 500.0);

        step_player(&mut player, 0.0, false, &[]);
        assert_eq!(player.velocity.y, -config::GRAVITY);
        assert_eq!(player.position.y, 500.0 - config::GRAVITY);

        step_player(&mut player, 0.0, false, &[]);
        assert_eq!(player.velocity.y, -2.0 * config::GRAVITY);
        assert_eq!(player.position.y, 500.0 - 3.0 * config::GRAVITY);
    }

    #[test]
    fn test_falling_player_lands_and_grounds() {
        let mut player = Player::new();
        player.position = Vec2::new(400.0, 160.0);

        for _ in 0..20 {
            step_player(&mut player, 0.0, false, &[floor()]);
        }

        assert!(player.grounded);
        assert_eq!(player.velocity.y, 0.0);
        // Player bottom rests exactly on the floor top
        assert_eq!(player.position.y - config::PLAYER_HEIGHT / 2.0, 122.0);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut airborne = Player::new();
        airborne.position = Vec2::new(400.0, 500.0);
        airborne.grounded = false;
        let jumped = step_player(&mut airborne, 0.0, true, &[]);
        assert!(!jumped);
        assert!(airborne.velocity.y < 0.0);

        let mut player = grounded_player();
        let jumped = step_player(&mut player, 0.0, true, &[floor()]);
        assert!(jumped);
        assert_eq!(player.velocity.y, config::PLAYER_JUMP_SPEED - config::GRAVITY);
        assert!(!player.grounded);
    }

    #[test]
    fn test_ceiling_stops_upward_motion() {
        let ceiling = Rect::new(0.0, 300.0, 800.0, 100.0);
        let mut player = Player::new();
        player.position = Vec2::new(400.0, 250.0);
        player.velocity.y = config::PLAYER_JUMP_SPEED;

        // Two frames is enough to reach the ceiling from here
        step_player(&mut player, 0.0, false, &[ceiling]);
        step_player(&mut player, 0.0, false, &[ceiling]);

        // Head flush against the ceiling underside, upward motion stopped
        assert_eq!(player.position.y + config::PLAYER_HEIGHT / 2.0, 300.0);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn test_wall_blocks_horizontal_movement() {
        let wall = Rect::new(500.0, 100.0, 100.0, 300.0);
        let mut player = grounded_player();
        player.position.x = 470.0;

        for _ in 0..10 {
            step_player(&mut player, 1.0, false, &[floor(), wall]);
        }

        // Flush against the wall, still standing on the floor
        assert_eq!(player.position.x + config::PLAYER_WIDTH / 2.0, 500.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_enemy_reverses_at_patrol_bounds() {
        let mut enemy = Enemy::new(Vec2::new(590.0, 150.0), Some((200.0, 600.0)));
        for _ in 0..3 {
            step_enemy(&mut enemy, &[]);
        }
        assert_eq!(enemy.velocity_x, -config::ENEMY_SPEED);

        // Walk back to the left bound and reverse again
        for _ in 0..250 {
            step_enemy(&mut enemy, &[]);
        }
        assert_eq!(enemy.velocity_x, config::ENEMY_SPEED);
    }

    #[test]
    fn test_enemy_reverses_on_wall_contact() {
        let wall = Rect::new(700.0, 100.0, 100.0, 100.0);
        let mut enemy = Enemy::new(Vec2::new(680.0, 150.0), None);

        step_enemy(&mut enemy, &[wall]);

        assert_eq!(enemy.position.x, 680.0);
        assert_eq!(enemy.velocity_x, -config::ENEMY_SPEED);
    }

    #[test]
    fn test_projectile_advances_by_velocity() {
        let mut proj = Projectile::fire_at(Vec2::ZERO, Vec2::new(100.0, 0.0));
        step_projectile(&mut proj);
        assert_eq!(proj.position, Vec2::new(config::BULLET_SPEED, 0.0));
    }
}
