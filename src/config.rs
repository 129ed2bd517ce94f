//! Game tuning constants
//!
//! Every gameplay number lives here so levels and feel can be tuned in one
//! place. Distances are in pixels, speeds in pixels per simulation frame.

/// Window width in pixels
pub const SCREEN_WIDTH: f32 = 1000.0;
/// Window height in pixels
pub const SCREEN_HEIGHT: f32 = 650.0;
/// Window title
pub const SCREEN_TITLE: &str = "Geo-Explore";

/// Horizontal player speed while a move key is held
pub const PLAYER_MOVEMENT_SPEED: f32 = 4.5;
/// Downward acceleration added to vertical velocity every frame
pub const GRAVITY: f32 = 1.0;
/// Upward velocity applied on jump
pub const PLAYER_JUMP_SPEED: f32 = 15.0;
/// Arrow flight speed
pub const BULLET_SPEED: f32 = 5.0;
/// Horizontal enemy patrol speed
pub const ENEMY_SPEED: f32 = 2.0;

/// Player spawn point, also the respawn target after a death
pub const PLAYER_START_X: f32 = 64.0;
pub const PLAYER_START_Y: f32 = 64.0;

/// Falling below this height counts as falling off the map
pub const FALL_OFF_Y: f32 = -100.0;

/// Player bounding box
pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 56.0;
/// Enemy bounding box
pub const ENEMY_WIDTH: f32 = 44.0;
pub const ENEMY_HEIGHT: f32 = 44.0;
/// Arrow bounding box
pub const ARROW_WIDTH: f32 = 24.0;
pub const ARROW_HEIGHT: f32 = 8.0;
/// Coin diameter
pub const COIN_SIZE: f32 = 28.0;

/// Points for picking up a coin
pub const COIN_SCORE: u32 = 1;
/// Points for defeating an enemy
pub const ENEMY_SCORE: u32 = 5;

// Minimum margin, in pixels, kept between the player and the screen edge
// before the viewport scrolls to follow.
pub const LEFT_VIEWPORT_MARGIN: f32 = 150.0;
pub const RIGHT_VIEWPORT_MARGIN: f32 = 150.0;
pub const BOTTOM_VIEWPORT_MARGIN: f32 = 50.0;
pub const TOP_VIEWPORT_MARGIN: f32 = 100.0;
