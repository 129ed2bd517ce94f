//! Scrolling viewport
//!
//! The camera is an offset pair defining the visible window into the level.
//! Each frame it is nudged just far enough to keep the player's bounding box
//! inside a margin band, then truncated to whole pixels so tile-aligned
//! sprites don't land on seams.
//!
//! The offset is deliberately not clamped to the map: it can go negative
//! when the player stands near the left edge.

use macroquad::prelude::Rect;

use crate::config::{
    BOTTOM_VIEWPORT_MARGIN, LEFT_VIEWPORT_MARGIN, RIGHT_VIEWPORT_MARGIN, SCREEN_HEIGHT,
    SCREEN_WIDTH, TOP_VIEWPORT_MARGIN,
};

/// Camera offset: the world coordinates of the screen's bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub left: f32,
    pub bottom: f32,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snap back to the world origin
    pub fn reset(&mut self) {
        self.left = 0.0;
        self.bottom = 0.0;
    }

    /// Scroll so the player's box stays inside the margin band.
    ///
    /// Four independent one-directional clamps; under single-step movement at
    /// most one horizontal and one vertical clamp can fire per frame. After
    /// any adjustment the offsets are truncated to integers. Returns whether
    /// the offset changed.
    pub fn follow(&mut self, player: Rect) -> bool {
        let mut changed = false;

        let player_left = player.x;
        let player_right = player.x + player.w;
        let player_bottom = player.y;
        let player_top = player.y + player.h;

        // Scroll left
        let left_boundary = self.left + LEFT_VIEWPORT_MARGIN;
        if player_left < left_boundary {
            self.left -= left_boundary - player_left;
            changed = true;
        }

        // Scroll right
        let right_boundary = self.left + SCREEN_WIDTH - RIGHT_VIEWPORT_MARGIN;
        if player_right > right_boundary {
            self.left += player_right - right_boundary;
            changed = true;
        }

        // Scroll up
        let top_boundary = self.bottom + SCREEN_HEIGHT - TOP_VIEWPORT_MARGIN;
        if player_top > top_boundary {
            self.bottom += player_top - top_boundary;
            changed = true;
        }

        // Scroll down
        let bottom_boundary = self.bottom + BOTTOM_VIEWPORT_MARGIN;
        if player_bottom < bottom_boundary {
            self.bottom -= bottom_boundary - player_bottom;
            changed = true;
        }

        if changed {
            // Whole pixels only, or tiles blit with visible seams
            self.left = self.left.trunc();
            self.bottom = self.bottom.trunc();
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A player box well inside the margin band for a viewport at origin
    fn banded_player() -> Rect {
        Rect::new(400.0, 300.0, 40.0, 56.0)
    }

    #[test]
    fn test_inside_band_leaves_offset_unchanged() {
        let mut view = Viewport::new();
        let changed = view.follow(banded_player());
        assert!(!changed);
        assert_eq!(view, Viewport { left: 0.0, bottom: 0.0 });
    }

    #[test]
    fn test_right_overflow_scrolls_by_exact_distance() {
        let mut view = Viewport::new();
        // Right boundary sits at SCREEN_WIDTH - RIGHT_VIEWPORT_MARGIN = 850
        let overshoot = 37.0;
        let player = Rect::new(850.0 + overshoot - 40.0, 300.0, 40.0, 56.0);
        assert!(view.follow(player));
        assert_eq!(view.left, overshoot);
        assert_eq!(view.bottom, 0.0);
    }

    #[test]
    fn test_left_overflow_scrolls_negative() {
        let mut view = Viewport::new();
        // Player left edge at 100 is inside the 150px left margin
        let player = Rect::new(100.0, 300.0, 40.0, 56.0);
        assert!(view.follow(player));
        assert_eq!(view.left, -50.0);
    }

    #[test]
    fn test_vertical_clamps() {
        // Top: boundary at 650 - 100 = 550
        let mut view = Viewport::new();
        let player = Rect::new(400.0, 560.0, 40.0, 56.0);
        assert!(view.follow(player));
        assert_eq!(view.bottom, 66.0);

        // Bottom: boundary at 50
        let mut view = Viewport::new();
        let player = Rect::new(400.0, 20.0, 40.0, 56.0);
        assert!(view.follow(player));
        assert_eq!(view.bottom, -30.0);
    }

    #[test]
    fn test_offsets_truncate_to_integers() {
        let mut view = Viewport::new();
        // Overshoot the right boundary by 12.6 fractional pixels
        let player = Rect::new(850.0 + 12.6 - 40.0, 300.0, 40.0, 56.0);
        assert!(view.follow(player));
        assert_eq!(view.left, 12.0);
        assert_eq!(view.left.fract(), 0.0);
        assert_eq!(view.bottom.fract(), 0.0);
    }

    #[test]
    fn test_follow_is_idempotent_once_settled() {
        let mut view = Viewport::new();
        let player = Rect::new(900.0, 300.0, 40.0, 56.0);
        view.follow(player);
        let settled = view;
        // The same player position no longer violates the band
        assert!(!view.follow(player));
        assert_eq!(view, settled);
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut view = Viewport { left: 250.0, bottom: 80.0 };
        view.reset();
        assert_eq!(view, Viewport { left: 0.0, bottom: 0.0 });
    }
}
