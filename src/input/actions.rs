//! Game action definitions
//!
//! The four logical commands the game understands, independent of which key
//! or button produced them.

/// All possible game actions that can be triggered by input
///
/// Key mappings:
/// - A / Left arrow  = MoveLeft
/// - D / Right arrow = MoveRight
/// - W / Up arrow    = Jump
/// - Mouse press     = Fire (aimed at the clicked point)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Fire,
}
