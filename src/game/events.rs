//! Event System
//!
//! Events allow decoupled communication between the simulation and the
//! shell. Instead of the simulation calling into audio or level loading
//! directly, it sends events that the shell drains after each tick:
//!
//! 1. Collision policy detects a pickup → sends CoinCollectedEvent
//! 2. Audio reads CoinCollectedEvent → plays the coin sound
//! 3. App reads LevelFinishedEvent → loads the next map
//!
//! Each consumer handles its own concern without knowing about the others.

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
/// Add new event types as fields here.
#[derive(Default)]
pub struct Events {
    /// Player picked up a coin
    pub coin_collected: EventQueue<CoinCollectedEvent>,

    /// Player left the ground
    pub jumped: EventQueue<JumpedEvent>,

    /// Player fired an arrow
    pub shot_fired: EventQueue<ShotFiredEvent>,

    /// An arrow hit an enemy
    pub enemy_defeated: EventQueue<EnemyDefeatedEvent>,

    /// Player died and respawned
    pub player_died: EventQueue<PlayerDiedEvent>,

    /// Player reached the right edge of the map
    pub level_finished: EventQueue<LevelFinishedEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues. Call at end of frame.
    pub fn clear_all(&mut self) {
        self.coin_collected.clear();
        self.jumped.clear();
        self.shot_fired.clear();
        self.enemy_defeated.clear();
        self.player_died.clear();
        self.level_finished.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// A coin was collected
#[derive(Debug, Clone, Copy)]
pub struct CoinCollectedEvent;

/// The player jumped
#[derive(Debug, Clone, Copy)]
pub struct JumpedEvent;

/// An arrow was fired
#[derive(Debug, Clone, Copy)]
pub struct ShotFiredEvent;

/// An enemy was defeated by an arrow
#[derive(Debug, Clone, Copy)]
pub struct EnemyDefeatedEvent;

/// Why the player died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Fell below the bottom of the map
    FellOffMap,
    /// Touched a hazard tile or an enemy
    TouchedHazard,
}

/// The player died and was respawned
#[derive(Debug, Clone, Copy)]
pub struct PlayerDiedEvent {
    pub cause: DeathCause,
}

/// The player reached the end of the map
#[derive(Debug, Clone, Copy)]
pub struct LevelFinishedEvent {
    /// Level index to load next
    pub next_level: u32,
}
