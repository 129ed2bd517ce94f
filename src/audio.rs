//! Sound effects
//!
//! Loads the named sound assets once at startup and plays them
//! fire-and-forget in response to simulation events. Playback is
//! non-blocking and nothing tracks completion.

use macroquad::audio::{load_sound, play_sound_once, Sound};

use crate::game::Events;

/// All sound effects the game can play
pub struct SoundBank {
    coin: Sound,
    jump: Sound,
    hurt: Sound,
    shoot: Sound,
    hit: Sound,
}

impl SoundBank {
    /// Load every sound effect. A missing or undecodable file is an error;
    /// the game does not run half-silent.
    pub async fn load() -> Result<Self, String> {
        Ok(Self {
            coin: load_named("assets/sounds/coin.wav").await?,
            jump: load_named("assets/sounds/jump.wav").await?,
            hurt: load_named("assets/sounds/hurt.wav").await?,
            shoot: load_named("assets/sounds/arrow_shoot.wav").await?,
            hit: load_named("assets/sounds/arrow_hit.wav").await?,
        })
    }

    /// Turn this frame's events into playback calls
    pub fn play_frame_events(&self, events: &Events) {
        for _ in events.coin_collected.iter() {
            play_sound_once(&self.coin);
        }
        for _ in events.jumped.iter() {
            play_sound_once(&self.jump);
        }
        for _ in events.player_died.iter() {
            play_sound_once(&self.hurt);
        }
        for _ in events.shot_fired.iter() {
            play_sound_once(&self.shoot);
        }
        for _ in events.enemy_defeated.iter() {
            play_sound_once(&self.hit);
        }
    }
}

async fn load_named(path: &str) -> Result<Sound, String> {
    load_sound(path)
        .await
        .map_err(|e| format!("failed to load sound {}: {}", path, e))
}
