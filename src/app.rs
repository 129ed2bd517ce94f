//! Application state and screen flow
//!
//! The fixed set of screens the game moves through. Title and instructions
//! are static pages advanced by a mouse click; Playing runs the simulation
//! and loops on level advance without leaving the screen.

use macroquad::prelude::*;

use crate::audio::SoundBank;
use crate::config::SCREEN_HEIGHT;
use crate::game::{FrameInput, GameState};
use crate::input::{Action, InputState};
use crate::render;
use crate::world::{load_map, TileMap};

/// The screens of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Instructions,
    Playing,
    /// Part of the screen flow, but no gameplay path currently enters it
    #[allow(dead_code)]
    GameOver,
}

/// Path of the map file for a level index
pub fn level_path(level: u32) -> String {
    format!("assets/maps/level_{}.ron", level)
}

/// Top-level application state: the active screen plus everything the
/// running game needs.
pub struct App {
    pub screen: Screen,
    pub state: GameState,
    /// The currently loaded map, kept for drawing its decoration layers
    pub map: TileMap,
    pub sounds: SoundBank,
    pub input: InputState,
}

impl App {
    pub fn new(first_map: TileMap, sounds: SoundBank) -> Self {
        let mut state = GameState::new();
        state.enter_level(&first_map);
        Self {
            screen: Screen::Title,
            state,
            map: first_map,
            sounds,
            input: InputState::new(),
        }
    }

    /// Run one frame: update the active screen and draw it.
    /// Errors are fatal resource failures.
    pub fn frame(&mut self) -> Result<(), String> {
        match self.screen {
            Screen::Title => {
                render::draw_title_screen();
                if is_mouse_button_pressed(MouseButton::Left) {
                    self.screen = Screen::Instructions;
                }
            }
            Screen::Instructions => {
                render::draw_instructions_screen();
                if is_mouse_button_pressed(MouseButton::Left) {
                    self.screen = Screen::Playing;
                }
            }
            Screen::Playing => self.play_frame()?,
            Screen::GameOver => render::draw_game_over_screen(),
        }
        Ok(())
    }

    /// One simulation-plus-draw frame of the running game
    fn play_frame(&mut self) -> Result<(), String> {
        let fire_target = if self.input.action_pressed(Action::Fire) {
            Some(self.screen_to_world(self.input.mouse_screen_position()))
        } else {
            None
        };

        let input = FrameInput {
            move_dir: self.input.move_dir(),
            jump_pressed: self.input.action_pressed(Action::Jump),
            fire_target,
        };

        self.state.tick(&input);
        self.sounds.play_frame_events(&self.state.events);

        for death in self.state.events.player_died.iter() {
            println!("Player died ({:?}), {} total", death.cause, self.state.deaths);
        }

        // Reaching the end of the map: load the next level's resources.
        // A missing map file is fatal, same as at startup.
        let next_level = self
            .state
            .events
            .level_finished
            .iter()
            .next()
            .map(|e| e.next_level);
        if let Some(level) = next_level {
            let path = level_path(level);
            let map =
                load_map(&path).map_err(|e| format!("failed to load {}: {}", path, e))?;
            println!("Entering level {} ({}x{} tiles)", level, map.width, map.height);
            self.state.enter_level(&map);
            self.map = map;
        }

        self.state.events.clear_all();

        render::draw_game(&self.state, &self.map);
        Ok(())
    }

    /// Convert a screen position (y-down, window space) to world
    /// coordinates (y-up, offset by the viewport).
    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x + self.state.viewport.left,
            self.state.viewport.bottom + (SCREEN_HEIGHT - screen.y),
        )
    }
}
