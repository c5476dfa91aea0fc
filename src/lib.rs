//! Space Jumper - an endless jumper for the terminal.
//!
//! Library modules are pure and testable; all terminal I/O lives in the
//! binary (`main.rs` + `display.rs`).
//! - `entities`: plain game data
//! - `catalog`: power-up kinds and their effects
//! - `compute`: entity factory and per-frame session updates
//! - `highscore`: high-score persistence
//! - `flow`: screen flow controller
//! - `input`: held-key tracking
//! - `viewport`: logical play field ↔ terminal cells
//! - `config`: runtime configuration

pub mod catalog;
pub mod compute;
pub mod config;
pub mod entities;
pub mod flow;
pub mod highscore;
pub mod input;
pub mod viewport;

/// Game tuning constants, all in logical (800×600) units.
pub mod consts {
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 550.0;
    /// Horizontal step per frame while a direction key is held.
    pub const PLAYER_SPEED: f32 = 9.0;

    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    pub const POWER_UP_SIZE: f32 = 30.0;

    /// Added to the vertical velocity every frame (positive = down).
    pub const GRAVITY: f32 = 0.25;
    pub const JUMP_STRENGTH: f32 = -10.0;
    pub const HIGH_JUMP_STRENGTH: f32 = -15.0;
    pub const SLOW_PLATFORM_SPEED: f32 = 1.0;
    /// Velocity the player is pinned to while invincible.
    pub const INVINCIBLE_FLOAT_VELOCITY: f32 = -2.0;

    pub const DEFAULT_FPS: u32 = 60;
}
