//! Monster Wrangler - a single-screen monster-catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, round state machine)
//! - `render`: Presentation adapter (HUD, sprites, pause overlays)
//! - `audio`: Procedural sound cues
//! - `settings`: User preferences

pub mod audio;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 700.0;
    /// Reserved band at the top (target display)
    pub const TOP_MARGIN: f32 = 100.0;
    /// Reserved band at the bottom (HUD / player home row)
    pub const BOTTOM_MARGIN: f32 = 100.0;
    /// Bottom edge of the band monsters and the player move in
    pub const PLAY_BAND_BOTTOM: f32 = ARENA_HEIGHT - BOTTOM_MARGIN;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 64.0;
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const PLAYER_START_LIVES: u32 = 5;
    pub const PLAYER_START_WARPS: u32 = 2;

    /// Monster defaults - speed is an integer step per tick
    pub const MONSTER_SIZE: f32 = 64.0;
    pub const MONSTER_MIN_SPEED: i32 = 1;
    pub const MONSTER_MAX_SPEED: i32 = 5;

    /// Points per correct catch, scaled by the current round number
    pub const CATCH_SCORE: u64 = 100;
    /// Round-clear bonus numerator, scaled by round number and divided by
    /// (1 + round_time)
    pub const ROUND_BONUS: u64 = 10_000;
}
