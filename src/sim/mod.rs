//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::first_overlap;
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState, Monster, MonsterKind, Player};
pub use tick::{TickInput, check_collisions, choose_new_target, reset_game, start_new_round, tick};
