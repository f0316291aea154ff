//! Per-tick state machine: movement, round clock, collision resolution
//!
//! One `tick` per logical frame. The intro and game-over pauses are plain
//! states of this machine - gameplay (including the round clock) does not
//! advance in them, only the confirm input is honored.

use rand::seq::IndexedRandom;

use super::collision;
use super::state::{GameEvent, GamePhase, GameState, MonsterKind};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held directional signals
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Warp to the bottom of the arena (edge-triggered)
    pub warp: bool,
    /// Dismiss the intro / game-over pause (edge-triggered)
    pub confirm: bool,
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Intro => {
            if input.confirm {
                start_new_round(state);
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::GameOver => {
            if input.confirm {
                reset_game(state);
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.player.update(input);
    if input.warp && state.player.warp() {
        state.push_event(GameEvent::Warp);
    }

    for monster in &mut state.monsters {
        monster.update();
    }

    // Round clock: one second per TICK_RATE ticks
    state.frame_count += 1;
    if state.frame_count == TICK_RATE {
        state.round_time += 1;
        state.frame_count = 0;
    }

    check_collisions(state);
}

/// Resolve at most one player-monster overlap
pub fn check_collisions(state: &mut GameState) {
    let Some(idx) = collision::first_overlap(&state.player.body, &state.monsters) else {
        return;
    };

    if state.monsters[idx].kind == state.target_kind {
        state.score += CATCH_SCORE * state.round_number as u64;
        state.monsters.remove(idx);
        if !state.monsters.is_empty() {
            state.push_event(GameEvent::Catch);
            choose_new_target(state);
        } else {
            state.player.reset();
            start_new_round(state);
        }
    } else {
        state.push_event(GameEvent::Die);
        state.player.lives = state.player.lives.saturating_sub(1);
        if state.player.lives == 0 {
            log::info!("game over, final score {}", state.score);
            state.phase = GamePhase::GameOver;
        }
        state.player.reset();
    }
}

/// Finish the current round (if any) and spawn the next one
pub fn start_new_round(state: &mut GameState) {
    // Time bonus for the round just cleared; round 0 yields nothing
    state.score += ROUND_BONUS * state.round_number as u64 / (1 + state.round_time) as u64;

    state.round_time = 0;
    state.frame_count = 0;
    state.round_number += 1;
    // Warp reward, also granted for round 1
    state.player.warps += 1;

    state.monsters.clear();
    for _ in 0..state.round_number {
        for kind in MonsterKind::ALL {
            state.spawn_monster(kind);
        }
    }

    choose_new_target(state);
    state.push_event(GameEvent::LevelUp);
    log::info!(
        "round {}: {} monsters, target {}",
        state.round_number,
        state.monsters.len(),
        state.target_kind.as_str()
    );
}

/// Adopt the type of a uniformly random live monster as the new target
///
/// Calling this with an empty set is an invariant violation, not a
/// recoverable error.
pub fn choose_new_target(state: &mut GameState) {
    let target = state
        .monsters
        .choose(&mut state.rng)
        .expect("target selection requires a non-empty monster set");
    state.target_kind = target.kind;
}

/// Reset to a fresh game and launch its first round
pub fn reset_game(state: &mut GameState) {
    state.score = 0;
    state.round_number = 0;
    state.round_time = 0;
    state.frame_count = 0;
    state.player.lives = PLAYER_START_LIVES;
    state.player.warps = PLAYER_START_WARPS;
    state.player.reset();
    start_new_round(state);
}
