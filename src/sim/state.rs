//! Game state and core simulation types
//!
//! Everything that defines a run lives here: the player, the live monster
//! set, the round bookkeeping, and the seeded RNG that makes runs
//! reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Pre-first-round pause, waiting for confirm
    Intro,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for confirm to start a fresh game
    GameOver,
}

/// The four monster colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterKind {
    Blue,
    Green,
    Purple,
    Yellow,
}

impl MonsterKind {
    /// All kinds, in spawn order
    pub const ALL: [MonsterKind; 4] = [
        MonsterKind::Blue,
        MonsterKind::Green,
        MonsterKind::Purple,
        MonsterKind::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MonsterKind::Blue => "blue",
            MonsterKind::Green => "green",
            MonsterKind::Purple => "purple",
            MonsterKind::Yellow => "yellow",
        }
    }
}

/// Gameplay events emitted by the sim, drained once per frame by the
/// frontend (audio cues are fire-and-forget)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Correct-type monster caught, round continues
    Catch,
    /// Wrong-type monster touched
    Die,
    /// Warp charge spent
    Warp,
    /// New round spawned
    LevelUp,
}

/// The player sprite
///
/// Created once per process; rounds and deaths reposition it, never
/// recreate it.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Rect,
    pub lives: u32,
    pub warps: u32,
    /// Step per tick along each pressed axis
    pub velocity: f32,
}

impl Player {
    pub fn new() -> Self {
        let mut body = Rect::new(0.0, 0.0, PLAYER_SIZE, PLAYER_SIZE);
        body.set_center_x(ARENA_WIDTH / 2.0);
        body.set_bottom(ARENA_HEIGHT);
        Self {
            body,
            lives: PLAYER_START_LIVES,
            warps: PLAYER_START_WARPS,
            velocity: PLAYER_SPEED,
        }
    }

    /// Move along each pressed axis independently (diagonals stack, not
    /// normalized)
    ///
    /// Each direction only fires while the body is strictly inside that
    /// direction's bound, and the step is clamped at the bound. The bounds
    /// are the monster play band, x in [0, W], y in [T, H-B] - except that
    /// `reset`/`warp` park the player below the band (bottom = H), from
    /// where it can only walk up.
    pub fn update(&mut self, input: &TickInput) {
        let v = self.velocity;
        if input.left && self.body.left() > 0.0 {
            self.body.pos.x = (self.body.pos.x - v).max(0.0);
        }
        if input.right && self.body.right() < ARENA_WIDTH {
            self.body.pos.x = (self.body.pos.x + v).min(ARENA_WIDTH - self.body.size.x);
        }
        if input.up && self.body.top() > TOP_MARGIN {
            self.body.pos.y = (self.body.pos.y - v).max(TOP_MARGIN);
        }
        if input.down && self.body.bottom() < PLAY_BAND_BOTTOM {
            self.body.pos.y = (self.body.pos.y + v).min(PLAY_BAND_BOTTOM - self.body.size.y);
        }
    }

    /// Spend a warp charge and snap to the bottom of the arena
    ///
    /// Returns whether a charge was actually spent (false is a complete
    /// no-op, no cue).
    pub fn warp(&mut self) -> bool {
        if self.warps == 0 {
            return false;
        }
        self.warps -= 1;
        self.body.set_bottom(ARENA_HEIGHT);
        true
    }

    /// Recenter horizontally and snap to the bottom of the arena
    pub fn reset(&mut self) {
        self.body.set_center_x(ARENA_WIDTH / 2.0);
        self.body.set_bottom(ARENA_HEIGHT);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A monster entity
#[derive(Debug, Clone)]
pub struct Monster {
    /// Spawn id, strictly increasing within a run
    pub id: u32,
    pub body: Rect,
    pub kind: MonsterKind,
    /// Direction, components in {-1, +1}
    pub dir: Vec2,
    /// Step per tick, integer-valued in [1, 5]
    pub velocity: f32,
}

impl Monster {
    /// Advance one tick and reflect off the play-band edges
    ///
    /// Reflection assigns the direction sign outright instead of negating,
    /// so a body already past a bound can never flip twice in a row and run
    /// away; escape beyond a bound is limited to one tick's travel.
    pub fn update(&mut self) {
        self.body.pos += self.dir * self.velocity;

        if self.body.left() <= 0.0 {
            self.dir.x = 1.0;
        } else if self.body.right() >= ARENA_WIDTH {
            self.dir.x = -1.0;
        }
        if self.body.top() <= TOP_MARGIN {
            self.dir.y = 1.0;
        } else if self.body.bottom() >= PLAY_BAND_BOTTOM {
            self.dir.y = -1.0;
        }
    }
}

/// Complete game state (deterministic given the seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG - all randomness flows through here
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub score: u64,
    /// 0 until the first round starts
    pub round_number: u32,
    /// Seconds elapsed in the current round
    pub round_time: u32,
    /// Ticks since the last round_time bump
    pub frame_count: u32,
    /// The monster type that must currently be caught
    pub target_kind: MonsterKind,
    pub player: Player,
    /// Live monsters, in spawn order (ids ascending)
    pub monsters: Vec<Monster>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    /// Next monster id
    next_id: u32,
}

impl GameState {
    /// Create a fresh game in the intro pause
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let target_kind = MonsterKind::ALL[rng.random_range(0..MonsterKind::ALL.len())];
        Self {
            seed,
            rng,
            phase: GamePhase::Intro,
            score: 0,
            round_number: 0,
            round_time: 0,
            frame_count: 0,
            target_kind,
            player: Player::new(),
            monsters: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new monster id
    pub fn next_monster_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one monster of `kind` at a uniformly random spot in the play
    /// band, with random direction and integer speed in [1, 5]
    pub fn spawn_monster(&mut self, kind: MonsterKind) {
        let x = self.rng.random_range(0..=(ARENA_WIDTH - MONSTER_SIZE) as i32) as f32;
        let y = self
            .rng
            .random_range(TOP_MARGIN as i32..=(PLAY_BAND_BOTTOM - MONSTER_SIZE) as i32)
            as f32;
        let dx = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let dy = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let velocity = self.rng.random_range(MONSTER_MIN_SPEED..=MONSTER_MAX_SPEED) as f32;

        let id = self.next_monster_id();
        self.monsters.push(Monster {
            id,
            body: Rect::new(x, y, MONSTER_SIZE, MONSTER_SIZE),
            kind,
            dir: Vec2::new(dx, dy),
            velocity,
        });
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
