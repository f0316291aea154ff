//! Property tests for entity motion and round population

use glam::Vec2;
use proptest::prelude::*;

use monster_wrangler::consts::*;
use monster_wrangler::sim::{
    GameState, Monster, MonsterKind, Player, Rect, TickInput, start_new_round,
};

fn arb_dir() -> impl Strategy<Value = f32> {
    prop_oneof![Just(-1.0f32), Just(1.0f32)]
}

proptest! {
    /// A bouncing monster may overshoot a bound by at most one tick's travel,
    /// and must come back the very next tick.
    #[test]
    fn monster_never_escapes_the_band(
        x in 0i32..=(ARENA_WIDTH - MONSTER_SIZE) as i32,
        y in TOP_MARGIN as i32..=(PLAY_BAND_BOTTOM - MONSTER_SIZE) as i32,
        dx in arb_dir(),
        dy in arb_dir(),
        vel in MONSTER_MIN_SPEED..=MONSTER_MAX_SPEED,
    ) {
        let mut monster = Monster {
            id: 1,
            body: Rect::new(x as f32, y as f32, MONSTER_SIZE, MONSTER_SIZE),
            kind: MonsterKind::Blue,
            dir: Vec2::new(dx, dy),
            velocity: vel as f32,
        };
        let v = monster.velocity;
        for _ in 0..400 {
            monster.update();
            prop_assert!(monster.body.left() >= -v);
            prop_assert!(monster.body.right() <= ARENA_WIDTH + v);
            prop_assert!(monster.body.top() >= TOP_MARGIN - v);
            prop_assert!(monster.body.bottom() <= PLAY_BAND_BOTTOM + v);
        }
    }

    /// Whatever keys are mashed, the player body never leaves the arena.
    #[test]
    fn player_stays_inside_the_arena(
        moves in prop::collection::vec(
            (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
            0..200,
        ),
    ) {
        let mut player = Player::new();
        for (left, right, up, down) in moves {
            player.update(&TickInput { left, right, up, down, ..TickInput::default() });
            prop_assert!(player.body.left() >= 0.0);
            prop_assert!(player.body.right() <= ARENA_WIDTH);
            prop_assert!(player.body.top() >= TOP_MARGIN);
            prop_assert!(player.body.bottom() <= ARENA_HEIGHT);
        }
    }

    /// Every round spawns exactly round_number monsters of each kind, and the
    /// target always matches a live monster.
    #[test]
    fn rounds_always_spawn_n_of_each_kind(seed in any::<u64>(), rounds in 1u32..5) {
        let mut state = GameState::new(seed);
        for _ in 0..rounds {
            start_new_round(&mut state);
        }
        prop_assert_eq!(state.round_number, rounds);
        prop_assert_eq!(state.monsters.len(), 4 * rounds as usize);
        for kind in MonsterKind::ALL {
            let n = state.monsters.iter().filter(|m| m.kind == kind).count();
            prop_assert_eq!(n, rounds as usize);
        }
        prop_assert!(state.monsters.iter().any(|m| m.kind == state.target_kind));
    }
}
