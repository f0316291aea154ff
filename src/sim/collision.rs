//! Player-vs-monster overlap queries
//!
//! One collision is resolved per tick. When the player overlaps several
//! monsters at once the winner is the lowest spawn index: the live vec is
//! kept in spawn order, so a front-to-back scan is deterministic for a
//! fixed seed and input stream.

use super::rect::Rect;
use super::state::Monster;

/// Index of the first monster overlapping `body`, scanning in spawn order
pub fn first_overlap(body: &Rect, monsters: &[Monster]) -> Option<usize> {
    monsters.iter().position(|m| m.body.intersects(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MONSTER_SIZE;
    use crate::sim::state::MonsterKind;
    use glam::Vec2;

    fn monster_at(id: u32, x: f32, y: f32) -> Monster {
        Monster {
            id,
            body: Rect::new(x, y, MONSTER_SIZE, MONSTER_SIZE),
            kind: MonsterKind::Blue,
            dir: Vec2::new(1.0, 1.0),
            velocity: 1.0,
        }
    }

    #[test]
    fn test_no_overlap() {
        let body = Rect::new(0.0, 0.0, 64.0, 64.0);
        let monsters = vec![monster_at(1, 200.0, 200.0)];
        assert_eq!(first_overlap(&body, &monsters), None);
    }

    #[test]
    fn test_single_overlap() {
        let body = Rect::new(180.0, 180.0, 64.0, 64.0);
        let monsters = vec![monster_at(1, 500.0, 200.0), monster_at(2, 200.0, 200.0)];
        assert_eq!(first_overlap(&body, &monsters), Some(1));
    }

    #[test]
    fn test_tie_break_is_lowest_spawn_index() {
        // Both monsters overlap the player; the earlier spawn wins.
        let body = Rect::new(100.0, 100.0, 64.0, 64.0);
        let monsters = vec![monster_at(1, 90.0, 90.0), monster_at(2, 110.0, 110.0)];
        assert_eq!(first_overlap(&body, &monsters), Some(0));
    }
}
