//! Uniformly random move selection, used as a weak opponent

use rand::{seq::IndexedRandom, Rng};

use crate::core::game::Game;

use super::node::{Move, SearchNode};

/// Pick any legal move for the side opposite to `game.side_to_move()`.
/// Partial and complete combos are both candidates.
pub fn random_move(game: &Game, rng: &mut impl Rng) -> Option<(Move, Game)> {
    let mut root = SearchNode::root(game.clone(), !game.side_to_move());
    let children = root.children().collect::<Vec<_>>();
    let child = children.choose(rng)?.clone();
    let mv = child.mv()?.clone();

    Some((mv, child.into_game()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Side};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_move_is_legal() {
        let game = Game::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let (mv, next) = random_move(&game, &mut rng).unwrap();
            assert_eq!(mv.source().x, 3);
            assert_eq!(next.board().read(mv.source()), Cell::Empty);
            assert_eq!(next.board().read(mv.target()), Cell::Black);
            assert_eq!(next.side_to_move(), Side::Black);
        }
    }

    #[test]
    fn test_random_move_none_when_blocked() {
        let game = Game::from_fen("0/0/0/0/0/0/0/2x7/1x8/o9 1").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_move(&game, &mut rng).is_none());
    }
}
