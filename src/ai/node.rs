//! Search nodes and the lazy move-tree generator
//!
//! A node owns its own copy of the game. Expanding it hands the move to the
//! other side and yields one child per legal move of that side. A capture is
//! followed, as siblings, by every further jump the same piece can chain from
//! its landing square, so a turn made of several jumps appears as a single
//! child whose path lists every hop.

use std::fmt;

use crate::core::{
    board::moves::is_jump,
    coord::{Coord, MOVE_VECTORS},
    game::Game,
    side::Side,
};

/// A full move: the squares a piece visits during one turn, at least two
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    path: Vec<Coord>,
}

impl Move {
    /// `None` unless the path has a source and at least one target
    pub fn new(path: Vec<Coord>) -> Option<Self> {
        (path.len() >= 2).then_some(Self { path })
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn source(&self) -> Coord {
        self.path[0]
    }

    pub fn target(&self) -> Coord {
        self.path[self.path.len() - 1]
    }

    pub fn is_capture(&self) -> bool {
        self.path.windows(2).any(|hop| is_jump(hop[0], hop[1]))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, square) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", square)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SearchNode {
    game: Game,
    mv: Option<Move>,
    /// Side whose evaluation this tree maximizes
    perspective: Side,
}

impl SearchNode {
    pub fn root(game: Game, perspective: Side) -> Self {
        Self {
            game,
            mv: None,
            perspective,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    /// The move that produced this node, `None` for the root
    pub fn mv(&self) -> Option<&Move> {
        self.mv.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.game.is_terminal()
    }

    pub fn value(&self) -> f32 {
        self.game.evaluate(self.perspective)
    }

    /// Ends the turn on this node's game and lazily yields the replies of the
    /// side that now has the move
    pub fn children(&mut self) -> Children {
        self.game.end_turn();
        let side = self.game.side_to_move();
        let pieces = self.game.board().pieces_of(side).collect::<Vec<_>>();

        Children {
            base: self.game.clone(),
            perspective: self.perspective,
            pieces: pieces.into_iter(),
            stack: Vec::new(),
        }
    }
}

/// One piece being expanded: the game before its next hop and the hops so far
struct Frame {
    game: Game,
    path: Vec<Coord>,
    /// Only jumps may follow once the piece has captured this turn
    combo: bool,
    next_dir: usize,
}

impl Frame {
    fn piece(&self) -> Coord {
        self.path[self.path.len() - 1]
    }
}

/// Iterator over the children of a node. Generation order is pieces in
/// row-major order, directions in `MOVE_VECTORS` order, depth first through
/// combos.
pub struct Children {
    base: Game,
    perspective: Side,
    pieces: std::vec::IntoIter<Coord>,
    stack: Vec<Frame>,
}

impl Iterator for Children {
    type Item = SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                let piece = self.pieces.next()?;
                self.stack.push(Frame {
                    game: self.base.clone(),
                    path: vec![piece],
                    combo: false,
                    next_dir: 0,
                });
                continue;
            };

            let Some(&dir) = MOVE_VECTORS.get(frame.next_dir) else {
                self.stack.pop();
                continue;
            };
            frame.next_dir += 1;

            let source = frame.piece();
            let target = source + dir;
            let jump = is_jump(source, target);
            if frame.combo && !jump {
                continue;
            }

            let mut game = frame.game.clone();
            if game.apply_move(source, target).is_err() {
                continue;
            }

            let mut path = frame.path.clone();
            path.push(target);

            let child = SearchNode {
                game: game.clone(),
                mv: Move::new(path.clone()),
                perspective: self.perspective,
            };

            if jump {
                self.stack.push(Frame {
                    game,
                    path,
                    combo: true,
                    next_dir: 0,
                });
            }

            return Some(child);
        }
    }
}
