//! Board representation and rules

pub mod fen;
pub mod moves;

use lazy_static::lazy_static;

use super::{
    cell::Cell,
    coord::{Coord, GRID_LEN, GRID_SIZE},
    error::{MoveError, MoveResult},
    side::Side,
};

/// Rows filled with pieces at the start, counted from each side's home edge
pub const ROWS_PER_SIDE: usize = 4;

lazy_static! {
    static ref START_BOARD: Board = {
        let mut board = Board::empty();
        for coord in Coord::all().filter(Coord::is_dark) {
            let row = coord.x as usize;
            if row < ROWS_PER_SIDE {
                board.cells[coord.index()] = Cell::Black;
            } else if row >= GRID_LEN - ROWS_PER_SIDE {
                board.cells[coord.index()] = Cell::White;
            }
        }
        board
    };
}

/// A 10x10 draughts board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; GRID_SIZE],
    /// Square the last applied move landed on, cleared at the end of each turn
    last_moved: Option<Coord>,
    /// Whether that move was a capture, so the piece may keep jumping
    jumped: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the starting position
    pub fn new() -> Self {
        START_BOARD.clone()
    }

    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
            last_moved: None,
            jumped: false,
        }
    }

    /// Cell at `pos`, or `Wall` if `pos` is off the grid
    pub fn read(&self, pos: Coord) -> Cell {
        if pos.in_bounds() {
            self.cells[pos.index()]
        } else {
            Cell::Wall
        }
    }

    /// Overwrite the cell at `pos`. Walls cannot be stored.
    pub fn write(&mut self, pos: Coord, cell: Cell) -> MoveResult<()> {
        if !pos.in_bounds() || cell == Cell::Wall {
            return Err(MoveError::BadPosition(pos));
        }
        self.cells[pos.index()] = cell;
        Ok(())
    }

    pub fn last_moved(&self) -> Option<Coord> {
        self.last_moved
    }

    pub fn clear_last_moved(&mut self) {
        self.last_moved = None;
        self.jumped = false;
    }

    /// Squares holding `side`'s pieces in row-major order, read from the current state
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&pos| self.read(pos).is_side(side))
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    /// Whether the piece at `pos` can jump an adjacent opposing piece along one of
    /// its forward diagonals
    pub fn can_capture(&self, pos: Coord) -> bool {
        let Some(side) = self.read(pos).side() else {
            return false;
        };

        side.forward_diagonals().into_iter().any(|dir| {
            self.read(pos + dir).is_side(!side) && self.read(pos + dir * 2).is_empty()
        })
    }

    /// First piece of `side`, other than `except`, that has a capture available
    pub fn capture_available(&self, side: Side, except: Option<Coord>) -> Option<Coord> {
        self.pieces_of(side)
            .filter(|&pos| Some(pos) != except)
            .find(|&pos| self.can_capture(pos))
    }

    /// Whether the opponent could jump the piece at `pos` on their next move
    pub fn is_capturable(&self, pos: Coord) -> bool {
        let Some(side) = self.read(pos).side() else {
            return false;
        };
        let opponent = !side;

        opponent.forward_diagonals().into_iter().any(|dir| {
            self.read(pos - dir).is_side(opponent) && self.read(pos + dir).is_empty()
        })
    }
}
