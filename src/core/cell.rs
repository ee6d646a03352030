use super::side::Side;

/// Content of one board square as seen by a reader.
///
/// `Wall` is only ever produced by reads outside the grid; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    White,
    Black,
    #[default]
    Empty,
    Wall,
}

/// Rendering and position-text symbols, in `Cell` declaration order
const SYMBOLS: [(Cell, char, char); 4] = [
    (Cell::White, 'O', 'o'),
    (Cell::Black, 'X', 'x'),
    (Cell::Empty, '-', '-'),
    (Cell::Wall, '#', '#'),
];

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::White => Some(Side::White),
            Cell::Black => Some(Side::Black),
            Cell::Empty | Cell::Wall => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_side(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// Character used when drawing the board
    pub fn symbol(self) -> char {
        SYMBOLS[self as usize].1
    }

    /// Character used in position text
    pub fn fen_char(self) -> char {
        SYMBOLS[self as usize].2
    }

    pub fn from_fen_char(c: char) -> Option<Cell> {
        SYMBOLS
            .iter()
            .find(|(cell, _, fen)| *fen == c && *cell != Cell::Empty && *cell != Cell::Wall)
            .map(|(cell, _, _)| *cell)
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Cell::White,
            Side::Black => Cell::Black,
        }
    }
}
