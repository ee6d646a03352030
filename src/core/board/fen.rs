use anyhow::{bail, ensure, Context, Result};

use crate::core::{
    cell::Cell,
    coord::{Coord, GRID_LEN},
};

use super::Board;

impl Board {
    /// Convert board state to position text: rows top to bottom separated by `/`,
    /// `o`/`x` for pieces and digits for runs of empty squares (`0` is a full row)
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for x in 0..GRID_LEN as i32 {
            let mut empty_squares = 0;
            for y in 0..GRID_LEN as i32 {
                let cell = self.read(Coord::new(x, y));
                if cell.is_empty() {
                    empty_squares += 1;
                    continue;
                }
                if empty_squares > 0 {
                    fen.push_str(&empty_squares.to_string());
                    empty_squares = 0;
                }
                fen.push(cell.fen_char());
            }
            if empty_squares == GRID_LEN {
                fen.push('0');
            } else if empty_squares > 0 {
                fen.push_str(&empty_squares.to_string());
            }
            if x < (GRID_LEN - 1) as i32 {
                fen.push('/');
            }
        }
        fen
    }

    /// Create a board from position text
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut board = Board::empty();
        let rows = fen.trim().split('/').collect::<Vec<_>>();
        ensure!(rows.len() == GRID_LEN, "Expected {} rows, got {}", GRID_LEN, rows.len());

        for (x, row) in rows.iter().enumerate() {
            let mut y = 0;
            for c in row.chars() {
                if let Some(digit) = c.to_digit(10) {
                    y += if digit == 0 { GRID_LEN } else { digit as usize };
                } else {
                    let cell = Cell::from_fen_char(c)
                        .with_context(|| format!("Invalid FEN char: {}", c))?;
                    ensure!(y < GRID_LEN, "Row {} is too long", x);
                    board.write(Coord::new(x as i32, y as i32), cell)?;
                    y += 1;
                }
            }
            if y != GRID_LEN {
                bail!("Row {} has length {}, expected {}", x, y, GRID_LEN);
            }
        }
        Ok(board)
    }
}
