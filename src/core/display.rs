use std::fmt;
use colored::Colorize;

use super::{
    board::Board,
    cell::Cell,
    coord::{Coord, GRID_LEN},
    game::Game,
    side::{Player, Side},
};

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Current Turn: {}", self.side_to_move())?;
        writeln!(f, "Pieces: {} | {}",
            self.board().count(Side::White).to_string().bright_white(),
            self.board().count(Side::Black).to_string().bright_red())?;
        writeln!(f)?;
        write!(f, "{}", self.board())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..GRID_LEN as i32 {
            write!(f, "{}|", x)?;
            for y in 0..GRID_LEN as i32 {
                if y > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.read(Coord::new(x, y)))?;
            }
            writeln!(f, "|")?;
        }

        write!(f, "  ")?;
        for y in 0..GRID_LEN {
            if y > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", (b'A' + y as u8) as char)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol().to_string();

        let colored_symbol = match self {
            Cell::White => symbol.bright_white().bold(),
            Cell::Black => symbol.bright_red().bold(),
            Cell::Empty | Cell::Wall => symbol.dimmed(),
        };

        write!(f, "{}", colored_symbol)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.side())
    }
}
