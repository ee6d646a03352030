//! Core game representations and rules

pub mod board;
pub mod cell;
pub mod convert;
pub mod coord;
pub mod display;
pub mod error;
pub mod game;
pub mod side;

pub use board::Board;
pub use cell::Cell;
pub use convert::{FromIndex, ToIndex};
pub use coord::{Coord, GRID_LEN};
pub use error::{BadMoveReason, MoveError, MoveResult};
pub use game::Game;
pub use side::{Player, Side, SideArray};
