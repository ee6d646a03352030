//! Game state and rules

use anyhow::{Context, Result};

use super::{
    board::Board,
    convert::{parse_index, ToIndex},
    coord::Coord,
    error::MoveResult,
    side::{Player, Side, SideArray},
};

/// Weight of a piece the opponent can capture on their next move
pub const CAPTURABLE_WEIGHT: f32 = 0.2;

/// Represents the state of a draughts game
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    players: SideArray<Player>,
    side_to_move: Side,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game from the starting position, White to move
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::White)
    }

    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            players: SideArray::new(Player::new(Side::White), Player::new(Side::Black)),
            side_to_move,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.side_to_move)
    }

    /// Move a piece for the side to move. The turn does not end.
    pub fn apply_move(&mut self, source: Coord, target: Coord) -> MoveResult<()> {
        self.board.apply_move(self.side_to_move, source, target)
    }

    /// Apply a chain of hops `path[0] -> path[1] -> ...` for the side to move.
    /// Either every hop succeeds or the game is left unchanged.
    pub fn apply_moves(&mut self, path: &[Coord]) -> MoveResult<()> {
        let mut board = self.board.clone();
        for hop in path.windows(2) {
            board.apply_move(self.side_to_move, hop[0], hop[1])?;
        }
        self.board = board;
        Ok(())
    }

    /// Hand the move to the other side and forget any combo in progress
    pub fn end_turn(&mut self) {
        self.side_to_move = !self.side_to_move;
        self.board.clear_last_moved();
    }

    /// The game is over once either side has no pieces left
    pub fn is_terminal(&self) -> bool {
        Side::all()
            .into_iter()
            .any(|side| self.board.pieces_of(side).next().is_none())
    }

    /// The side still holding pieces once the game is over
    pub fn winner(&self) -> Option<Side> {
        if !self.is_terminal() {
            return None;
        }
        Side::all()
            .into_iter()
            .find(|&side| self.board.pieces_of(side).next().is_some())
    }

    /// Material balance from `side`'s point of view, with pieces that can be
    /// captured right away counted at a reduced weight
    pub fn evaluate(&self, side: Side) -> f32 {
        Coord::all()
            .filter_map(|pos| {
                let owner = self.board.read(pos).side()?;
                let weight = if self.board.is_capturable(pos) {
                    CAPTURABLE_WEIGHT
                } else {
                    1.0
                };
                Some(if owner == side { weight } else { -weight })
            })
            .sum()
    }

    /// Position text: board followed by the index of the side to move
    pub fn to_fen(&self) -> Result<String> {
        Ok(format!("{} {}", self.board.to_fen(), self.side_to_move.to_index()?))
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut parts = fen.split_whitespace();

        let board = Board::from_fen(parts.next().context("Missing board")?)?;
        let side_to_move = parse_index(parts.next().context("Missing side to move")?)
            .context("Invalid side to move")?;

        Ok(Self::from_board(board, side_to_move))
    }
}
