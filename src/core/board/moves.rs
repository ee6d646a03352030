use crate::core::{
    cell::Cell,
    coord::Coord,
    error::{BadMoveReason, MoveError, MoveResult},
    side::Side,
};

use super::Board;

/// Distance along the diagonal, or `None` if the vector is not diagonal
fn diagonal_len(source: Coord, target: Coord) -> Option<i32> {
    let dt = (target - source).abs();
    (dt.x == dt.y).then_some(dt.x)
}

pub fn is_step(source: Coord, target: Coord) -> bool {
    diagonal_len(source, target) == Some(1)
}

pub fn is_jump(source: Coord, target: Coord) -> bool {
    diagonal_len(source, target) == Some(2)
}

impl Board {
    /// Check that `side` may move the piece at `source` to `target`, ignoring
    /// the mandatory-capture rule which only applies when the move is made.
    pub fn validate_move(&self, side: Side, source: Coord, target: Coord) -> MoveResult<()> {
        for pos in [source, target] {
            if !pos.in_bounds() {
                return Err(MoveError::BadPosition(pos));
            }
        }

        let reject = |reason| Err(MoveError::bad_move(source, target, reason));

        let Some(len) = diagonal_len(source, target) else {
            return reject(BadMoveReason::NotDiagonal);
        };
        if len > 2 {
            return reject(BadMoveReason::TooFar);
        }
        if len == 2 {
            let middle = source.midpoint(&target);
            match self.read(middle) {
                cell if cell.is_side(side) => {
                    return reject(BadMoveReason::JumpOverOwnPiece(middle))
                }
                cell if cell.is_side(!side) => {}
                _ => return reject(BadMoveReason::CaptureFailed(middle)),
            }
        }

        match self.read(source) {
            Cell::Empty => return reject(BadMoveReason::SourceEmpty),
            cell if !cell.is_side(side) => return reject(BadMoveReason::SourceNotOwned),
            _ => {}
        }
        if !self.read(target).is_empty() {
            return reject(BadMoveReason::TargetOccupied);
        }

        let moved_again = self.last_moved == Some(source);
        let is_combo = moved_again && self.jumped && len == 2;
        if !is_combo && (target.x - source.x).signum() != side.forward() {
            return reject(BadMoveReason::WrongDirection);
        }
        if moved_again && !is_combo {
            return reject(BadMoveReason::AlreadyMoved);
        }

        Ok(())
    }

    /// Validate and perform a single step or jump for `side`.
    /// The board is left untouched when an error is returned.
    pub fn apply_move(&mut self, side: Side, source: Coord, target: Coord) -> MoveResult<()> {
        self.validate_move(side, source, target)?;

        let jump = is_jump(source, target);
        if is_step(source, target) {
            if let Some(capturer) = self.capture_available(side, Some(source)) {
                return Err(MoveError::bad_move(
                    source,
                    target,
                    BadMoveReason::CaptureAvailable(capturer),
                ));
            }
        } else {
            self.write(source.midpoint(&target), Cell::Empty)?;
        }

        self.write(source, Cell::Empty)?;
        self.write(target, side.into())?;
        self.last_moved = Some(target);
        self.jumped = jump;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(i32, i32, Cell)]) -> Board {
        let mut board = Board::empty();
        for &(x, y, cell) in pieces {
            board.write(Coord::new(x, y), cell).unwrap();
        }
        board
    }

    fn reason(result: MoveResult<()>) -> BadMoveReason {
        result.unwrap_err().reason().expect("expected a bad move")
    }

    #[test]
    fn test_step_from_start() {
        let mut board = Board::new();
        let (source, target) = (Coord::new(6, 1), Coord::new(5, 2));

        board.apply_move(Side::White, source, target).unwrap();
        assert_eq!(board.read(source), Cell::Empty);
        assert_eq!(board.read(target), Cell::White);
        assert_eq!(board.last_moved(), Some(target));

        let err = board.apply_move(Side::White, source, target);
        assert_eq!(reason(err), BadMoveReason::SourceEmpty);
    }

    #[test]
    fn test_jump_clears_middle() {
        let mut board = board_with(&[(5, 8, Cell::Black), (6, 9, Cell::White)]);

        board.apply_move(Side::White, Coord::new(6, 9), Coord::new(4, 7)).unwrap();
        assert_eq!(board.read(Coord::new(5, 8)), Cell::Empty);
        assert_eq!(board.read(Coord::new(6, 9)), Cell::Empty);
        assert_eq!(board.read(Coord::new(4, 7)), Cell::White);
    }

    #[test]
    fn test_rejections() {
        let board = board_with(&[
            (6, 3, Cell::White),
            (5, 4, Cell::White),
            (5, 2, Cell::Black),
            (3, 3, Cell::Black),
        ]);
        let white = Coord::new(6, 3);

        assert_eq!(reason(board.validate_move(Side::White, white, Coord::new(5, 3))), BadMoveReason::NotDiagonal);
        assert_eq!(reason(board.validate_move(Side::White, white, Coord::new(3, 0))), BadMoveReason::TooFar);
        assert_eq!(
            reason(board.validate_move(Side::White, white, Coord::new(4, 5))),
            BadMoveReason::JumpOverOwnPiece(Coord::new(5, 4))
        );
        assert_eq!(
            reason(board.validate_move(Side::White, white, Coord::new(8, 5))),
            BadMoveReason::CaptureFailed(Coord::new(7, 4))
        );
        assert_eq!(reason(board.validate_move(Side::White, Coord::new(7, 0), Coord::new(6, 1))), BadMoveReason::SourceEmpty);
        assert_eq!(reason(board.validate_move(Side::White, Coord::new(5, 2), Coord::new(6, 1))), BadMoveReason::SourceNotOwned);
        assert_eq!(reason(board.validate_move(Side::Black, Coord::new(5, 2), Coord::new(6, 3))), BadMoveReason::TargetOccupied);
        assert_eq!(reason(board.validate_move(Side::White, white, Coord::new(7, 2))), BadMoveReason::WrongDirection);
        assert_eq!(reason(board.validate_move(Side::Black, Coord::new(3, 3), Coord::new(2, 4))), BadMoveReason::WrongDirection);

        assert_eq!(
            board.validate_move(Side::White, white, Coord::new(6, 11)),
            Err(MoveError::BadPosition(Coord::new(6, 11)))
        );
        assert_eq!(
            board.validate_move(Side::White, Coord::new(-1, 0), white),
            Err(MoveError::BadPosition(Coord::new(-1, 0)))
        );
    }

    #[test]
    fn test_failed_move_leaves_board_untouched() {
        let mut board = board_with(&[(6, 3, Cell::White), (5, 4, Cell::Black), (8, 1, Cell::White)]);
        let before = board.clone();

        assert!(board.apply_move(Side::White, Coord::new(6, 3), Coord::new(7, 4)).is_err());
        assert!(board.apply_move(Side::White, Coord::new(8, 1), Coord::new(7, 2)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_mandatory_capture() {
        let mut board = board_with(&[(6, 3, Cell::White), (5, 4, Cell::Black), (8, 1, Cell::White)]);

        assert_eq!(
            reason(board.apply_move(Side::White, Coord::new(8, 1), Coord::new(7, 2))),
            BadMoveReason::CaptureAvailable(Coord::new(6, 3))
        );

        board.apply_move(Side::White, Coord::new(6, 3), Coord::new(4, 5)).unwrap();
        assert_eq!(board.count(Side::Black), 0);
    }

    #[test]
    fn test_capturing_piece_may_still_step() {
        // only the other pieces are scanned for captures
        let mut board = board_with(&[(6, 3, Cell::White), (5, 4, Cell::Black)]);
        board.apply_move(Side::White, Coord::new(6, 3), Coord::new(5, 2)).unwrap();
        assert_eq!(board.read(Coord::new(5, 2)), Cell::White);
    }

    #[test]
    fn test_combo_ignores_direction() {
        let mut board = board_with(&[
            (6, 3, Cell::White),
            (5, 4, Cell::Black),
            (5, 6, Cell::Black),
        ]);

        board.apply_move(Side::White, Coord::new(6, 3), Coord::new(4, 5)).unwrap();
        // backward jump by the piece that just moved
        board.apply_move(Side::White, Coord::new(4, 5), Coord::new(6, 7)).unwrap();
        assert_eq!(board.count(Side::Black), 0);
        assert_eq!(board.read(Coord::new(6, 7)), Cell::White);
    }

    #[test]
    fn test_combo_exemption_is_per_piece() {
        let mut board = board_with(&[
            (6, 3, Cell::White),
            (5, 4, Cell::Black),
            (3, 0, Cell::White),
            (4, 1, Cell::Black),
        ]);

        board.apply_move(Side::White, Coord::new(6, 3), Coord::new(4, 5)).unwrap();
        assert_eq!(
            reason(board.apply_move(Side::White, Coord::new(3, 0), Coord::new(5, 2))),
            BadMoveReason::WrongDirection
        );

        board.clear_last_moved();
        assert_eq!(
            reason(board.apply_move(Side::White, Coord::new(4, 5), Coord::new(5, 6))),
            BadMoveReason::WrongDirection
        );
    }

    #[test]
    fn test_step_is_not_a_combo() {
        let mut board = board_with(&[(6, 3, Cell::White), (3, 0, Cell::Black)]);

        board.apply_move(Side::White, Coord::new(6, 3), Coord::new(5, 4)).unwrap();
        assert_eq!(
            reason(board.apply_move(Side::White, Coord::new(5, 4), Coord::new(6, 5))),
            BadMoveReason::WrongDirection
        );
        assert_eq!(
            reason(board.apply_move(Side::White, Coord::new(5, 4), Coord::new(4, 5))),
            BadMoveReason::AlreadyMoved
        );
    }

    #[test]
    fn test_move_kind() {
        assert!(is_step(Coord::new(6, 1), Coord::new(5, 2)));
        assert!(is_jump(Coord::new(6, 1), Coord::new(4, 3)));
        assert!(!is_jump(Coord::new(6, 1), Coord::new(4, 2)));
        assert!(!is_step(Coord::new(6, 1), Coord::new(6, 1)));
    }
}
