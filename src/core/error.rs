//! Error types for board and game operations
//!
//! Every rule violation is reported before the board is touched, so a failed
//! operation never leaves a partial move behind.

use thiserror::Error;

use super::coord::Coord;

/// Why a move was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadMoveReason {
    #[error("move is not diagonal")]
    NotDiagonal,

    #[error("jumping too far")]
    TooFar,

    #[error("attack failed - no opposing piece at {0}")]
    CaptureFailed(Coord),

    #[error("source empty")]
    SourceEmpty,

    #[error("source holds an opposing piece")]
    SourceNotOwned,

    #[error("target not empty")]
    TargetOccupied,

    #[error("wrong direction")]
    WrongDirection,

    #[error("jumping own piece at {0}")]
    JumpOverOwnPiece(Coord),

    #[error("capture available for piece at {0}")]
    CaptureAvailable(Coord),

    #[error("piece already moved this turn")]
    AlreadyMoved,
}

/// Errors that can occur when reading, writing or moving on the board
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinate outside the grid
    #[error("Bad position {0}")]
    BadPosition(Coord),

    /// Legality violation for a move between two squares
    #[error("Bad move from {from} to {to}: {reason}")]
    BadMove {
        from: Coord,
        to: Coord,
        reason: BadMoveReason,
    },
}

impl MoveError {
    pub fn bad_move(from: Coord, to: Coord, reason: BadMoveReason) -> Self {
        MoveError::BadMove { from, to, reason }
    }

    /// The reason tag, if this is a legality violation
    pub fn reason(&self) -> Option<BadMoveReason> {
        match self {
            MoveError::BadPosition(_) => None,
            MoveError::BadMove { reason, .. } => Some(*reason),
        }
    }
}

/// Result type alias for board and game operations
pub type MoveResult<T> = Result<T, MoveError>;
