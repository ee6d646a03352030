use anyhow::{anyhow, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use super::convert::{FromIndex, ToIndex};
use super::coord::Coord;
use std::ops::{Index, Not};

/// Side/player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn all() -> [Side; 2] {
        [Side::White, Side::Black]
    }

    pub fn opponent(self) -> Self {
        !self
    }

    /// Row step toward this side's far edge. Black starts on row 0 and moves down.
    pub const fn forward(self) -> i32 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// The two diagonals this side captures along
    pub const fn forward_diagonals(self) -> [Coord; 2] {
        [
            Coord::new(self.forward(), -1),
            Coord::new(self.forward(), 1),
        ]
    }

    const fn slot(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
}

impl FromIndex for Side {
    fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid side index: {}", idx))
    }
}

impl ToIndex for Side {
    fn to_index(&self) -> Result<usize> {
        ToPrimitive::to_usize(self)
            .ok_or_else(|| anyhow!("Invalid side value"))
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// The participant playing one side. Fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    side: Side,
}

impl Player {
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

/// Array indexed by game side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideArray<T> {
    values: [T; 2],
}

impl<T> SideArray<T> {
    pub fn new(white: T, black: T) -> Self {
        Self {
            values: [white, black],
        }
    }
}

impl<T> Index<Side> for SideArray<T> {
    type Output = T;

    fn index(&self, index: Side) -> &Self::Output {
        &self.values[index.slot()]
    }
}
