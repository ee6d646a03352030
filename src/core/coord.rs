use std::{
    fmt::Display,
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};
use anyhow::{bail, Context};

pub const GRID_LEN: usize = 10;
pub const GRID_SIZE: usize = GRID_LEN * GRID_LEN;

/// A square on the board, or a move vector between two squares.
/// `x` is the row, `y` is the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn in_bounds(&self) -> bool {
        self.x >= 0
            && self.x < GRID_LEN as i32
            && self.y >= 0
            && self.y < GRID_LEN as i32
    }

    /// Row-major index into the grid. Only meaningful for in-bounds coords.
    pub fn index(&self) -> usize {
        (self.x as usize) * GRID_LEN + (self.y as usize)
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            x: (index / GRID_LEN) as i32,
            y: (index % GRID_LEN) as i32,
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Midpoint of the segment between two squares, truncated toward zero.
    pub fn midpoint(&self, other: &Coord) -> Self {
        (*self + *other) / 2
    }

    pub fn is_dark(&self) -> bool {
        (self.x + self.y) % 2 == 1
    }

    /// All squares of the grid in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE).map(Coord::from_index)
    }
}

/// Unit diagonals followed by their doubled (jump) forms
pub const MOVE_VECTORS: [Coord; 8] = [
    Coord::new(1, 1),
    Coord::new(-1, 1),
    Coord::new(1, -1),
    Coord::new(-1, -1),
    Coord::new(2, 2),
    Coord::new(-2, 2),
    Coord::new(2, -2),
    Coord::new(-2, -2),
];

impl FromStr for Coord {
    type Err = anyhow::Error;

    /// Accepts `6B` (row digit, column letter) or `6,1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((x, y)) = s.split_once(',') {
            return Ok(Coord {
                x: x.trim().parse().with_context(|| format!("Invalid row in {}", s))?,
                y: y.trim().parse().with_context(|| format!("Invalid column in {}", s))?,
            });
        }

        let mut chars = s.chars();
        let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Invalid square: {}", s);
        };

        let x = row.to_digit(10)
            .with_context(|| format!("Invalid row in {}", s))? as i32;
        let col = col.to_ascii_uppercase();
        if !col.is_ascii_uppercase() || (col as u8 - b'A') as usize >= GRID_LEN {
            bail!("Invalid column in {}", s);
        }

        Ok(Coord { x, y: (col as u8 - b'A') as i32 })
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.in_bounds() {
            write!(f, "{}{}", self.x, (self.y as u8 + b'A') as char)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Self::Output {
        Coord {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Self::Output {
        Coord {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Self::Output {
        Coord {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    fn mul(self, k: i32) -> Self::Output {
        Coord {
            x: self.x * k,
            y: self.y * k,
        }
    }
}

impl Mul for Coord {
    type Output = Coord;

    fn mul(self, other: Coord) -> Self::Output {
        Coord {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
}

impl Div<i32> for Coord {
    type Output = Coord;

    fn div(self, k: i32) -> Self::Output {
        Coord {
            x: self.x / k,
            y: self.y / k,
        }
    }
}

impl Div for Coord {
    type Output = Coord;

    fn div(self, other: Coord) -> Self::Output {
        Coord {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_arithmetic() {
        let a = Coord::new(6, 1);
        let b = Coord::new(4, 3);

        assert_eq!(b - a, Coord::new(-2, 2));
        assert_eq!((b - a).abs(), Coord::new(2, 2));
        assert_eq!(-a, Coord::new(-6, -1));
        assert_eq!(a * 2, Coord::new(12, 2));
        assert_eq!(a * Coord::new(-1, 3), Coord::new(-6, 3));
        assert_eq!(Coord::new(-3, 5) / 2, Coord::new(-1, 2));
        assert_eq!(Coord::new(9, 8) / Coord::new(3, 4), Coord::new(3, 2));
        assert_eq!(a.midpoint(&b), Coord::new(5, 2));
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(9, 9).in_bounds());
        assert!(!Coord::new(-1, 2).in_bounds());
        assert!(!Coord::new(10, 2).in_bounds());
        assert!(!Coord::new(3, 10).in_bounds());
    }

    #[test]
    fn test_coord_index_roundtrip() {
        for coord in Coord::all() {
            assert_eq!(Coord::from_index(coord.index()), coord);
        }
        assert_eq!(Coord::all().count(), GRID_SIZE);
    }

    #[test]
    fn test_coord_parse() {
        assert_eq!("6B".parse::<Coord>().unwrap(), Coord::new(6, 1));
        assert_eq!("5c".parse::<Coord>().unwrap(), Coord::new(5, 2));
        assert_eq!("4,7".parse::<Coord>().unwrap(), Coord::new(4, 7));
        assert!("6K".parse::<Coord>().is_err());
        assert!("B6".parse::<Coord>().is_err());
        assert!("61B".parse::<Coord>().is_err());
        assert!("".parse::<Coord>().is_err());
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(6, 1).to_string(), "6B");
        assert_eq!(Coord::new(0, 9).to_string(), "0J");
        assert_eq!(Coord::new(-1, 2).to_string(), "(-1,2)");
    }
}
