//! Conversions between enums and the small integers used in position text

use anyhow::{Context, Result};

/// Types that can be rebuilt from their position-text index
pub trait FromIndex: Sized {
    fn from_index(idx: usize) -> Result<Self>;
}

/// Types written to position text as an index
pub trait ToIndex {
    fn to_index(&self) -> Result<usize>;
}

/// Parse a decimal index token and convert it
pub fn parse_index<T: FromIndex>(token: &str) -> Result<T> {
    let idx = token
        .parse::<usize>()
        .with_context(|| format!("Invalid index: {}", token))?;
    T::from_index(idx)
}
