/// Configuration options for the engine
use anyhow::{bail, ensure, Context, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    Minimax,
    Random,
}

impl FromStr for PlayerType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(PlayerType::Minimax),
            "random" => Ok(PlayerType::Random),
            _ => bail!("Unknown player type: {}", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Whether protocol errors abort the engine
    pub strict_mode: bool,
    /// How the engine picks its moves
    pub player: PlayerType,
    /// Search depth used when `go` does not give one
    pub depth: u32,
}

impl EngineOptions {
    pub const DEFAULT_DEPTH: u32 = 3;

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "strictmode" => self.strict_mode = value.parse().context("invalid strictmode")?,
            "player" => self.player = value.parse()?,
            "depth" => {
                let depth: u32 = value.parse().context("invalid depth")?;
                ensure!(depth > 0, "depth must be positive");
                self.depth = depth;
            }
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict_mode: false,
            player: PlayerType::Minimax,
            depth: Self::DEFAULT_DEPTH,
        }
    }
}
