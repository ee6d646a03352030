use crate::ai::{random_move, search, SearchResult};
use crate::core::{Coord, Game, Side};
use crate::utils::make_rng;

use super::options::{EngineOptions, PlayerType};
use super::search::SearchOptions;

use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::debug;

/// Engine manages the game state and plays moves on request
pub struct Engine {
    pub game: Game,
    pub options: EngineOptions,
    rng: StdRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new engine instance with default options
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            options: EngineOptions::default(),
            rng: make_rng(),
        }
    }

    /// Update the current game state
    pub fn set_game(&mut self, game: Game) {
        self.game = game;
    }

    pub fn reset_game(&mut self) {
        self.game = Game::new();
    }

    /// Set engine options
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)
    }

    /// Apply a move given as the squares visited, for the side to move.
    /// The turn stays open so further hops can be entered.
    pub fn do_move(&mut self, path: &[Coord]) -> Result<()> {
        ensure!(path.len() >= 2, "a move needs a source and at least one target");
        self.game.apply_moves(path)?;
        debug!(side = %self.game.side_to_move(), path = ?path, "move applied");
        Ok(())
    }

    pub fn end_turn(&mut self) {
        self.game.end_turn();
    }

    pub fn winner(&self) -> Option<Side> {
        self.game.winner()
    }

    /// Static evaluation for the side to move
    pub fn eval(&self) -> f32 {
        self.game.evaluate(self.game.side_to_move())
    }

    /// Play a move for the side opposite to the side to move and end the turn.
    /// Returns `None` when that side has no legal move.
    pub fn go(&mut self, search_options: &SearchOptions) -> Option<SearchResult> {
        let (result, next) = match self.options.player {
            PlayerType::Minimax => {
                search(&self.game, &search_options.limits(self.options.depth))?
            }
            PlayerType::Random => {
                let start = Instant::now();
                let side = !self.game.side_to_move();
                let (best_move, next) = random_move(&self.game, &mut self.rng)?;
                let result = SearchResult {
                    best_move,
                    score: next.evaluate(side),
                    depth: 0,
                    nodes: 1,
                    elapsed: start.elapsed(),
                };
                (result, next)
            }
        };

        self.game = next;
        self.game.end_turn();
        Some(result)
    }
}
