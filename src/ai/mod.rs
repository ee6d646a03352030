//! Move generation and adversarial search
pub mod node;
pub mod random;
pub mod search;

// Re-export key types
pub use node::{Move, SearchNode};
pub use random::random_move;
pub use search::{alphabeta, choose_move, search, SearchLimits, SearchResult};
