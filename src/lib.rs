//! Draughts - engine for 10x10 checkers

pub mod ai;
pub mod core;
pub mod engine;
pub mod protocol;
pub mod utils;

// Re-export commonly used items
pub use core::game::Game;
pub use engine::Engine;
