mod engine;
mod options;
mod search;

pub use engine::Engine;
pub use options::{EngineOptions, PlayerType};
pub use search::SearchOptions;
