pub mod search;

pub use search::{MinimaxSelector, Move, minimax};
