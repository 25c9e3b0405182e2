//! The game engine for memory, the card game where pairs of face-down cards
//! are turned over two at a time until every pair has been found.
pub use board::*;
pub use cards::*;
pub use cards_set::*;
pub use coords::*;
pub use game::*;
pub use scoring::*;
pub use selection::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod cards_set;
mod coords;
mod game;
mod scoring;
mod selection;
mod turn;
mod visualization;
