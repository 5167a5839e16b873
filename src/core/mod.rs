//! Core data structures for the game
//! Contains block kinds, biome segments and the tile grid.

pub mod biome;
pub mod block;
pub mod grid;

// Re-export commonly used types
pub use biome::Biome;
pub use block::BlockType;
pub use grid::Grid;
