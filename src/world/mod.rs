//! World generation modules
//! Contains the layered generator and the structures it stamps.

pub mod generator;
pub mod structures;

// Re-export commonly used types
pub use generator::{GeneratorConfig, WorldGenerator, generate};
