// Core module with fundamental types
pub mod core;

// Player module with physics, input and camera
pub mod player;

// Render module with the renderer seam and the terminal renderer
pub mod render;

// World module with generation and structures
pub mod world;

// Game session, fixed-step loop and input sources
pub mod app;

// Other modules
pub mod constants;
pub mod utils;

// Re-exports
pub use app::{Autopilot, FixedStep, Game, InputSource};
pub use constants::*;
pub use core::{Biome, BlockType, Grid};
pub use player::{Camera, Character, EditRequest, InputState, PhysicsParams, PointerButton};
pub use render::{AsciiRenderer, NullRenderer, Renderer};
pub use utils::{GameSettings, SettingsError, load_settings};
pub use world::{GeneratorConfig, WorldGenerator, generate};
