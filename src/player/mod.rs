//! Player-related modules
//! Contains the kinematic state and physics step, input intent, and the camera.

pub mod camera;
pub mod character;
pub mod input;

// Re-export commonly used types
pub use camera::Camera;
pub use character::{Character, PhysicsParams, advance};
pub use input::{EditRequest, InputState, PointerButton};
