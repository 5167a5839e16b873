pub mod mineshaft;
pub mod structure;
pub mod tree;

pub use mineshaft::Mineshaft;
pub use structure::{Placement, Structure};
pub use tree::Tree;
