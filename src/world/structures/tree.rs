use super::{Placement, Structure};
use crate::core::block::BlockType;

pub const MIN_TRUNK_HEIGHT: i32 = 3;
pub const MAX_TRUNK_HEIGHT: i32 = 5;
pub const LEAF_RADIUS: i32 = 2;

/// A log trunk growing up from its root, topped by a diamond of leaves.
#[derive(Debug, Clone)]
pub struct Tree {
    pub structure: Structure,
}

impl Tree {
    pub fn new(trunk_height: i32) -> Self {
        let mut structure = Structure::new("Tree");

        // Trunk first so the canopy never covers it
        for i in 0..trunk_height {
            structure.push(0, -i, BlockType::Log, Placement::Replace);
        }

        let top = -(trunk_height - 1);
        for dx in -LEAF_RADIUS..=LEAF_RADIUS {
            for dy in -LEAF_RADIUS..=LEAF_RADIUS {
                if dx.abs() + dy.abs() <= LEAF_RADIUS {
                    structure.push(dx, top + dy, BlockType::Leaves, Placement::IntoAir);
                }
            }
        }

        Self { structure }
    }
}
