use serde::{Deserialize, Serialize};

use crate::core::block::BlockType;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Biome {
    #[default]
    Plains,
    Forest,
    Desert,
    Mountains,
}

impl Biome {
    /// Biomes repeat in fixed-width segments: plains, forest, desert, mountains.
    pub fn for_column(x: usize, segment_width: usize) -> Self {
        match (x / segment_width.max(1)) % 4 {
            0 => Biome::Plains,
            1 => Biome::Forest,
            2 => Biome::Desert,
            _ => Biome::Mountains,
        }
    }

    /// Row offset applied to the surface. Negative values raise the terrain.
    pub fn surface_offset(&self, mountain_lift: i32, desert_sink: i32) -> i32 {
        match self {
            Biome::Mountains => mountain_lift.saturating_neg(),
            Biome::Desert => desert_sink,
            Biome::Plains | Biome::Forest => 0,
        }
    }

    pub fn surface_block(&self) -> BlockType {
        match self {
            Biome::Desert => BlockType::Sand,
            _ => BlockType::Grass,
        }
    }

    pub fn soil_block(&self) -> BlockType {
        match self {
            Biome::Desert => BlockType::Sand,
            _ => BlockType::Dirt,
        }
    }
}
