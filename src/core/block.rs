use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    #[default]
    Air,
    Grass,
    Dirt,
    Stone,
    Sand,
    Leaves,
    Log,
    Planks,
}

impl BlockType {
    pub const ALL: [BlockType; 8] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Sand,
        BlockType::Leaves,
        BlockType::Log,
        BlockType::Planks,
    ];

    /// Fallback colour used when no texture is available.
    pub fn color(&self) -> [u8; 3] {
        match self {
            BlockType::Air => SKY_COLOR,
            BlockType::Grass => [0x3c, 0xb0, 0x43],
            BlockType::Dirt => [0x8b, 0x45, 0x13],
            BlockType::Stone => [0x77, 0x77, 0x77],
            BlockType::Sand => [0xd9, 0xc2, 0x7f],
            BlockType::Leaves => [0x2e, 0x8b, 0x57],
            BlockType::Log => [0x5b, 0x3a, 0x1a],
            BlockType::Planks => [0xb5, 0x8a, 0x5a],
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            BlockType::Air => ' ',
            BlockType::Grass => '"',
            BlockType::Dirt => ':',
            BlockType::Stone => '#',
            BlockType::Sand => '.',
            BlockType::Leaves => '*',
            BlockType::Log => '|',
            BlockType::Planks => '=',
        }
    }

    /// Whether the block stops the player. Leaves are walk-through.
    pub fn is_solid(&self) -> bool {
        !matches!(self, BlockType::Air | BlockType::Leaves)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Air => "air",
            BlockType::Grass => "grass",
            BlockType::Dirt => "dirt",
            BlockType::Stone => "stone",
            BlockType::Sand => "sand",
            BlockType::Leaves => "leaves",
            BlockType::Log => "log",
            BlockType::Planks => "planks",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_air_and_leaves_are_passable() {
        for block in BlockType::ALL {
            let passable = matches!(block, BlockType::Air | BlockType::Leaves);
            assert_eq!(block.is_solid(), !passable, "{block}");
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut glyphs: Vec<char> = BlockType::ALL.iter().map(|b| b.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), BlockType::ALL.len());
    }
}
