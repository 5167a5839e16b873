use crate::core::block::BlockType;
use crate::core::grid::Grid;

/// How a structure block treats the cell it lands on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Placement {
    /// Always write, last write wins.
    Replace,
    /// Write only into air.
    IntoAir,
}

#[derive(Debug, Clone)]
pub struct Structure {
    pub name: String,
    pub blocks: Vec<(i32, i32, BlockType, Placement)>, // offsets from the origin
}

impl Structure {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn with_block(mut self, dx: i32, dy: i32, block: BlockType) -> Self {
        self.blocks.push((dx, dy, block, Placement::Replace));
        self
    }

    pub fn push(&mut self, dx: i32, dy: i32, block: BlockType, placement: Placement) {
        self.blocks.push((dx, dy, block, placement));
    }

    /// Stamps the structure in list order. Returns the number of cells written.
    pub fn place(&self, grid: &mut Grid, origin_x: i32, origin_y: i32) -> usize {
        let mut written = 0;
        for &(dx, dy, block, placement) in &self.blocks {
            let (x, y) = (origin_x + dx, origin_y + dy);
            let Some(current) = grid.get(x, y) else {
                continue;
            };
            if placement == Placement::IntoAir && current != BlockType::Air {
                continue;
            }
            grid.set(x, y, block);
            written += 1;
        }
        written
    }
}
