use crate::core::block::BlockType;

/// Fixed-size tile grid, indexed `[x][y]` with `y` growing downward.
///
/// Cells outside `0..width` x `0..height` are never stored and count as solid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    blocks: Vec<BlockType>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, BlockType::Air)
    }

    pub fn filled(width: usize, height: usize, block: BlockType) -> Self {
        Grid {
            width,
            height,
            blocks: vec![block; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(x as usize * self.height + y as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<BlockType> {
        self.index(x, y).map(|i| self.blocks[i])
    }

    /// Writes one cell. Out-of-bounds writes are ignored and return `false`.
    pub fn set(&mut self, x: i32, y: i32, block: BlockType) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.blocks[i] = block;
                true
            }
            None => false,
        }
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_none_or(|block| block.is_solid())
    }

    /// Cells of column `x` from top to bottom.
    pub fn column(&self, x: usize) -> &[BlockType] {
        if x >= self.width {
            return &[];
        }
        &self.blocks[x * self.height..(x + 1) * self.height]
    }

    /// Topmost row of column `x` holding one of `kinds`.
    pub fn find_surface(&self, x: usize, kinds: &[BlockType]) -> Option<usize> {
        self.column(x).iter().position(|block| kinds.contains(block))
    }

    pub fn count(&self, block: BlockType) -> usize {
        self.blocks.iter().filter(|&&b| b == block).count()
    }
}
