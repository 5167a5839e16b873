use super::Structure;
use crate::core::block::BlockType;

pub const MIN_LENGTH: i32 = 15;
pub const LENGTH_VARIANCE: i32 = 25;
pub const SUPPORT_SPACING: i32 = 4;
pub const FLOOR_DEPTH: i32 = 2;

/// Horizontal tunnel with a plank floor and log supports.
///
/// The origin is the first column of the tunnel on its centre row.
#[derive(Debug, Clone)]
pub struct Mineshaft {
    pub structure: Structure,
}

impl Mineshaft {
    pub fn new(length: i32) -> Self {
        let mut structure = Structure::new("Mineshaft");

        for dx in 0..length {
            // Three rows of open tunnel
            for dy in -1..=1 {
                structure = structure.with_block(dx, dy, BlockType::Air);
            }

            structure = structure.with_block(dx, FLOOR_DEPTH, BlockType::Planks);

            if dx % SUPPORT_SPACING == 0 {
                structure = structure
                    .with_block(dx, 1, BlockType::Log)
                    .with_block(dx, -1, BlockType::Log);
            }
        }

        Self { structure }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Grid;

    #[test]
    fn test_mineshaft_layout() {
        let mut grid = Grid::filled(12, 10, BlockType::Stone);
        Mineshaft::new(9).structure.place(&mut grid, 1, 4);

        for x in 1..10 {
            assert_eq!(grid.get(x, 6), Some(BlockType::Planks), "floor at {x}");
            assert_eq!(grid.get(x, 4), Some(BlockType::Air), "tunnel at {x}");
            let support = (x - 1) % SUPPORT_SPACING == 0;
            let expected = if support {
                BlockType::Log
            } else {
                BlockType::Air
            };
            assert_eq!(grid.get(x, 3), Some(expected));
            assert_eq!(grid.get(x, 5), Some(expected));
        }
        assert_eq!(grid.get(0, 4), Some(BlockType::Stone));
        assert_eq!(grid.get(10, 4), Some(BlockType::Stone));
        assert_eq!(grid.get(4, 2), Some(BlockType::Stone));
        assert_eq!(grid.get(4, 7), Some(BlockType::Stone));
    }

    #[test]
    fn test_mineshaft_clips_at_grid_edge() {
        let mut grid = Grid::filled(4, 3, BlockType::Stone);
        let written = Mineshaft::new(10).structure.place(&mut grid, 2, 1);
        // columns 2..4 in bounds, rows 0..=2 in bounds, floor at row 3 clipped
        assert!(written > 0);
        assert_eq!(grid.get(3, 1), Some(BlockType::Air));
        assert_eq!(grid.get(2, 0), Some(BlockType::Log));
    }
}
