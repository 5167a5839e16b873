//! Layered world generation
//!
//! Builds the whole grid in four passes: terrain, caves, mineshafts, trees.
//! Every random decision is drawn from the caller's RNG, so a seeded RNG
//! reproduces the same world.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::*;
use crate::core::biome::Biome;
use crate::core::block::BlockType;
use crate::core::grid::Grid;
use crate::world::structures::{Mineshaft, Tree, mineshaft, tree};

/// Tunable generation parameters. Each pass can be switched off on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub biome_segment_width: usize,
    pub base_height_ratio: f64,
    pub amplitude: f64,
    pub smoothness: f64,
    pub mountain_lift: i32,
    pub desert_sink: i32,
    pub soil_depth: i32,
    pub caves: bool,
    pub cave_chance: f64,
    pub cave_min_row: usize,
    pub mineshafts: bool,
    pub mineshaft_count: usize,
    pub trees: bool,
    pub tree_chance: f64,
    pub tree_margin: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            biome_segment_width: BIOME_SEGMENT_WIDTH,
            base_height_ratio: BASE_HEIGHT_RATIO,
            amplitude: TERRAIN_AMPLITUDE,
            smoothness: TERRAIN_SMOOTHNESS,
            mountain_lift: MOUNTAIN_LIFT,
            desert_sink: DESERT_SINK,
            soil_depth: SOIL_DEPTH,
            caves: true,
            cave_chance: CAVE_CHANCE,
            cave_min_row: CAVE_MIN_ROW,
            mineshafts: true,
            mineshaft_count: MINESHAFT_COUNT,
            trees: true,
            tree_chance: TREE_CHANCE,
            tree_margin: TREE_MARGIN,
        }
    }
}

impl GeneratorConfig {
    /// Terrain only, no caves, mineshafts or trees.
    pub fn terrain_only() -> Self {
        Self {
            caves: false,
            mineshafts: false,
            trees: false,
            ..Self::default()
        }
    }
}

/// Generates a world with the default configuration.
pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Grid {
    WorldGenerator::default().generate(width, height, rng)
}

#[derive(Debug, Clone, Default)]
pub struct WorldGenerator {
    pub config: GeneratorConfig,
}

impl WorldGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        WorldGenerator { config }
    }

    pub fn generate<R: Rng + ?Sized>(&self, width: usize, height: usize, rng: &mut R) -> Grid {
        let mut grid = Grid::new(width, height);

        self.terrain_pass(&mut grid);
        debug!(width, height, "terrain pass done");

        if self.config.caves {
            let carved = self.cave_pass(&mut grid, rng);
            debug!(carved, "cave pass done");
        }

        if self.config.mineshafts {
            let shafts = self.mineshaft_pass(&mut grid, rng);
            debug!(shafts, "mineshaft pass done");
        }

        if self.config.trees {
            let trees = self.tree_pass(&mut grid, rng);
            debug!(trees, "tree pass done");
        }

        info!(
            width,
            height,
            air = grid.count(BlockType::Air),
            stone = grid.count(BlockType::Stone),
            "world generated"
        );
        grid
    }

    /// Surface row of column `x` before any biome bias.
    pub fn base_surface(&self, x: usize, height: usize) -> i32 {
        let base = (height as f64 * self.config.base_height_ratio).floor();
        let fx = x as f64;
        let smoothness = self.config.smoothness;
        let amplitude = self.config.amplitude;
        let wave = (fx / smoothness).sin() * amplitude
            + (fx / (smoothness * 0.5)).sin() * (amplitude * 0.5);
        (base + wave.floor()) as i32
    }

    /// Surface row of column `x` including the biome bias.
    pub fn surface_height(&self, x: usize, height: usize) -> i32 {
        let biome = Biome::for_column(x, self.config.biome_segment_width);
        let offset = biome.surface_offset(self.config.mountain_lift, self.config.desert_sink);
        self.base_surface(x, height).saturating_add(offset)
    }

    pub fn terrain_pass(&self, grid: &mut Grid) {
        let height = grid.height();
        for x in 0..grid.width() {
            let biome = Biome::for_column(x, self.config.biome_segment_width);
            let surface = self.surface_height(x, height);

            for y in 0..height as i32 {
                let block = if y < surface {
                    BlockType::Air
                } else if y == surface {
                    biome.surface_block()
                } else if y <= surface.saturating_add(self.config.soil_depth) {
                    biome.soil_block()
                } else {
                    BlockType::Stone
                };
                grid.set(x as i32, y, block);
            }
        }
    }

    /// Carves 3x3 blobs out of stone. Returns the number of blobs carved.
    pub fn cave_pass<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> usize {
        let mut carved = 0;
        for x in 0..grid.width() as i32 {
            for y in self.config.cave_min_row as i32..grid.height() as i32 {
                // One draw per candidate cell keeps the stream independent of the terrain
                let hit = roll(rng, self.config.cave_chance);
                if !hit || grid.get(x, y) != Some(BlockType::Stone) {
                    continue;
                }
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        if grid.get(x + dx, y + dy) == Some(BlockType::Stone) {
                            grid.set(x + dx, y + dy, BlockType::Air);
                        }
                    }
                }
                carved += 1;
            }
        }
        carved
    }

    /// Places the horizontal tunnels. Returns how many were stamped.
    pub fn mineshaft_pass<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> usize {
        let width = grid.width() as i32;
        let height = grid.height() as i32;
        let mut placed = 0;

        for _ in 0..self.config.mineshaft_count {
            let start_x = random_below(rng, width - 20) + 10;
            let start_y = random_below(rng, height - 20) + 15;
            let length = random_below(rng, mineshaft::LENGTH_VARIANCE) + mineshaft::MIN_LENGTH;

            // The last column is never tunnelled
            let length = length.min(width - 1 - start_x);
            if length <= 0 {
                continue;
            }

            Mineshaft::new(length).structure.place(grid, start_x, start_y);
            placed += 1;
        }
        placed
    }

    /// Grows trees on grass columns. Returns the number of trees planted.
    pub fn tree_pass<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> usize {
        let margin = self.config.tree_margin;
        let mut planted = 0;

        for x in margin..grid.width().saturating_sub(margin) {
            let Some(surface) = grid.find_surface(x, &[BlockType::Grass, BlockType::Sand]) else {
                continue;
            };
            if grid.column(x)[surface] != BlockType::Grass {
                continue;
            }
            if roll(rng, self.config.tree_chance) {
                let trunk = rng.gen_range(tree::MIN_TRUNK_HEIGHT..=tree::MAX_TRUNK_HEIGHT);
                Tree::new(trunk)
                    .structure
                    .place(grid, x as i32, surface as i32 - 1);
                planted += 1;
            }
        }
        planted
    }
}

/// `floor(random * n)`, collapsing to 0 for an empty range.
fn random_below<R: Rng + ?Sized>(rng: &mut R, n: i32) -> i32 {
    if n <= 0 { 0 } else { rng.gen_range(0..n) }
}

/// `random < chance`. Unlike `gen_bool` it accepts any chance without panicking.
fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> bool {
    rng.gen_range(0.0..1.0) < chance
}
