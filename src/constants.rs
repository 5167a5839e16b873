// World constants
pub const DEFAULT_WORLD_WIDTH: usize = 80;
pub const DEFAULT_WORLD_HEIGHT: usize = 60;
pub const BIOME_SEGMENT_WIDTH: usize = 20;
pub const BASE_HEIGHT_RATIO: f64 = 0.5;
pub const TERRAIN_AMPLITUDE: f64 = 6.0;
pub const TERRAIN_SMOOTHNESS: f64 = 20.0;
pub const MOUNTAIN_LIFT: i32 = 4;
pub const DESERT_SINK: i32 = 2;
pub const SOIL_DEPTH: i32 = 2;

// Generation passes
pub const CAVE_CHANCE: f64 = 0.08;
pub const CAVE_MIN_ROW: usize = 10;
pub const MINESHAFT_COUNT: usize = 3;
pub const TREE_CHANCE: f64 = 0.12;
pub const TREE_MARGIN: usize = 2;

// Player constants
pub const PLAYER_SPAWN: (f64, f64) = (10.0, 10.0);
pub const PLAYER_SPEED: f64 = 0.1;
pub const PLAYER_GRAVITY: f64 = 0.01;
pub const PLAYER_JUMP_IMPULSE: f64 = -0.25;

// Presentation constants
pub const BLOCK_SIZE: f64 = 16.0;
pub const SKY_COLOR: [u8; 3] = [0x87, 0xce, 0xeb];
pub const VIEWPORT_COLUMNS: usize = 64;
pub const VIEWPORT_ROWS: usize = 24;

// Scheduler constants
pub const TICK_RATE: u32 = 60;
pub const MAX_FRAME_DELTA_SECS: f32 = 0.1;
pub const MAX_TICKS_PER_FRAME: u32 = 8;
