use crate::core::block::BlockType;
use crate::player::camera::Camera;

/// Movement keys held during one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub const IDLE: InputState = InputState {
        left: false,
        right: false,
        jump: false,
    };
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Single-cell edit in grid coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EditRequest {
    pub x: i32,
    pub y: i32,
    pub block: BlockType,
}

impl EditRequest {
    pub fn new(x: i32, y: i32, block: BlockType) -> Self {
        Self { x, y, block }
    }

    pub fn break_block(x: i32, y: i32) -> Self {
        Self::new(x, y, BlockType::Air)
    }

    /// Primary click breaks, secondary click places grass.
    pub fn from_pointer(
        camera: &Camera,
        screen_x: f64,
        screen_y: f64,
        button: PointerButton,
    ) -> Self {
        let (x, y) = camera.screen_to_world(screen_x, screen_y);
        let block = match button {
            PointerButton::Primary => BlockType::Air,
            PointerButton::Secondary => BlockType::Grass,
        };
        Self { x, y, block }
    }
}
