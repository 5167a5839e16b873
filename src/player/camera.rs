use crate::constants::BLOCK_SIZE;
use crate::player::character::Character;

/// 2D camera centred on a world position.
///
/// Screen coordinates are in pixels (or characters for text output) with the
/// origin at the top-left of the viewport.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Camera {
    pub center: (f64, f64),
    pub viewport: (f64, f64),
    pub block_size: f64,
}

impl Camera {
    pub fn new(center: (f64, f64), viewport: (f64, f64), block_size: f64) -> Self {
        Camera {
            center,
            viewport,
            block_size,
        }
    }

    /// Camera on the character with the default block size.
    pub fn following(character: &Character, viewport: (f64, f64)) -> Self {
        Self::new((character.x, character.y), viewport, BLOCK_SIZE)
    }

    pub fn follow(&mut self, character: &Character) {
        self.center = (character.x, character.y);
    }

    /// Top-left corner of the viewport in screen units of world space.
    pub fn offset(&self) -> (f64, f64) {
        (
            self.center.0 * self.block_size - self.viewport.0 / 2.0,
            self.center.1 * self.block_size - self.viewport.1 / 2.0,
        )
    }

    pub fn world_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let (ox, oy) = self.offset();
        (x * self.block_size - ox, y * self.block_size - oy)
    }

    /// Grid cell under a screen position.
    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64) -> (i32, i32) {
        let (ox, oy) = self.offset();
        (
            ((screen_x + ox) / self.block_size).floor() as i32,
            ((screen_y + oy) / self.block_size).floor() as i32,
        )
    }
}
