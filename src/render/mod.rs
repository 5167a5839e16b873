//! Presentation side of the game
//! Renderers read the grid and the player and never mutate either.

pub mod ascii;

use std::io;

use crate::core::grid::Grid;
use crate::player::character::Character;

pub use ascii::AsciiRenderer;

/// Draws one frame after the simulation ticks of that frame.
pub trait Renderer {
    fn render(&mut self, grid: &Grid, player: &Character) -> io::Result<()>;
}

/// Renderer that draws nothing, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _grid: &Grid, _player: &Character) -> io::Result<()> {
        Ok(())
    }
}
