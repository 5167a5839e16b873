//! Terminal renderer.
//!
//! Draws a viewport of `columns x rows` characters centred on the player, one
//! character per block. With colour enabled every cell gets an ANSI 24-bit
//! background in the block's fallback colour.

use std::fmt::Write as _;
use std::io::{self, Write};

use super::Renderer;
use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::grid::Grid;
use crate::player::camera::Camera;
use crate::player::character::Character;

const PLAYER_GLYPH: char = '@';
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";

pub struct AsciiRenderer<W: Write> {
    out: W,
    pub columns: usize,
    pub rows: usize,
    pub color: bool,
    pub clear_screen: bool,
}

impl AsciiRenderer<io::Stdout> {
    pub fn stdout(columns: usize, rows: usize, color: bool) -> Self {
        Self::new(io::stdout(), columns, rows, color)
    }
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W, columns: usize, rows: usize, color: bool) -> Self {
        AsciiRenderer {
            out,
            columns,
            rows,
            color,
            clear_screen: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Camera used for this frame: one character per block, centred on the player.
    pub fn camera(&self, player: &Character) -> Camera {
        Camera::new(
            (player.x, player.y),
            (self.columns as f64, self.rows as f64),
            1.0,
        )
    }

    /// Builds the frame text without writing it.
    pub fn draw_frame(&self, grid: &Grid, player: &Character) -> String {
        let camera = self.camera(player);
        let player_cell = player.cell();
        let mut frame = String::with_capacity((self.columns + 1) * self.rows * 4);

        for row in 0..self.rows {
            for col in 0..self.columns {
                // Sample the block under the centre of the character cell
                let (x, y) = camera.screen_to_world(col as f64 + 0.5, row as f64 + 0.5);
                // Out-of-bounds cells show the sky behind the world
                let block = grid.get(x, y).unwrap_or(BlockType::Air);
                let glyph = if (x, y) == player_cell {
                    PLAYER_GLYPH
                } else {
                    block.glyph()
                };

                if self.color {
                    let [r, g, b] = block.color();
                    let _ = write!(frame, "\x1b[48;2;{r};{g};{b}m{glyph}");
                } else {
                    frame.push(glyph);
                }
            }
            if self.color {
                frame.push_str(RESET);
            }
            frame.push('\n');
        }
        frame
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn render(&mut self, grid: &Grid, player: &Character) -> io::Result<()> {
        let frame = self.draw_frame(grid, player);
        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(frame.as_bytes())?;
        writeln!(
            self.out,
            "x: {:.2}  y: {:.2}  grounded: {}",
            player.x, player.y, player.grounded
        )?;
        self.out.flush()
    }
}

impl Default for AsciiRenderer<io::Stdout> {
    fn default() -> Self {
        Self::stdout(VIEWPORT_COLUMNS, VIEWPORT_ROWS, false)
    }
}
