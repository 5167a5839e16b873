//! Application module containing the game session and main loop
//!
//! `game` owns the world and the player, `clock` turns frame time into
//! fixed ticks and `autopilot` supplies input when nobody is at the keys.

mod autopilot;
mod clock;
mod game;

pub use autopilot::{Autopilot, InputSource};
pub use clock::FixedStep;
pub use game::{Args, Game, run_game};
