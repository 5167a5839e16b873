use crate::app::game::Game;
use crate::player::input::{EditRequest, InputState};

/// Supplies the per-tick input intent and any pending block edits.
pub trait InputSource {
    fn poll(&mut self, game: &Game) -> InputState;

    fn drain_edits(&mut self) -> Vec<EditRequest> {
        Vec::new()
    }
}

/// Holding the same keys every tick.
impl InputSource for InputState {
    fn poll(&mut self, _game: &Game) -> InputState {
        *self
    }
}

/// Self-driving input: walks, hops over steps and digs through walls.
#[derive(Debug, Clone)]
pub struct Autopilot {
    direction: i32,
    stuck_ticks: u32,
    dig_after: u32,
    last_x: Option<f64>,
    pending: Vec<EditRequest>,
}

impl Autopilot {
    pub fn new(dig_after: u32) -> Self {
        Autopilot {
            direction: 1,
            stuck_ticks: 0,
            dig_after,
            last_x: None,
            pending: Vec::new(),
        }
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(30)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, game: &Game) -> InputState {
        let grid = game.grid();
        let player = game.player();
        let (cx, cy) = player.cell();

        if !grid.in_bounds(cx + self.direction, cy) {
            self.direction = -self.direction;
            self.stuck_ticks = 0;
        }
        let ahead = cx + self.direction;

        if self.last_x == Some(player.x) {
            self.stuck_ticks += 1;
        } else {
            self.stuck_ticks = 0;
        }
        self.last_x = Some(player.x);

        // Dig from the ground so the hole is at walking height
        if self.stuck_ticks >= self.dig_after && player.grounded && grid.is_solid(ahead, cy) {
            self.pending.push(EditRequest::break_block(ahead, cy));
            self.stuck_ticks = 0;
        }

        InputState {
            left: self.direction < 0,
            right: self.direction > 0,
            jump: grid.is_solid(ahead, cy),
        }
    }

    fn drain_edits(&mut self) -> Vec<EditRequest> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::block::BlockType;
    use crate::core::grid::Grid;
    use crate::player::character::{Character, PhysicsParams};

    /// Flat floor on row 5 with a tall wall at column 6.
    fn walled_world() -> Grid {
        let mut grid = Grid::new(12, 6);
        for x in 0..12 {
            grid.set(x, 5, BlockType::Stone);
        }
        for y in 0..5 {
            grid.set(6, y, BlockType::Stone);
        }
        grid
    }

    #[test]
    fn test_jumps_when_blocked() {
        let game = Game::new(
            walled_world(),
            Character::spawn_at(5.5, 4.0),
            PhysicsParams::default(),
        );
        let mut pilot = Autopilot::default();
        let input = pilot.poll(&game);
        assert!(input.right && input.jump && !input.left);
    }

    #[test]
    fn test_digs_through_wall_when_stuck() {
        let mut game = Game::new(
            walled_world(),
            Character::spawn_at(5.5, 4.0),
            PhysicsParams::default(),
        );
        let mut pilot = Autopilot::new(5);
        for _ in 0..200 {
            game.step(&mut pilot);
            if game.player().x > 6.5 {
                break;
            }
        }
        assert_eq!(game.grid().get(6, 4), Some(BlockType::Air));
        assert!(game.player().x > 6.0);
    }

    #[test]
    fn test_turns_around_at_world_edge() {
        let game = Game::new(
            walled_world(),
            Character::spawn_at(11.5, 4.0),
            PhysicsParams::default(),
        );
        let mut pilot = Autopilot::default();
        let input = pilot.poll(&game);
        assert_eq!(pilot.direction(), -1);
        assert!(input.left && !input.right);
    }
}
