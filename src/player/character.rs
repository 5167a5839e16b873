use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::core::grid::Grid;
use crate::player::input::InputState;

/// Per-tick movement constants, in tiles per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub speed: f64,
    pub gravity: f64,
    /// Upward velocity set on jump. Negative because `y` grows downward.
    pub jump_impulse: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            gravity: PLAYER_GRAVITY,
            jump_impulse: PLAYER_JUMP_IMPULSE,
        }
    }
}

/// Kinematic state of the player, a point at `(x, y)` in tile units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Character {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub grounded: bool,
}

impl Character {
    pub fn spawn_at(x: f64, y: f64) -> Self {
        Character {
            x,
            y,
            ..Default::default()
        }
    }

    /// Grid cell containing the player.
    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }

    pub fn update(&mut self, grid: &Grid, input: &InputState, params: &PhysicsParams) {
        *self = advance(grid, self, input, params);
    }
}

/// One physics tick. X is resolved before Y, and the Y probe uses the new X.
pub fn advance(
    grid: &Grid,
    state: &Character,
    input: &InputState,
    params: &PhysicsParams,
) -> Character {
    let mut next = *state;

    next.vx = if input.left {
        -params.speed
    } else if input.right {
        params.speed
    } else {
        0.0
    };

    if input.jump && next.grounded {
        next.vy = params.jump_impulse;
        next.grounded = false;
    }

    next.vy += params.gravity;

    let new_x = next.x + next.vx;
    if !grid.is_solid(new_x.floor() as i32, next.y.floor() as i32) {
        next.x = new_x;
    }

    let new_y = next.y + next.vy;
    if !grid.is_solid(next.x.floor() as i32, new_y.floor() as i32) {
        next.y = new_y;
        next.grounded = false;
    } else {
        if next.vy > 0.0 {
            next.y = next.y.floor();
            next.grounded = true;
        }
        next.vy = 0.0;
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::block::BlockType;

    /// 10x10 air box with a stone floor on row 8.
    fn floor_grid() -> Grid {
        let mut grid = Grid::new(10, 10);
        for x in 0..10 {
            grid.set(x, 8, BlockType::Stone);
        }
        grid
    }

    const JUMP: InputState = InputState {
        left: false,
        right: false,
        jump: true,
    };

    #[test]
    fn test_jump_from_ground() {
        let grid = floor_grid();
        let params = PhysicsParams::default();
        let state = Character {
            grounded: true,
            ..Character::spawn_at(4.5, 7.0)
        };

        let next = advance(&grid, &state, &JUMP, &params);
        assert_eq!(next.vy, params.jump_impulse + params.gravity);
        assert!(!next.grounded);
        assert_eq!(next.y, 7.0 + (params.jump_impulse + params.gravity));
    }

    #[test]
    fn test_jump_ignored_in_air() {
        let grid = floor_grid();
        let params = PhysicsParams::default();
        let state = Character::spawn_at(4.5, 3.0);
        let next = advance(&grid, &state, &JUMP, &params);
        assert_eq!(next.vy, params.gravity);
    }

    #[test]
    fn test_landing_snaps_to_floor() {
        let grid = floor_grid();
        let params = PhysicsParams::default();
        let state = Character {
            vy: 0.5,
            ..Character::spawn_at(4.5, 7.6)
        };

        let next = advance(&grid, &state, &InputState::IDLE, &params);
        assert_eq!(next.y, 7.0);
        assert_eq!(next.vy, 0.0);
        assert!(next.grounded);
    }

    #[test]
    fn test_ceiling_stops_without_grounding() {
        let mut grid = Grid::new(10, 10);
        grid.set(4, 2, BlockType::Stone);
        let params = PhysicsParams::default();
        let state = Character {
            vy: -0.5,
            ..Character::spawn_at(4.5, 3.2)
        };

        let next = advance(&grid, &state, &InputState::IDLE, &params);
        assert_eq!(next.y, 3.2);
        assert_eq!(next.vy, 0.0);
        assert!(!next.grounded);
    }

    #[test]
    fn test_horizontal_velocity_is_set_not_accumulated() {
        let grid = Grid::new(10, 10);
        let params = PhysicsParams::default();
        let mut state = Character::spawn_at(5.0, 5.0);

        let right = InputState {
            right: true,
            ..InputState::IDLE
        };
        state.update(&grid, &right, &params);
        state.update(&grid, &right, &params);
        assert_eq!(state.vx, params.speed);

        let both = InputState {
            left: true,
            right: true,
            jump: false,
        };
        state.update(&grid, &both, &params);
        assert_eq!(state.vx, -params.speed);

        state.update(&grid, &InputState::IDLE, &params);
        assert_eq!(state.vx, 0.0);
    }

    #[test]
    fn test_wall_blocks_move_but_keeps_velocity() {
        let mut grid = Grid::new(10, 10);
        grid.set(6, 5, BlockType::Dirt);
        let params = PhysicsParams::default();
        let state = Character::spawn_at(5.95, 5.5);
        let right = InputState {
            right: true,
            ..InputState::IDLE
        };

        let next = advance(&grid, &state, &right, &params);
        assert_eq!(next.x, 5.95);
        assert_eq!(next.vx, params.speed);
    }

    #[test]
    fn test_leaves_are_walk_through() {
        let mut grid = Grid::new(10, 10);
        grid.set(6, 5, BlockType::Leaves);
        let params = PhysicsParams::default();
        let state = Character::spawn_at(5.95, 5.5);
        let right = InputState {
            right: true,
            ..InputState::IDLE
        };
        let next = advance(&grid, &state, &right, &params);
        assert!(next.x > 6.0);
    }

    #[test]
    fn test_vertical_probe_uses_updated_x() {
        // Floor only under column 6: stepping right onto it must land
        let mut grid = Grid::new(10, 10);
        grid.set(6, 6, BlockType::Stone);
        let params = PhysicsParams::default();
        let state = Character {
            vy: 0.5,
            ..Character::spawn_at(5.95, 5.8)
        };
        let right = InputState {
            right: true,
            ..InputState::IDLE
        };

        let next = advance(&grid, &state, &right, &params);
        assert!(next.x > 6.0);
        assert_eq!(next.y, 5.0);
        assert!(next.grounded);
    }

    #[test]
    fn test_world_edges_are_walls() {
        let grid = Grid::new(3, 3);
        let params = PhysicsParams::default();
        let state = Character::spawn_at(0.05, 1.5);
        let left = InputState {
            left: true,
            ..InputState::IDLE
        };
        let next = advance(&grid, &state, &left, &params);
        assert_eq!(next.x, 0.05);

        // Falling out of the bottom lands on the edge
        let state = Character {
            vy: 0.5,
            ..Character::spawn_at(1.5, 2.7)
        };
        let next = advance(&grid, &state, &InputState::IDLE, &params);
        assert_eq!(next.y, 2.0);
        assert!(next.grounded);
    }

    #[test]
    fn test_free_fall_accumulates_in_double_precision() {
        let grid = Grid::new(10, 40);
        let params = PhysicsParams::default();
        let mut state = Character::spawn_at(4.5, 1.0);

        let (mut y, mut vy) = (1.0_f64, 0.0_f64);
        for _ in 0..60 {
            state.update(&grid, &InputState::IDLE, &params);
            vy += 0.01;
            y += vy;
            assert_eq!(state.y, y);
            assert_eq!(state.vy, vy);
        }
    }

    #[test]
    fn test_trajectory_is_deterministic() {
        let grid = floor_grid();
        let params = PhysicsParams::default();
        let inputs: Vec<InputState> = (0..200)
            .map(|i| InputState {
                left: i % 50 > 40,
                right: i % 7 < 4,
                jump: i % 23 == 0,
            })
            .collect();

        let run = || {
            let mut state = Character::spawn_at(2.5, 1.0);
            inputs
                .iter()
                .map(|input| {
                    state.update(&grid, input, &params);
                    state
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
