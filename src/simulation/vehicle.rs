//! Vehicle state and the single-step movement rule
//!
//! The step rule runs with the shared lock already held by the driver, so
//! each vacate-and-occupy pair is atomic with respect to every other
//! vehicle.

use anyhow::Result;

use super::grid::Grid;
use super::types::{CellSymbol, Direction, VehicleId, VehicleState};

/// Result of one movement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The vehicle advanced one cell
    Moved,
    /// The vehicle left the grid
    Exited,
}

/// A vehicle in the crossroad simulation
///
/// The vehicle carries no grid reference; the shared grid handle is passed
/// in explicitly, and only the owning driver ever mutates the position or
/// state fields.
#[derive(Debug, Clone)]
pub struct SimVehicle {
    pub id: VehicleId,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub state: VehicleState,
    /// Number of successful advances so far
    pub steps_taken: u32,
}

impl SimVehicle {
    pub fn new(id: VehicleId, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            id,
            row,
            col,
            direction,
            state: VehicleState::Active,
            steps_taken: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == VehicleState::Active
    }

    /// Execute one movement decision
    ///
    /// The caller must hold the grid lock for the whole call. The vehicle
    /// advances when the next cell along its axis holds exactly its own road
    /// symbol; anything else ahead (the grid edge, another vehicle, the
    /// cross road) makes it leave the grid instead of waiting. Either way
    /// the current cell reverts to the vehicle's road symbol.
    pub fn step(&mut self, grid: &mut Grid) -> Result<StepResult> {
        let road = self.direction.road_symbol();
        let (next_row, next_col) = match self.direction {
            Direction::Horizontal => (self.row, self.col + 1),
            Direction::Vertical => (self.row + 1, self.col),
        };

        let can_advance = next_row < grid.height()
            && next_col < grid.width()
            && grid.get(next_row, next_col)? == road;

        grid.set(self.row, self.col, road)?;

        if can_advance {
            grid.set(next_row, next_col, CellSymbol::Occupied)?;
            self.row = next_row;
            self.col = next_col;
            self.steps_taken += 1;
            Ok(StepResult::Moved)
        } else {
            self.state = VehicleState::Exited;
            Ok(StepResult::Exited)
        }
    }
}
