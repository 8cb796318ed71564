//! Core types for the crossroad simulation
//!
//! Standalone types shared by the grid, placement and driver logic.

use std::time::Duration;

/// A unique identifier for a vehicle
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub usize);

/// Symbol stored in one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSymbol {
    /// Nothing here
    Empty,
    /// Part of the horizontal road
    RoadHorizontal,
    /// Part of the vertical road
    RoadVertical,
    /// A vehicle currently sits on this cell
    Occupied,
}

impl CellSymbol {
    /// The display character used by the console renderer
    pub fn as_char(self) -> char {
        match self {
            CellSymbol::Empty => ' ',
            CellSymbol::RoadHorizontal => '-',
            CellSymbol::RoadVertical => '|',
            CellSymbol::Occupied => '*',
        }
    }
}

/// Travel axis of a vehicle, fixed at placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Moves along the horizontal road, column increasing
    Horizontal,
    /// Moves along the vertical road, row increasing
    Vertical,
}

impl Direction {
    /// The road symbol this direction travels on and restores when leaving a cell
    pub fn road_symbol(self) -> CellSymbol {
        match self {
            Direction::Horizontal => CellSymbol::RoadHorizontal,
            Direction::Vertical => CellSymbol::RoadVertical,
        }
    }
}

/// Lifecycle state of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleState {
    /// Still on the grid, driver running
    Active,
    /// Left the grid; terminal
    Exited,
}

/// Default pause between movement steps
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);
