//! Vehicle placement
//!
//! Seeds vehicles onto free road cells by rejection sampling.

use anyhow::Result;
use rand::Rng;

use super::grid::Grid;
use super::types::{CellSymbol, Direction, VehicleId};
use super::vehicle::SimVehicle;

/// Place `count` vehicles on free road cells
///
/// Each vehicle gets a uniformly random direction and a uniformly random
/// cell on that direction's road; the draw (direction included) repeats
/// until the chosen cell holds exactly the direction's road symbol, which
/// rules out cells taken by earlier vehicles and, for horizontal vehicles,
/// the intersection cell, which stores the vertical symbol. The chosen cell
/// is marked `Occupied` before the next vehicle draws.
///
/// `count` must stay below the number of free road cells
/// (`height + width - 1` in total); past that the rejection loop cannot
/// terminate. This is a precondition on the caller, not a runtime check.
pub fn place_vehicles<R: Rng>(
    grid: &mut Grid,
    count: usize,
    rng: &mut R,
) -> Result<Vec<SimVehicle>> {
    let mut vehicles = Vec::with_capacity(count);

    for id in 0..count {
        let (row, col, direction) = loop {
            let direction = if rng.random_bool(0.5) {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            let (row, col) = match direction {
                Direction::Horizontal => (grid.road_row(), rng.random_range(0..grid.width())),
                Direction::Vertical => (rng.random_range(0..grid.height()), grid.road_col()),
            };
            if grid.get(row, col)? == direction.road_symbol() {
                break (row, col, direction);
            }
        };

        grid.set(row, col, CellSymbol::Occupied)?;
        vehicles.push(SimVehicle::new(VehicleId(id), row, col, direction));
    }

    Ok(vehicles)
}
