//! Per-vehicle driver loop
//!
//! One driver runs on one dedicated thread and owns its vehicle outright;
//! the grid is the only shared state, and every movement decision happens
//! with the grid lock held. The lock is never held across the tick pause.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use log::{debug, info};

use super::grid::Grid;
use super::vehicle::{SimVehicle, StepResult};

/// Drive one vehicle until it leaves the grid
///
/// Returns the vehicle so the harness can inspect its final state after
/// joining the thread. A driver that exits skips the final pause and
/// returns immediately.
pub fn drive(
    mut vehicle: SimVehicle,
    grid: Arc<Mutex<Grid>>,
    tick: Duration,
) -> Result<SimVehicle> {
    loop {
        let result = {
            let mut grid = grid
                .lock()
                .map_err(|_| anyhow!("grid lock poisoned by another driver"))?;
            vehicle.step(&mut grid)?
        };

        match result {
            StepResult::Moved => {
                debug!(
                    "vehicle {} advanced to ({}, {})",
                    vehicle.id.0, vehicle.row, vehicle.col
                );
                thread::sleep(tick);
            }
            StepResult::Exited => {
                info!(
                    "vehicle {} exited at ({}, {}) after {} steps",
                    vehicle.id.0, vehicle.row, vehicle.col, vehicle.steps_taken
                );
                return Ok(vehicle);
            }
        }
    }
}
