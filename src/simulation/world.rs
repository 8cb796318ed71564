//! Simulation world that ties everything together
//!
//! Owns the shared grid and the vehicle roster, spawns one driver thread
//! per vehicle and joins them all before exposing the final grid.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::driver::drive;
use super::grid::Grid;
use super::spawner::place_vehicles;
use super::stats::SimStats;
use super::types::TICK_INTERVAL;
use super::vehicle::SimVehicle;

/// The top-level simulation: shared grid, vehicle roster, driver threads
///
/// The world owns the grid for the whole run and never mutates it, or the
/// roster, while driver threads are active.
pub struct SimWorld {
    grid: Arc<Mutex<Grid>>,
    vehicles: Vec<SimVehicle>,
    tick: Duration,
    /// Optional seeded RNG for reproducible placement
    rng: Option<StdRng>,
}

impl SimWorld {
    fn new_internal(height: usize, width: usize, rng: Option<StdRng>) -> Self {
        Self {
            grid: Arc::new(Mutex::new(Grid::new(height, width))),
            vehicles: Vec::new(),
            tick: TICK_INTERVAL,
            rng,
        }
    }

    pub fn new(height: usize, width: usize) -> Self {
        Self::new_internal(height, width, None)
    }

    /// Create a world with a seeded RNG for reproducible placement
    pub fn new_with_seed(height: usize, width: usize, seed: u64) -> Self {
        Self::new_internal(height, width, Some(StdRng::seed_from_u64(seed)))
    }

    /// Override the pause between movement steps (defaults to 500 ms)
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// The vehicle roster; final states are visible here after `run`
    #[allow(dead_code)]
    pub fn vehicles(&self) -> &[SimVehicle] {
        &self.vehicles
    }

    /// Place `count` vehicles on free road cells
    ///
    /// `count` must stay below the number of free road cells; see
    /// [`place_vehicles`].
    pub fn populate(&mut self, count: usize) -> Result<()> {
        let vehicles = {
            let mut grid = self
                .grid
                .lock()
                .map_err(|_| anyhow!("grid lock poisoned"))?;
            match &mut self.rng {
                Some(rng) => place_vehicles(&mut grid, count, rng)?,
                None => place_vehicles(&mut grid, count, &mut rand::rng())?,
            }
        };
        self.vehicles = vehicles;
        Ok(())
    }

    /// Render the shared grid
    ///
    /// The world calls this only before `run` starts and after it returns,
    /// so no driver holds the lock for long.
    pub fn render(&self) -> Result<String> {
        let grid = self
            .grid
            .lock()
            .map_err(|_| anyhow!("grid lock poisoned"))?;
        Ok(grid.render())
    }

    /// Run every vehicle to completion
    ///
    /// Spawns one named thread per vehicle, waits for all of them, and
    /// moves the finished vehicles back into the roster. After this returns
    /// every vehicle has exited and no cell is left occupied.
    pub fn run(&mut self) -> Result<SimStats> {
        let started = Instant::now();
        let spawned = self.vehicles.len();

        let mut handles = Vec::with_capacity(spawned);
        for vehicle in self.vehicles.drain(..) {
            let grid = Arc::clone(&self.grid);
            let tick = self.tick;
            let handle = thread::Builder::new()
                .name(format!("vehicle-{}", vehicle.id.0))
                .spawn(move || drive(vehicle, grid, tick))
                .context("failed to spawn driver thread")?;
            handles.push(handle);
        }

        let mut finished = Vec::with_capacity(spawned);
        for handle in handles {
            let vehicle = handle
                .join()
                .map_err(|_| anyhow!("driver thread panicked"))??;
            finished.push(vehicle);
        }

        let total_steps = finished.iter().map(|v| u64::from(v.steps_taken)).sum();
        let vehicles_exited = finished.iter().filter(|v| !v.is_active()).count();
        self.vehicles = finished;

        Ok(SimStats {
            vehicles_spawned: spawned,
            vehicles_exited,
            total_steps,
            elapsed: started.elapsed(),
        })
    }
}
