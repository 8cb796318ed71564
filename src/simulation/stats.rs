//! End-of-run statistics
//!
//! Counters gathered once every driver has finished. Purely observational;
//! nothing in the simulation depends on them.

use std::time::Duration;

use log::info;

/// Counters for one complete run
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    pub vehicles_spawned: usize,
    pub vehicles_exited: usize,
    pub total_steps: u64,
    pub elapsed: Duration,
}

impl SimStats {
    /// Emit the end-of-run summary to the log
    pub fn log_summary(&self) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Elapsed time: {:.2}s", self.elapsed.as_secs_f64());
        info!("Vehicles spawned: {}", self.vehicles_spawned);
        info!("Vehicles exited: {}", self.vehicles_exited);
        info!("Total steps taken: {}", self.total_steps);
    }
}
