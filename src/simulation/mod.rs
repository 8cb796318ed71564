//! Standalone crossroad simulation module
//!
//! Everything needed to run the simulation from the console lives here:
//! the shared grid, vehicle placement, the per-vehicle driver loop and the
//! world harness that spawns and joins the driver threads.

mod config;
mod driver;
mod grid;
mod spawner;
mod stats;
mod types;
mod vehicle;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use config::NetworkConfig;
#[allow(unused_imports)]
pub use driver::drive;
#[allow(unused_imports)]
pub use grid::Grid;
#[allow(unused_imports)]
pub use spawner::place_vehicles;
#[allow(unused_imports)]
pub use stats::SimStats;
#[allow(unused_imports)]
pub use types::{CellSymbol, Direction, VehicleId, VehicleState, TICK_INTERVAL};
#[allow(unused_imports)]
pub use vehicle::{SimVehicle, StepResult};
pub use world::SimWorld;
