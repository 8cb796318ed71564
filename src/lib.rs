//! Crossroad Simulation Library
//!
//! A thread-per-vehicle traffic simulation over a cross-shaped road grid,
//! rendered to the console.

pub mod simulation;
