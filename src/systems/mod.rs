//! Application systems
//!
//! Frame-loop systems extracted from main.rs for testability.

mod simulation;

pub use simulation::{SimulationResult, SimulationSystem};
