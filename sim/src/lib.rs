pub mod action;
pub mod aggregate;
pub mod bird;
pub mod catalog;
pub mod error;
pub mod round;
pub mod simulation;

pub use action::Action;
pub use bird::{Bird, BirdPair, Slot};
pub use catalog::Strategy;
pub use error::ConfigError;
pub use simulation::{Simulation, SimulationConfig, SimulationState};

use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::RoundRecord;

/// Run a complete simulation from a seed
pub fn run_simulation(config: SimulationConfig, seed: u64) -> Result<Vec<RoundRecord>, ConfigError> {
    let simulation = Simulation::new(config, StdRng::seed_from_u64(seed))?;
    Ok(simulation.run())
}
