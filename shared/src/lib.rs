pub mod record;
pub mod strategy;

pub use record::*;
pub use strategy::*;

/// Score every bird starts the simulation with
pub const START_DNA_POINTS: i64 = 50;

/// Birds seeded per strategy at round 0
pub const BIRDS_PER_STRATEGY: usize = 10;

/// Number of records in a finished series (round 0 included)
pub const ROUNDS: u32 = 400;
